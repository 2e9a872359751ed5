//! Settings persistence

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use thiserror::Error;
use tracing::{debug, warn};

use super::Settings;

/// Environment variable that overrides the settings file location
pub const CONFIG_ENV_VAR: &str = "TASKLENS_CONFIG";

const CONFIG_DIR: &str = "tasklens";
const CONFIG_FILE: &str = "tasklens.conf";

/// Errors that can occur while reading or writing settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("No user configuration directory available")]
    NoConfigDir,

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Loads and saves keyword settings
pub trait SettingsStore {
    /// Current settings; falls back to defaults if nothing usable is stored
    fn load(&self) -> Settings;

    /// Persist `settings`
    ///
    /// # Errors
    /// Returns an error if the settings cannot be written.
    fn save(&self, settings: &Settings) -> Result<(), SettingsError>;
}

/// Per-user settings file location
///
/// `$TASKLENS_CONFIG` wins when set; otherwise
/// `<config dir>/tasklens/config/tasklens.conf`.
///
/// # Errors
/// Returns [`SettingsError::NoConfigDir`] when the platform has no
/// configuration directory and the override is unset.
pub fn default_settings_path() -> Result<PathBuf, SettingsError> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR).join("config").join(CONFIG_FILE))
        .ok_or(SettingsError::NoConfigDir)
}

/// Settings stored as a JSON file
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at [`default_settings_path`]
    ///
    /// # Errors
    /// Returns an error if no default location can be determined.
    pub fn at_default_location() -> Result<Self, SettingsError> {
        default_settings_path().map(Self::new)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the settings file without any fallback
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid settings JSON.
    pub fn try_load(&self) -> Result<Settings, SettingsError> {
        let text = fs::read_to_string(&self.path).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| SettingsError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> Settings {
        if !self.path.exists() {
            debug!("Creating default settings at {}", self.path.display());
            let defaults = Settings::default();
            if let Err(e) = self.save(&defaults) {
                warn!("Failed to write default settings: {}", e);
            }
            return defaults;
        }

        self.try_load().unwrap_or_else(|e| {
            warn!("{}; using default settings", e);
            Settings::default()
        })
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Settings held in memory, for embedding hosts and tests
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    settings: Mutex<Settings>,
}

impl MemorySettingsStore {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Mutex::new(settings),
        }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Settings {
        self.settings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        *self.settings.lock().unwrap_or_else(PoisonError::into_inner) = settings.clone();
        Ok(())
    }
}
