//! Settings command: Show the settings file and toggle the path display

use anyhow::Result;
use tasklens_core::{JsonSettingsStore, SettingsStore};
use tracing::info;

/// Optionally update the path preference, then describe the settings
///
/// # Errors
/// Returns an error if the settings cannot be saved or encoded.
pub fn execute(store: &JsonSettingsStore, absolute_paths: Option<bool>) -> Result<String> {
    let mut settings = store.load();
    if let Some(show) = absolute_paths {
        settings = settings.with_absolute_file_path(show);
        store.save(&settings)?;
        info!("✓ Absolute file paths {}", if show { "enabled" } else { "disabled" });
    }

    Ok(format!(
        "Settings file: {}\n{}",
        store.path().display(),
        serde_json::to_string_pretty(&settings)?
    ))
}

/// Run the settings command
///
/// # Errors
/// See [`execute`].
pub fn run(store: &JsonSettingsStore, absolute_paths: Option<bool>) -> Result<()> {
    println!("{}", execute(store, absolute_paths)?);
    Ok(())
}

#[cfg(test)]
mod tests;
