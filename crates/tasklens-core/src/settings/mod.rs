//! Settings module: Keyword colors and display preferences
//!
//! Settings are persisted as a small JSON document:
//!
//! ```json
//! {
//!   "ShowAbsoluteFilePath": false,
//!   "Entries": [
//!     { "Keyword": "TODO", "Color": "#3498DB" }
//!   ]
//! }
//! ```
//!
//! The scanner never sees this store; hosts load it, hand the resulting
//! vocabulary to a sweep, and use the colors when rendering rows.

mod color;
mod store;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::vocabulary::KeywordVocabulary;

pub use color::{Color, ColorParseError};
pub use store::{
    default_settings_path, JsonSettingsStore, MemorySettingsStore, SettingsError, SettingsStore,
    CONFIG_ENV_VAR,
};

/// Keywords enabled out of the box, with their colors
pub const DEFAULT_KEYWORDS: [(&str, Color); 7] = [
    ("TODO", Color::rgb(0x34, 0x98, 0xDB)),
    ("FIXME", Color::rgb(0xE7, 0x4C, 0x3C)),
    ("HACK", Color::rgb(0xE6, 0x7E, 0x22)),
    ("NOTE", Color::rgb(0xF1, 0xC4, 0x0F)),
    ("OPTIMIZE", Color::rgb(0x2E, 0xCC, 0x71)),
    ("BUG", Color::rgb(0x9B, 0x59, 0xB6)),
    ("ATTN", Color::rgb(0x00, 0xBC, 0xD4)),
];

/// One configured keyword and its display color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSetting {
    #[serde(rename = "Keyword")]
    pub keyword: String,
    #[serde(rename = "Color")]
    pub color: Color,
}

impl KeywordSetting {
    #[must_use]
    pub fn new(keyword: impl Into<String>, color: Color) -> Self {
        Self {
            keyword: keyword.into(),
            color,
        }
    }
}

/// Wire shape of the settings file
#[derive(Debug, Serialize, Deserialize)]
struct SettingsDocument {
    #[serde(rename = "ShowAbsoluteFilePath", default)]
    show_absolute_file_path: bool,
    #[serde(rename = "Entries", default)]
    entries: Vec<KeywordSetting>,
}

/// In-memory settings: keyword colors plus the path display preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    entries: BTreeMap<String, Color>,
    pub show_absolute_file_path: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            entries: DEFAULT_KEYWORDS
                .iter()
                .map(|(keyword, color)| ((*keyword).to_string(), *color))
                .collect(),
            show_absolute_file_path: false,
        }
    }
}

impl Settings {
    /// Settings with no keywords at all
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
            show_absolute_file_path: false,
        }
    }

    /// Add or recolor a keyword. Blank keywords are ignored.
    pub fn set_keyword(&mut self, keyword: impl AsRef<str>, color: Color) {
        let keyword = keyword.as_ref().trim();
        if !keyword.is_empty() {
            self.entries.insert(keyword.to_string(), color);
        }
    }

    /// Remove a keyword; returns its color if it was configured
    pub fn remove_keyword(&mut self, keyword: &str) -> Option<Color> {
        self.entries.remove(keyword.trim())
    }

    /// Color for a keyword, matched ignoring case
    #[must_use]
    pub fn color_of(&self, keyword: &str) -> Option<Color> {
        if let Some(color) = self.entries.get(keyword) {
            return Some(*color);
        }
        let upper = keyword.to_uppercase();
        self.entries
            .iter()
            .find(|(configured, _)| configured.to_uppercase() == upper)
            .map(|(_, color)| *color)
    }

    /// Configured keywords in stable order
    pub fn entries(&self) -> impl Iterator<Item = KeywordSetting> + '_ {
        self.entries
            .iter()
            .map(|(keyword, color)| KeywordSetting::new(keyword.clone(), *color))
    }

    /// The keyword vocabulary to sweep with
    #[must_use]
    pub fn vocabulary(&self) -> KeywordVocabulary {
        self.entries.keys().collect()
    }

    /// Builder-style setter for the path display preference
    #[must_use]
    pub fn with_absolute_file_path(mut self, show: bool) -> Self {
        self.show_absolute_file_path = show;
        self
    }
}

impl Serialize for Settings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SettingsDocument {
            show_absolute_file_path: self.show_absolute_file_path,
            entries: self.entries().collect(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Settings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = SettingsDocument::deserialize(deserializer)?;
        let mut settings = Self::empty();
        settings.show_absolute_file_path = document.show_absolute_file_path;
        for entry in document.entries {
            settings.set_keyword(&entry.keyword, entry.color);
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests;
