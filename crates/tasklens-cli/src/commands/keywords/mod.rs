//! Keywords command: Inspect and edit the configured keyword vocabulary

use anyhow::{Context, Result};
use tasklens_core::{Color, Settings, SettingsStore};
use tracing::info;

use super::KeywordCommands;

/// Apply a keyword command to the store and return the lines to print
///
/// # Errors
/// Returns an error if a color is malformed or the settings cannot be saved.
pub fn execute(command: &KeywordCommands, store: &impl SettingsStore) -> Result<Vec<String>> {
    match command {
        KeywordCommands::List => Ok(describe(&store.load())),
        KeywordCommands::Add { keyword, color } => {
            anyhow::ensure!(!keyword.trim().is_empty(), "Keyword must not be blank");
            let color: Color = color
                .parse()
                .with_context(|| format!("Invalid color for {keyword}"))?;
            let mut settings = store.load();
            settings.set_keyword(keyword, color);
            store.save(&settings)?;
            info!("✓ Keyword {} set to {}", keyword.trim(), color);
            Ok(describe(&settings))
        }
        KeywordCommands::Remove { keyword } => {
            let mut settings = store.load();
            let removed = settings.remove_keyword(keyword);
            anyhow::ensure!(removed.is_some(), "Keyword {keyword} is not configured");
            store.save(&settings)?;
            info!("✓ Keyword {} removed", keyword.trim());
            Ok(describe(&settings))
        }
        KeywordCommands::Reset => {
            let settings = Settings::default()
                .with_absolute_file_path(store.load().show_absolute_file_path);
            store.save(&settings)?;
            info!("✓ Keywords reset to defaults");
            Ok(describe(&settings))
        }
    }
}

/// Run the keywords command
///
/// # Errors
/// See [`execute`].
pub fn run(command: &KeywordCommands, store: &impl SettingsStore) -> Result<()> {
    for line in execute(command, store)? {
        println!("{line}");
    }
    Ok(())
}

fn describe(settings: &Settings) -> Vec<String> {
    let lines: Vec<String> = settings
        .entries()
        .map(|entry| format!("{:<12} {}", entry.keyword, entry.color))
        .collect();
    if lines.is_empty() {
        vec!["No keywords configured".to_string()]
    } else {
        lines
    }
}

#[cfg(test)]
mod tests;
