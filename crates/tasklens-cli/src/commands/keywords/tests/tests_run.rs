//! Tests for the keywords command

#![allow(clippy::expect_used)]

use tasklens_core::{Color, JsonSettingsStore, MemorySettingsStore, Settings, SettingsStore};
use tempfile::TempDir;

use crate::commands::keywords::execute;
use crate::commands::KeywordCommands;

fn add(keyword: &str, color: &str) -> KeywordCommands {
    KeywordCommands::Add {
        keyword: keyword.to_string(),
        color: color.to_string(),
    }
}

#[test]
fn test_list_shows_defaults() {
    let store = MemorySettingsStore::new(Settings::default());

    let lines = execute(&KeywordCommands::List, &store).expect("Failed to list");

    assert_eq!(lines.len(), 7);
    assert!(lines.iter().any(|line| line.starts_with("TODO") && line.ends_with("#3498DB")));
}

#[test]
fn test_list_empty_vocabulary() {
    let store = MemorySettingsStore::new(Settings::empty());

    let lines = execute(&KeywordCommands::List, &store).expect("Failed to list");

    assert_eq!(lines, vec!["No keywords configured"]);
}

#[test]
fn test_add_saves_keyword() {
    let store = MemorySettingsStore::new(Settings::empty());

    execute(&add("REVIEW", "#112233"), &store).expect("Failed to add");

    assert_eq!(
        store.load().color_of("REVIEW"),
        Some(Color::rgb(0x11, 0x22, 0x33))
    );
}

#[test]
fn test_add_rejects_bad_color() {
    let store = MemorySettingsStore::new(Settings::empty());

    let result = execute(&add("REVIEW", "red"), &store);

    assert!(result.is_err());
    assert!(store.load().vocabulary().is_empty());
}

#[test]
fn test_add_rejects_blank_keyword() {
    let store = MemorySettingsStore::new(Settings::empty());

    assert!(execute(&add("   ", "#112233"), &store).is_err());
}

#[test]
fn test_remove_keyword() {
    let store = MemorySettingsStore::new(Settings::default());

    execute(
        &KeywordCommands::Remove {
            keyword: "HACK".to_string(),
        },
        &store,
    )
    .expect("Failed to remove");

    assert!(!store.load().vocabulary().contains("HACK"));
    assert_eq!(store.load().vocabulary().len(), 6);
}

#[test]
fn test_remove_unknown_keyword_fails() {
    let store = MemorySettingsStore::new(Settings::default());

    let result = execute(
        &KeywordCommands::Remove {
            keyword: "NOPE".to_string(),
        },
        &store,
    );

    assert!(result.is_err());
}

#[test]
fn test_reset_keeps_path_preference() {
    let store = MemorySettingsStore::new(Settings::empty().with_absolute_file_path(true));

    execute(&KeywordCommands::Reset, &store).expect("Failed to reset");

    assert_eq!(
        store.load(),
        Settings::default().with_absolute_file_path(true)
    );
}

#[test]
fn test_add_persists_to_json_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config").join("tasklens.conf");
    let store = JsonSettingsStore::new(&path);

    execute(&add("WIP", "#00FF00"), &store).expect("Failed to add");

    let reloaded = JsonSettingsStore::new(&path)
        .try_load()
        .expect("Failed to reload settings");
    assert_eq!(reloaded.color_of("WIP"), Some(Color::rgb(0, 0xFF, 0)));
    assert_eq!(reloaded.vocabulary().len(), 8);
}
