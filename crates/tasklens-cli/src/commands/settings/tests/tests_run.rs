//! Tests for the settings command

#![allow(clippy::expect_used)]

use tasklens_core::{JsonSettingsStore, SettingsStore};
use tempfile::TempDir;

use crate::commands::settings::execute;

#[test]
fn test_show_creates_default_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("tasklens.conf");
    let store = JsonSettingsStore::new(&path);

    let output = execute(&store, None).expect("Failed to show settings");

    assert!(path.exists());
    assert!(output.starts_with("Settings file: "));
    assert!(output.contains("\"ShowAbsoluteFilePath\": false"));
    assert!(output.contains("\"Keyword\": \"ATTN\""));
}

#[test]
fn test_toggle_absolute_paths() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = JsonSettingsStore::new(temp_dir.path().join("tasklens.conf"));

    let output = execute(&store, Some(true)).expect("Failed to update settings");

    assert!(output.contains("\"ShowAbsoluteFilePath\": true"));
    assert!(store.load().show_absolute_file_path);
}
