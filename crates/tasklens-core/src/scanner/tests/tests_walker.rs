//! Tests for the project file walker

#![allow(clippy::expect_used)]

use crate::scanner::{ProjectFiles, SourceLanguage};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_walker_finds_c_family_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let src_dir = temp_dir.path().join("src");
    fs::create_dir(&src_dir).expect("Failed to create src dir");

    fs::write(src_dir.join("main.cpp"), "int main() {}").expect("Failed to write file");
    fs::write(src_dir.join("util.h"), "#pragma once").expect("Failed to write file");
    fs::write(src_dir.join("README.md"), "# Hello").expect("Failed to write file");

    let files = ProjectFiles::new(temp_dir.path()).collect();

    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| SourceLanguage::from_path(f) == Some(SourceLanguage::Cpp)));
}

#[test]
fn test_walker_results_are_sorted() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for name in ["c.c", "a.c", "b.c"] {
        fs::write(temp_dir.path().join(name), "").expect("Failed to write file");
    }

    let files = ProjectFiles::new(temp_dir.path()).collect();
    let names: Vec<_> = files
        .iter()
        .filter_map(|f| f.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, vec!["a.c", "b.c", "c.c"]);
}

#[test]
fn test_walker_with_language_filter() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    fs::write(temp_dir.path().join("main.rs"), "fn main() {}").expect("Failed to write file");
    fs::write(temp_dir.path().join("app.java"), "class App {}").expect("Failed to write file");

    let files = ProjectFiles::new(temp_dir.path())
        .with_languages(vec![SourceLanguage::Java])
        .collect();

    assert_eq!(files.len(), 1);
    assert_eq!(
        SourceLanguage::from_path(&files[0]),
        Some(SourceLanguage::Java)
    );
}

#[test]
fn test_walker_all_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    fs::write(temp_dir.path().join("main.c"), "").expect("Failed to write file");
    fs::write(temp_dir.path().join("notes.txt"), "").expect("Failed to write file");

    let files = ProjectFiles::new(temp_dir.path()).all_files().collect();

    assert_eq!(files.len(), 2);
}

#[test]
fn test_walker_respects_gitignore() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let build_dir = temp_dir.path().join("build");
    fs::create_dir(&build_dir).expect("Failed to create build dir");

    fs::write(temp_dir.path().join(".gitignore"), "build/\n").expect("Failed to write file");
    fs::write(temp_dir.path().join("main.c"), "").expect("Failed to write file");
    fs::write(build_dir.join("generated.c"), "").expect("Failed to write file");

    let files = ProjectFiles::new(temp_dir.path()).collect();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("main.c"));
}

#[test]
fn test_walker_root() {
    let walker = ProjectFiles::new("/some/project");
    assert_eq!(walker.root(), std::path::Path::new("/some/project"));
}
