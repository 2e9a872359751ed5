//! Project file walker: Lists the candidate files of a project directory

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use super::SourceLanguage;

/// Enumerates the files that belong to a project rooted at a directory
///
/// Respects `.gitignore` and friends. By default only files with a
/// C-style comment language are listed.
#[derive(Debug)]
pub struct ProjectFiles {
    root: PathBuf,
    languages: Option<Vec<SourceLanguage>>,
}

impl ProjectFiles {
    /// Create a walker for the given root directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            languages: Some(SourceLanguage::ALL.to_vec()),
        }
    }

    /// Restrict the walk to specific languages
    #[must_use]
    pub fn with_languages(mut self, languages: Vec<SourceLanguage>) -> Self {
        self.languages = Some(languages);
        self
    }

    /// List every file regardless of extension
    #[must_use]
    pub fn all_files(mut self) -> Self {
        self.languages = None;
        self
    }

    /// Walk the directory; results are sorted by path so sweeps are stable
    #[must_use]
    pub fn collect(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .filter_entry(|entry| entry.file_name() != ".git")
            .build()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
            .map(ignore::DirEntry::into_path)
            .filter(|path| self.accepts(path))
            .collect();
        files.sort();
        files
    }

    /// Get the root directory being walked
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn accepts(&self, path: &Path) -> bool {
        match &self.languages {
            None => true,
            Some(languages) => {
                SourceLanguage::from_path(path).is_some_and(|lang| languages.contains(&lang))
            }
        }
    }
}
