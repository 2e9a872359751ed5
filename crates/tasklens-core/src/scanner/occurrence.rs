//! Occurrence model types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// One keyword found in a comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Matched keyword, upper-cased and trimmed
    pub keyword: String,
    /// Owning project name, copied verbatim from the caller
    pub project_name: String,
    /// Base name of the source file
    pub file_name: String,
    /// Resolved path of the source file
    pub file_path: PathBuf,
    /// The matched line, trimmed
    pub description: String,
    /// 1-based line number
    pub line_number: usize,
}

/// Identity of the file being scanned, stamped onto every occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub project_name: String,
    pub file_name: String,
    pub file_path: PathBuf,
}

impl SourceFile {
    /// Create a source file identity with explicit names
    #[must_use]
    pub fn new(
        project_name: impl Into<String>,
        file_name: impl Into<String>,
        file_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            file_name: file_name.into(),
            file_path: file_path.into(),
        }
    }

    /// Derive the file name from the last component of `path`
    #[must_use]
    pub fn from_path(project_name: impl Into<String>, path: &Path) -> Self {
        Self::new(project_name, Self::name_of(path), path)
    }

    /// Last component of `path`, or empty when it has none
    #[must_use]
    pub fn name_of(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub(crate) fn occurrence(&self, keyword: String, line_number: usize, line: &str) -> Occurrence {
        Occurrence {
            keyword,
            project_name: self.project_name.clone(),
            file_name: self.file_name.clone(),
            file_path: self.file_path.clone(),
            description: line.trim().to_string(),
            line_number,
        }
    }
}
