//! Sweep module: Scans every file of a project
//!
//! A sweep compiles the vocabulary once, scans each existing file with the
//! same pattern, and concatenates the results in caller-supplied file
//! order. Failures never escape: missing or unreadable files are skipped,
//! and a vocabulary that cannot be compiled yields an empty outcome with a
//! diagnostic attached.

mod report;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::scanner::{
    CommentScanner, KeywordPattern, Occurrence, PatternError, ScanError, SourceFile,
};
use crate::vocabulary::KeywordVocabulary;

pub use report::SweepReport;

/// Cooperative cancellation shared between a sweep and its caller
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the sweep to stop before its next file
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// How a sweep runs
#[derive(Debug, Clone)]
pub struct SweepOptions {
    /// Scan files on the rayon pool; output order is unaffected
    pub parallel: bool,
    /// Checked before each file
    pub cancel: Option<CancelFlag>,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            cancel: None,
        }
    }
}

impl SweepOptions {
    /// Scan one file after another on the calling thread
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            cancel: None,
        }
    }

    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = Some(cancel);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled)
    }
}

/// Vocabulary-level problem that short-circuits a whole sweep
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum SweepDiagnostic {
    PatternCompilation(String),
}

impl std::fmt::Display for SweepDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PatternCompilation(message) => {
                write!(f, "keyword pattern failed to compile: {message}")
            }
        }
    }
}

/// Result of one sweep
#[derive(Debug, Clone, Default)]
pub struct SweepOutcome {
    /// Occurrences in file order, then line order
    pub occurrences: Vec<Occurrence>,
    pub files_scanned: usize,
    /// Files that were missing, unreadable, or not reached before cancellation
    pub files_skipped: usize,
    pub cancelled: bool,
    pub diagnostic: Option<SweepDiagnostic>,
}

impl SweepOutcome {
    fn failed(diagnostic: SweepDiagnostic) -> Self {
        Self {
            diagnostic: Some(diagnostic),
            ..Self::default()
        }
    }
}

/// Per-file result, merged in file order after the scan
enum FileScan {
    Scanned(Vec<Occurrence>),
    Skipped,
    Cancelled,
}

/// A compiled vocabulary ready to sweep project files
#[derive(Debug, Clone)]
pub struct ProjectSweep {
    pattern: KeywordPattern,
    options: SweepOptions,
}

impl ProjectSweep {
    /// Compile the vocabulary for sweeping
    ///
    /// # Errors
    /// Returns an error if the vocabulary is empty or cannot be compiled.
    pub fn new(vocabulary: &KeywordVocabulary) -> Result<Self, PatternError> {
        Ok(Self {
            pattern: KeywordPattern::compile(vocabulary)?,
            options: SweepOptions::default(),
        })
    }

    #[must_use]
    pub fn with_options(mut self, options: SweepOptions) -> Self {
        self.options = options;
        self
    }

    /// Scan `files` in order and concatenate their occurrences
    #[must_use]
    pub fn run(&self, files: &[PathBuf], project_name: &str) -> SweepOutcome {
        let scanner = CommentScanner::new(&self.pattern);

        let scans: Vec<FileScan> = if self.options.parallel {
            files
                .par_iter()
                .map(|path| self.scan_one(scanner, path, project_name))
                .collect()
        } else {
            files
                .iter()
                .map(|path| self.scan_one(scanner, path, project_name))
                .collect()
        };

        let mut outcome = SweepOutcome::default();
        for scan in scans {
            match scan {
                FileScan::Scanned(occurrences) => {
                    outcome.files_scanned += 1;
                    outcome.occurrences.extend(occurrences);
                }
                FileScan::Skipped => outcome.files_skipped += 1,
                FileScan::Cancelled => {
                    outcome.files_skipped += 1;
                    outcome.cancelled = true;
                }
            }
        }

        info!(
            "Swept {}: {} files scanned, {} skipped, {} occurrences{}",
            project_name,
            outcome.files_scanned,
            outcome.files_skipped,
            outcome.occurrences.len(),
            if outcome.cancelled { " (cancelled)" } else { "" }
        );
        outcome
    }

    fn scan_one(&self, scanner: CommentScanner<'_>, path: &Path, project_name: &str) -> FileScan {
        if self.options.is_cancelled() {
            return FileScan::Cancelled;
        }

        // The listed name is kept; only the stored path is resolved.
        let resolved = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let source = SourceFile::new(project_name, SourceFile::name_of(path), &resolved);
        match scanner.scan_file_as(&resolved, &source) {
            Ok(occurrences) => FileScan::Scanned(occurrences),
            Err(ScanError::NotFound(_)) => {
                debug!("Skipping missing file {}", path.display());
                FileScan::Skipped
            }
            Err(e) => {
                debug!("Skipping file {}: {}", path.display(), e);
                FileScan::Skipped
            }
        }
    }
}

/// Sweep `files` with default options
///
/// An empty vocabulary returns an empty outcome without touching any file.
#[must_use]
pub fn sweep(
    files: &[PathBuf],
    vocabulary: &KeywordVocabulary,
    project_name: &str,
) -> SweepOutcome {
    sweep_with(files, vocabulary, project_name, SweepOptions::default())
}

/// Sweep `files` with explicit options
#[must_use]
pub fn sweep_with(
    files: &[PathBuf],
    vocabulary: &KeywordVocabulary,
    project_name: &str,
    options: SweepOptions,
) -> SweepOutcome {
    if vocabulary.is_empty() {
        return SweepOutcome::default();
    }

    match ProjectSweep::new(vocabulary) {
        Ok(project_sweep) => project_sweep.with_options(options).run(files, project_name),
        Err(e) => {
            warn!("Keyword pattern failed to compile: {}", e);
            SweepOutcome::failed(SweepDiagnostic::PatternCompilation(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests;
