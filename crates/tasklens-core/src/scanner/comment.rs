//! Comment scanner: Finds keywords inside `//` and `/* ... */` comments
//!
//! A single forward pass over the lines of a file, driven by a two-state
//! classifier. Line comments are matched immediately; block comment lines
//! are buffered and only matched once the closing `*/` is seen, so a block
//! still open at end of file produces nothing.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::{KeywordPattern, Occurrence, PatternError, SourceFile};
use crate::vocabulary::KeywordVocabulary;

const LINE_COMMENT: &str = "//";
const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";

/// Errors that can occur while scanning a single file
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Cannot read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// Classifier state, carrying the open block as payload
enum LineState<'a> {
    Normal,
    BlockComment(Vec<(usize, &'a str)>),
}

/// Keywords already emitted, per line number
#[derive(Default)]
struct EmittedKeywords {
    by_line: HashMap<usize, HashSet<String>>,
}

impl EmittedKeywords {
    /// Record `keyword` for `line`; `false` if it was already recorded
    fn record(&mut self, line: usize, keyword: &str) -> bool {
        let seen = self.by_line.entry(line).or_default();
        if seen.contains(keyword) {
            return false;
        }
        seen.insert(keyword.to_string());
        true
    }
}

/// Scans file contents with a compiled keyword pattern
///
/// The pattern is read-only, so one scanner can be shared by any number of
/// concurrent per-file scans.
#[derive(Debug, Clone, Copy)]
pub struct CommentScanner<'p> {
    pattern: &'p KeywordPattern,
}

impl<'p> CommentScanner<'p> {
    /// Create a scanner over a compiled pattern
    #[must_use]
    pub fn new(pattern: &'p KeywordPattern) -> Self {
        Self { pattern }
    }

    /// Scan `content` and return occurrences in ascending line order
    #[must_use]
    pub fn scan(&self, content: &str, source: &SourceFile) -> Vec<Occurrence> {
        let mut occurrences = Vec::new();
        let mut emitted = EmittedKeywords::default();
        let mut state = LineState::Normal;

        for (index, line) in content.lines().enumerate() {
            let line_number = index + 1;

            state = match state {
                LineState::Normal => {
                    if line.contains(LINE_COMMENT) {
                        self.match_line(line_number, line, source, &mut emitted, &mut occurrences);
                        LineState::Normal
                    } else if line.contains(BLOCK_OPEN) {
                        LineState::BlockComment(vec![(line_number, line)])
                    } else {
                        LineState::Normal
                    }
                }
                LineState::BlockComment(mut block) => {
                    block.push((line_number, line));
                    if line.contains(BLOCK_CLOSE) {
                        for (block_line_number, block_line) in block {
                            self.match_line(
                                block_line_number,
                                block_line,
                                source,
                                &mut emitted,
                                &mut occurrences,
                            );
                        }
                        LineState::Normal
                    } else {
                        LineState::BlockComment(block)
                    }
                }
            };
        }

        if let LineState::BlockComment(block) = state {
            if let Some((opened_at, _)) = block.first() {
                tracing::debug!(
                    "Dropping unterminated block comment opened at {}:{}",
                    source.file_path.display(),
                    opened_at
                );
            }
        }

        occurrences
    }

    /// Read and scan a file from disk
    ///
    /// # Errors
    /// Returns [`ScanError::NotFound`] if the file does not exist and
    /// [`ScanError::Unreadable`] if it cannot be read.
    pub fn scan_file(&self, path: &Path, project_name: &str) -> Result<Vec<Occurrence>, ScanError> {
        self.scan_file_as(path, &SourceFile::from_path(project_name, path))
    }

    /// Read `path` and stamp occurrences with an explicit source identity
    ///
    /// Used when the name the caller listed differs from the path read,
    /// e.g. a symlink that was resolved before scanning.
    ///
    /// # Errors
    /// Same as [`scan_file`](Self::scan_file).
    pub fn scan_file_as(
        &self,
        path: &Path,
        source: &SourceFile,
    ) -> Result<Vec<Occurrence>, ScanError> {
        let content = read_source(path)?;
        Ok(self.scan(&content, source))
    }

    fn match_line(
        &self,
        line_number: usize,
        line: &str,
        source: &SourceFile,
        emitted: &mut EmittedKeywords,
        occurrences: &mut Vec<Occurrence>,
    ) {
        for keyword in self.pattern.keywords_in(line) {
            if emitted.record(line_number, &keyword) {
                occurrences.push(source.occurrence(keyword, line_number, line));
            }
        }
    }
}

/// Scan one file's text against a vocabulary
///
/// An empty vocabulary short-circuits to an empty result without compiling
/// anything.
///
/// # Errors
/// Returns [`PatternError`] if the vocabulary cannot be compiled.
pub fn scan(
    content: &str,
    vocabulary: &KeywordVocabulary,
    project_name: &str,
    file_name: &str,
    file_path: &Path,
) -> Result<Vec<Occurrence>, PatternError> {
    if vocabulary.is_empty() {
        return Ok(Vec::new());
    }
    let pattern = KeywordPattern::compile(vocabulary)?;
    let source = SourceFile::new(project_name, file_name, file_path);
    Ok(CommentScanner::new(&pattern).scan(content, &source))
}

/// Read and scan a single file against a vocabulary
///
/// # Errors
/// Returns an error if the vocabulary cannot be compiled or the file
/// cannot be read.
pub fn scan_file(
    path: &Path,
    vocabulary: &KeywordVocabulary,
    project_name: &str,
) -> Result<Vec<Occurrence>, ScanError> {
    if vocabulary.is_empty() {
        return Ok(Vec::new());
    }
    let pattern = KeywordPattern::compile(vocabulary)?;
    CommentScanner::new(&pattern).scan_file(path, project_name)
}

/// Read a file as text, replacing invalid UTF-8
fn read_source(path: &Path) -> Result<String, ScanError> {
    if !path.is_file() {
        return Err(ScanError::NotFound(path.to_path_buf()));
    }
    let bytes = std::fs::read(path).map_err(|source| ScanError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}
