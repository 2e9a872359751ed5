//! Scanner module: Keyword-in-comment scanning and file discovery
//!
//! Responsible for compiling the keyword vocabulary into a matcher,
//! classifying lines as line/block comments, emitting keyword occurrences,
//! and walking project directories for candidate source files.

mod comment;
mod language;
mod occurrence;
mod pattern;
mod walker;

pub use comment::{scan, scan_file, CommentScanner, ScanError};
pub use language::SourceLanguage;
pub use occurrence::{Occurrence, SourceFile};
pub use pattern::{KeywordPattern, PatternError};
pub use walker::ProjectFiles;

#[cfg(test)]
mod tests;
