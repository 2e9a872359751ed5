//! tasklens-core: Core library for keyword task lists
//!
//! Scans source files for annotation keywords (TODO, FIXME, ...) that
//! appear inside C-style comments, and turns the matches into a flat,
//! ordered task list that a host (IDE plugin, CLI) can render and navigate.
//!
//! # Comment Forms
//!
//! - **Line comments** - `// TODO: ...`
//! - **Block comments** - `/* ... */`, possibly spanning many lines
//!
//! The scanner is not a lexer: it does not understand string
//! literals, nested block comments, or preprocessor directives.

pub mod events;
pub mod scanner;
pub mod settings;
pub mod sweep;
pub mod tasklist;
pub mod vocabulary;

// Re-export commonly used types
pub use events::{EventHub, HostEvent, SubscriptionId};
pub use scanner::{
    CommentScanner, KeywordPattern, Occurrence, PatternError, ProjectFiles, ScanError, SourceFile,
    SourceLanguage,
};
pub use settings::{
    Color, JsonSettingsStore, KeywordSetting, MemorySettingsStore, Settings, SettingsError,
    SettingsStore,
};
pub use sweep::{CancelFlag, ProjectSweep, SweepDiagnostic, SweepOptions, SweepOutcome, SweepReport};
pub use tasklist::{OpenTarget, ProjectSnapshot, ProjectSource, TaskList, TaskRow};
pub use vocabulary::KeywordVocabulary;
