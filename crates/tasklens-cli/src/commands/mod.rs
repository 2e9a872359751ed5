//! CLI commands

pub mod keywords;
pub mod scan;
pub mod settings;
pub mod types;

pub use types::{KeywordCommands, OutputFormat};
