//! Command types shared between main and library

use clap::{Subcommand, ValueEnum};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum KeywordCommands {
    /// List configured keywords and their colors
    List,
    /// Add a keyword, or change its color
    Add {
        /// Keyword to look for (e.g. REVIEW)
        keyword: String,

        /// Display color in #RRGGBB syntax
        #[arg(long, default_value = "#800080")]
        color: String,
    },
    /// Remove a keyword
    Remove {
        /// Keyword to remove
        keyword: String,
    },
    /// Restore the default keywords and colors
    Reset,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned columns: Type, Description, Project, File, Line
    #[default]
    Table,
    /// Full sweep report as JSON
    Json,
}
