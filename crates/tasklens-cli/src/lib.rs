//! tasklens-cli library
//!
//! This module exposes the internal functionality of tasklens-cli for testing purposes.

#[doc(hidden)]
pub mod commands;

pub use commands::types::{KeywordCommands, OutputFormat};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log filter for the given verbosity
#[must_use]
pub fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    }
}

/// Install the global tracing subscriber, logging to stderr
pub fn setup_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(verbose))
        .init();
}

#[cfg(test)]
mod tests;
