//! Tests for logging setup
//!
//! The global subscriber can only be installed once per process, so these
//! tests exercise the filter selection and layer composition instead.

use rstest::rstest;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*};

use crate::log_filter;

#[rstest]
#[case(false, LevelFilter::INFO)]
#[case(true, LevelFilter::DEBUG)]
fn test_verbose_flag_selects_level(#[case] verbose: bool, #[case] expected: LevelFilter) {
    assert_eq!(log_filter(verbose).max_level_hint(), Some(expected));
}

#[test]
fn test_filter_composes_with_stderr_layer() {
    let subscriber = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(true));

    tracing::subscriber::with_default(subscriber, || {
        tracing::debug!("Logging to stderr");
    });
}
