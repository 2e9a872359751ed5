//! Tests for SweepReport

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use chrono::{TimeZone, Utc};

use crate::scanner::Occurrence;
use crate::sweep::{SweepDiagnostic, SweepOutcome, SweepReport};
use crate::vocabulary::KeywordVocabulary;

fn occurrence(keyword: &str, line_number: usize) -> Occurrence {
    Occurrence {
        keyword: keyword.to_string(),
        project_name: "demo".to_string(),
        file_name: "main.c".to_string(),
        file_path: PathBuf::from("/src/main.c"),
        description: format!("// {keyword}"),
        line_number,
    }
}

#[test]
fn test_report_from_outcome() {
    let outcome = SweepOutcome {
        occurrences: vec![occurrence("TODO", 1)],
        files_scanned: 3,
        files_skipped: 1,
        cancelled: false,
        diagnostic: None,
    };

    let report = SweepReport::new("demo", outcome);

    assert_eq!(report.project_name, "demo");
    assert_eq!(report.files_scanned, 3);
    assert_eq!(report.files_skipped, 1);
    assert_eq!(report.occurrences.len(), 1);
    assert!(report.keywords.is_empty());
}

#[test]
fn test_report_builder() {
    let keywords: KeywordVocabulary = ["TODO"].into_iter().collect();

    let before = Utc::now();

    let report = SweepReport::new("demo", SweepOutcome::default()).with_keywords(keywords.clone());

    assert_eq!(report.keywords, keywords);
    assert!(report.scanned_at >= before);
    assert!(report.scanned_at <= Utc::now());
}

#[test]
fn test_counts_by_keyword() {
    let outcome = SweepOutcome {
        occurrences: vec![
            occurrence("TODO", 1),
            occurrence("FIXME", 2),
            occurrence("TODO", 3),
        ],
        ..SweepOutcome::default()
    };

    let report = SweepReport::new("demo", outcome);

    assert_eq!(
        report.counts_by_keyword(),
        vec![("FIXME".to_string(), 1), ("TODO".to_string(), 2)]
    );
}

#[test]
fn test_report_serializes_to_json() {
    let scanned_at = Utc.with_ymd_and_hms(2025, 3, 2, 12, 0, 0).unwrap();
    let outcome = SweepOutcome {
        occurrences: vec![occurrence("TODO", 7)],
        files_scanned: 1,
        ..SweepOutcome::default()
    };

    let mut report =
        SweepReport::new("demo", outcome).with_keywords(["TODO"].into_iter().collect());
    report.scanned_at = scanned_at;
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["project_name"], "demo");
    assert_eq!(json["keywords"], serde_json::json!(["TODO"]));
    assert_eq!(json["scanned_at"], "2025-03-02T12:00:00Z");
    assert_eq!(json["occurrences"][0]["line_number"], 7);
    assert_eq!(json["occurrences"][0]["keyword"], "TODO");
    assert!(json.get("diagnostic").is_none());
}

#[test]
fn test_report_serializes_diagnostic() {
    let report = SweepReport::new(
        "demo",
        SweepOutcome {
            diagnostic: Some(SweepDiagnostic::PatternCompilation("bad".to_string())),
            ..SweepOutcome::default()
        },
    );
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["diagnostic"]["kind"], "pattern_compilation");
    assert_eq!(json["diagnostic"]["message"], "bad");
}
