//! Sweep report builder

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{SweepDiagnostic, SweepOutcome};
use crate::scanner::Occurrence;
use crate::vocabulary::KeywordVocabulary;

/// A timestamped, serializable summary of one sweep
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub project_name: String,
    pub keywords: KeywordVocabulary,
    pub scanned_at: DateTime<Utc>,
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub cancelled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<SweepDiagnostic>,
    pub occurrences: Vec<Occurrence>,
}

impl SweepReport {
    /// Create a report from a finished sweep
    #[must_use]
    pub fn new(project_name: impl Into<String>, outcome: SweepOutcome) -> Self {
        Self {
            project_name: project_name.into(),
            keywords: KeywordVocabulary::new(),
            scanned_at: Utc::now(),
            files_scanned: outcome.files_scanned,
            files_skipped: outcome.files_skipped,
            cancelled: outcome.cancelled,
            diagnostic: outcome.diagnostic,
            occurrences: outcome.occurrences,
        }
    }

    /// Record the vocabulary the sweep used
    #[must_use]
    pub fn with_keywords(mut self, keywords: KeywordVocabulary) -> Self {
        self.keywords = keywords;
        self
    }

    /// Occurrence count per keyword, in keyword order
    #[must_use]
    pub fn counts_by_keyword(&self) -> Vec<(String, usize)> {
        let mut counts = std::collections::BTreeMap::<&str, usize>::new();
        for occurrence in &self.occurrences {
            *counts.entry(occurrence.keyword.as_str()).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(keyword, count)| (keyword.to_string(), count))
            .collect()
    }
}
