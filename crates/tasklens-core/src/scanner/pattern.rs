//! Keyword pattern: one whole-word, case-insensitive alternation

use regex::{Regex, RegexBuilder};
use thiserror::Error;

use crate::vocabulary::KeywordVocabulary;

/// Errors that can occur while compiling a keyword pattern
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Keyword vocabulary is empty")]
    EmptyVocabulary,

    #[error("Invalid keyword pattern `{pattern}`: {source}")]
    Compile {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A vocabulary compiled into a single `\b(?:K1|K2|...)\b` matcher
///
/// Keywords are joined verbatim, so a keyword that is not a valid regex
/// fragment (e.g. `TO(DO`) fails compilation. Matches are accepted only
/// when the matched text equals a vocabulary entry ignoring case.
#[derive(Debug, Clone)]
pub struct KeywordPattern {
    regex: Regex,
    vocabulary: KeywordVocabulary,
}

impl KeywordPattern {
    /// Compile the vocabulary
    ///
    /// # Errors
    /// Returns [`PatternError::EmptyVocabulary`] for an empty vocabulary and
    /// [`PatternError::Compile`] when the joined keywords are not a valid regex.
    pub fn compile(vocabulary: &KeywordVocabulary) -> Result<Self, PatternError> {
        if vocabulary.is_empty() {
            return Err(PatternError::EmptyVocabulary);
        }

        let alternation = vocabulary.iter().collect::<Vec<_>>().join("|");
        let pattern = format!(r"\b(?:{alternation})\b");

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| PatternError::Compile {
                pattern: pattern.clone(),
                source,
            })?;

        Ok(Self {
            regex,
            vocabulary: vocabulary.clone(),
        })
    }

    /// Normalized keywords found in `line`, in match order
    ///
    /// Each returned keyword is the matched surface text upper-cased and
    /// trimmed. Matches that are not a vocabulary entry are skipped.
    /// Repeats are not removed here; that is per-line bookkeeping for the
    /// scanner.
    pub fn keywords_in<'a>(&'a self, line: &'a str) -> impl Iterator<Item = String> + 'a {
        self.regex
            .find_iter(line)
            .map(|m| m.as_str())
            .filter(move |text| self.vocabulary.lookup(text).is_some())
            .map(|text| text.to_uppercase().trim().to_string())
    }

    /// The vocabulary this pattern was compiled from
    #[must_use]
    pub fn vocabulary(&self) -> &KeywordVocabulary {
        &self.vocabulary
    }

    /// The generated regex source
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
