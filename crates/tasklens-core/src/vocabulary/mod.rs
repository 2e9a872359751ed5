//! Keyword vocabulary: the set of annotation keywords to look for

use std::collections::BTreeSet;

use serde::Serialize;

/// A set of case-preserving keywords such as `TODO` or `FIXME`
///
/// Entries are trimmed on insertion and blank entries are dropped.
/// Iteration order is stable (lexicographic) so hosts can show the
/// vocabulary in a predictable order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordVocabulary {
    keywords: BTreeSet<String>,
}

impl KeywordVocabulary {
    /// Create an empty vocabulary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a keyword. Returns `false` if it was blank or already present.
    pub fn insert(&mut self, keyword: impl AsRef<str>) -> bool {
        let keyword = keyword.as_ref().trim();
        if keyword.is_empty() {
            return false;
        }
        self.keywords.insert(keyword.to_string())
    }

    /// Builder-style variant of [`insert`](Self::insert)
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl AsRef<str>) -> Self {
        self.insert(keyword);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Exact, case-sensitive membership
    #[must_use]
    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.contains(keyword)
    }

    /// Find the vocabulary entry equal to `text` ignoring case
    #[must_use]
    pub fn lookup(&self, text: &str) -> Option<&str> {
        if let Some(exact) = self.keywords.get(text) {
            return Some(exact.as_str());
        }
        let upper = text.to_uppercase();
        self.keywords
            .iter()
            .find(|keyword| keyword.to_uppercase() == upper)
            .map(String::as_str)
    }

    /// Iterate over the keywords in stable order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordVocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vocabulary = Self::new();
        for keyword in iter {
            vocabulary.insert(keyword);
        }
        vocabulary
    }
}

impl<S: AsRef<str>> Extend<S> for KeywordVocabulary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for keyword in iter {
            self.insert(keyword);
        }
    }
}
