//! Stop-word filtering.
//!
//! The default set covers common English function words and Korean
//! particles. Sets are immutable once built and are handed to the scorer and
//! the fill-blank generator, so an alternate language pack is just another
//! `StopwordSet`.

use std::collections::HashSet;

const ENGLISH: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "then", "so", "because", "as", "of", "in", "on",
    "at", "to", "for", "from", "by", "with", "about", "into", "through", "during", "before",
    "after", "above", "below", "up", "down", "out", "over", "under", "again", "further", "here",
    "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more", "most",
    "other", "some", "such", "no", "nor", "not", "only", "own", "same", "than", "too", "very",
    "can", "will", "just", "should", "now",
];

const KOREAN: &[&str] = &[
    "이", "그", "저", "것", "수", "등", "및", "또는", "그리고", "그래서", "또한", "은", "는", "가",
    "을", "를", "의", "에", "에서", "으로", "로", "와", "과", "도", "만",
];

/// An immutable set of words excluded from term scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::bilingual()
    }
}

impl StopwordSet {
    /// English function words plus Korean particles.
    pub fn bilingual() -> Self {
        Self::from_list(ENGLISH.iter().chain(KOREAN))
    }

    /// Build a set from an explicit list. Words are stored as given.
    pub fn from_list<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_string()).collect(),
        }
    }

    /// A copy of this set with `extra` words added.
    pub fn extended<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = self.words.clone();
        words.extend(extra.into_iter().map(|w| w.as_ref().to_string()));
        Self { words }
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Membership after lowercasing `word`.
    pub fn contains_folded(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
