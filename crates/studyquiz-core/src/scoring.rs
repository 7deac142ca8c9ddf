//! Term importance scoring.
//!
//! A term's score is its frequency plus a quarter of its length in
//! characters:
//!
//! score = frequency + chars / 4
//!
//! Frequency dominates; length breaks ties in favour of longer, more
//! specific words.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::stopwords::StopwordSet;
use crate::tokenize::{char_len, tokenize};

/// A distinct token and its importance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTerm {
    pub term: String,
    pub frequency: u32,
    pub score: f64,
}

/// Compute the score for a term seen `frequency` times.
pub fn term_score(frequency: u32, term: &str) -> f64 {
    frequency as f64 + char_len(term) as f64 / 4.0
}

/// Terms ordered by descending score. Equal scores keep first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermRanking {
    terms: Vec<ScoredTerm>,
}

impl TermRanking {
    pub fn terms(&self) -> &[ScoredTerm] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Score of `term`, matched exactly.
    pub fn score_of(&self, term: &str) -> Option<f64> {
        self.terms.iter().find(|t| t.term == term).map(|t| t.score)
    }

    /// Zero-based rank of `term`.
    pub fn position(&self, term: &str) -> Option<usize> {
        self.terms.iter().position(|t| t.term == term)
    }

    /// The `n` highest-scoring terms.
    pub fn top(&self, n: usize) -> &[ScoredTerm] {
        &self.terms[..n.min(self.terms.len())]
    }
}

/// Ranks the content words of a text.
#[derive(Debug, Clone, Default)]
pub struct TermScorer {
    stopwords: StopwordSet,
}

impl TermScorer {
    pub fn new(stopwords: StopwordSet) -> Self {
        Self { stopwords }
    }

    /// Count non-stop-word tokens across `sentences` and rank them.
    ///
    /// Stop-words are matched after lowercasing; counted terms keep their
    /// original case, so `Cat` and `cat` are distinct terms.
    pub fn score<S: AsRef<str>>(&self, sentences: &[S]) -> TermRanking {
        let mut frequencies: IndexMap<&str, u32> = IndexMap::new();
        for sentence in sentences {
            for token in tokenize(sentence.as_ref()) {
                if self.stopwords.contains_folded(token) {
                    continue;
                }
                *frequencies.entry(token).or_insert(0) += 1;
            }
        }

        let mut terms: Vec<ScoredTerm> = frequencies
            .into_iter()
            .map(|(term, frequency)| ScoredTerm {
                term: term.to_string(),
                frequency,
                score: term_score(frequency, term),
            })
            .collect();
        // sort_by is stable, so ties keep first-seen order
        terms.sort_by(|a, b| b.score.total_cmp(&a.score));

        tracing::debug!(
            sentences = sentences.len(),
            terms = terms.len(),
            "scored terms"
        );
        TermRanking { terms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::split_sentences;

    fn rank(text: &str) -> TermRanking {
        TermScorer::default().score(&split_sentences(text))
    }

    #[test]
    fn content_words_rank_and_stopwords_vanish() {
        let ranking = rank("The cat sat on the mat. It was 5 years old.");
        for word in ["cat", "sat", "mat", "years", "old"] {
            assert!(ranking.position(word).is_some(), "{word} missing");
        }
        for word in ["The", "the", "on"] {
            assert!(ranking.position(word).is_none(), "{word} should be filtered");
        }
        assert_eq!(ranking.terms()[0].term, "years");
        assert_eq!(ranking.score_of("years"), Some(2.25));
        assert_eq!(ranking.score_of("cat"), Some(1.75));
    }

    #[test]
    fn ties_keep_first_appearance_order() {
        let ranking = rank("dog cat owl.");
        let order: Vec<&str> = ranking.terms().iter().map(|t| t.term.as_str()).collect();
        assert_eq!(order, vec!["dog", "cat", "owl"]);
    }

    #[test]
    fn frequency_and_length_combine() {
        let ranking = rank("Ox ox ox. Elephant walks.");
        let order: Vec<&str> = ranking.terms().iter().map(|t| t.term.as_str()).collect();
        assert_eq!(order, vec!["Elephant", "ox", "walks", "Ox"]);
        assert_eq!(ranking.score_of("Elephant"), Some(3.0));
        assert_eq!(ranking.score_of("ox"), Some(2.5));
        assert_eq!(ranking.terms()[1].frequency, 2);
        // case is preserved, so "Ox" is its own term
        assert_eq!(ranking.score_of("Ox"), Some(1.5));
        assert_eq!(ranking.top(1)[0].term, "Elephant");
    }

    #[test]
    fn more_occurrences_never_lower_the_rank() {
        let base = rank("apple banana cherry.");
        let boosted = rank("apple banana cherry cherry.");
        let before = base.position("cherry").unwrap();
        let after = boosted.position("cherry").unwrap();
        assert!(after <= before);
        assert!(boosted.score_of("cherry").unwrap() > base.score_of("cherry").unwrap());
        assert_eq!(base.score_of("apple"), boosted.score_of("apple"));
    }

    #[test]
    fn hangul_terms_are_scored() {
        let ranking = rank("고양이는 귀엽다 고양이는 작다");
        assert_eq!(ranking.terms()[0].term, "고양이는");
        assert_eq!(ranking.terms()[0].frequency, 2);
    }

    #[test]
    fn empty_or_all_stopwords() {
        assert!(rank("").is_empty());
        assert!(rank("The and of the. Or but if.").is_empty());
        assert_eq!(rank("").top(3).len(), 0);
    }
}
