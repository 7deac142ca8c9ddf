//! Fill-in-the-blank (cloze) question generation.

use crate::model::{BlankStrategy, FillBlankQuestion, BLANK_MARKER};
use crate::scoring::TermRanking;
use crate::stopwords::StopwordSet;
use crate::tokenize::{char_len, tokenize};

/// Candidates shorter than this (in characters) are not blanked.
pub const MIN_CANDIDATE_CHARS: usize = 2;

/// Redacts one content word per sentence.
#[derive(Debug, Clone, Default)]
pub struct FillBlankGenerator {
    stopwords: StopwordSet,
    strategy: BlankStrategy,
}

impl FillBlankGenerator {
    pub fn new(stopwords: StopwordSet) -> Self {
        Self {
            stopwords,
            strategy: BlankStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: BlankStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Build a cloze question from `sentence`, or `None` if no candidate can
    /// be blanked.
    ///
    /// Candidates are tokens of at least two characters that are not
    /// stop-words (checked case-sensitively). When no token qualifies, the
    /// longest token is used instead, even if it is a stop-word. The chosen
    /// term's first occurrence in the sentence becomes the blank, which may
    /// sit inside a longer word. A candidate whose blank would not round-trip
    /// is skipped in favour of the next one.
    pub fn generate(&self, sentence: &str, ranking: &TermRanking) -> Option<FillBlankQuestion> {
        let tokens = tokenize(sentence);
        let mut candidates: Vec<&str> = tokens
            .iter()
            .copied()
            .filter(|t| char_len(t) >= MIN_CANDIDATE_CHARS && !self.stopwords.contains(t))
            .collect();

        if candidates.is_empty() {
            candidates.extend(longest(&tokens));
        }

        if self.strategy == BlankStrategy::Ranked {
            let score = |t: &str| ranking.score_of(t).unwrap_or(f64::NEG_INFINITY);
            candidates.sort_by(|a, b| score(b).total_cmp(&score(a)));
        }

        let question = candidates.into_iter().find_map(|c| redact(sentence, c))?;
        tracing::trace!(answer = %question.answer, strategy = %self.strategy, "blanked term");
        Some(question)
    }
}

/// Replace the first occurrence of `target` in `sentence` with the blank
/// marker.
///
/// `None` if `target` is empty or absent, or if the result would not hold
/// exactly one marker that restores the sentence. That happens when the
/// sentence already contains the marker or underscores run into the blank.
pub fn redact(sentence: &str, target: &str) -> Option<FillBlankQuestion> {
    if target.is_empty() || !sentence.contains(target) {
        return None;
    }
    let question = FillBlankQuestion {
        question: sentence.replacen(target, BLANK_MARKER, 1),
        answer: target.to_string(),
    };
    if question.question.matches(BLANK_MARKER).count() != 1 || question.restore() != sentence {
        return None;
    }
    Some(question)
}

/// Longest token; the earliest one wins a tie.
fn longest<'a>(tokens: &[&'a str]) -> Option<&'a str> {
    let mut best: Option<&'a str> = None;
    for &token in tokens {
        if best.map_or(true, |b| char_len(token) > char_len(b)) {
            best = Some(token);
        }
    }
    best
}
