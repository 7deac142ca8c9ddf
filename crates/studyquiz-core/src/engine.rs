//! Quiz orchestration.
//!
//! Splits and scores a text once, then walks its sentences handing each to
//! the true/false and fill-blank generators until both quotas are met.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::blank::FillBlankGenerator;
use crate::discussion::discussion_topics;
use crate::error::QuizError;
use crate::locale::Locale;
use crate::model::{BlankStrategy, CategorySet, QuizResult};
use crate::report::StudyDocument;
use crate::scoring::{TermRanking, TermScorer};
use crate::segment::split_sentences;
use crate::stopwords::StopwordSet;
use crate::truefalse::{PerturbationSettings, TrueFalseGenerator};

/// Upper bound on items per section.
pub const MAX_ITEMS: usize = 10;

/// Configuration for the quiz engine.
#[derive(Debug, Clone, Default)]
pub struct QuizEngineConfig {
    /// Wording of prompts and explanations.
    pub locale: Locale,
    /// Words never scored or blanked.
    pub stopwords: StopwordSet,
    /// How true/false statements are falsified.
    pub perturbation: PerturbationSettings,
    /// How the blanked term is chosen.
    pub blank_strategy: BlankStrategy,
}

/// What to produce for one text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub categories: CategorySet,
    pub discussion_count: usize,
    pub true_false_count: usize,
    pub blank_count: usize,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            categories: CategorySet::all(),
            discussion_count: 3,
            true_false_count: 3,
            blank_count: 3,
        }
    }
}

impl GenerateRequest {
    /// Counts forced into `1..=MAX_ITEMS`.
    pub fn clamped(self) -> Self {
        let clamp = |n: usize| n.clamp(1, MAX_ITEMS);
        let clamped = Self {
            categories: self.categories,
            discussion_count: clamp(self.discussion_count),
            true_false_count: clamp(self.true_false_count),
            blank_count: clamp(self.blank_count),
        };
        if clamped != self {
            tracing::warn!(
                discussion = self.discussion_count,
                true_false = self.true_false_count,
                blank = self.blank_count,
                "item counts clamped to 1..={MAX_ITEMS}"
            );
        }
        clamped
    }
}

/// A random source for one request: seeded when `seed` is given, otherwise
/// from OS entropy.
pub fn request_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Drives segmentation, scoring and question generation.
///
/// The engine holds only immutable settings, so one instance can serve any
/// number of requests; each request brings its own random source.
#[derive(Debug, Clone, Default)]
pub struct QuizEngine {
    locale: Locale,
    scorer: TermScorer,
    blank: FillBlankGenerator,
    true_false: TrueFalseGenerator,
}

impl QuizEngine {
    pub fn new(config: QuizEngineConfig) -> Result<Self, QuizError> {
        let true_false = TrueFalseGenerator::new(config.locale, config.perturbation)?;
        Ok(Self {
            locale: config.locale,
            scorer: TermScorer::new(config.stopwords.clone()),
            blank: FillBlankGenerator::new(config.stopwords).with_strategy(config.blank_strategy),
            true_false,
        })
    }

    /// Rank the terms of a whole text.
    pub fn rank_terms(&self, text: &str) -> TermRanking {
        self.scorer.score(&split_sentences(text))
    }

    /// Discussion prompts for the first `count` sentences.
    pub fn discussion(&self, text: &str, count: usize) -> Vec<String> {
        discussion_topics(&split_sentences(text), count, self.locale)
    }

    /// Build up to `num_tf` true/false and `num_blank` fill-blank items.
    ///
    /// Each sentence yields at most one item of each kind. A sentence that
    /// cannot be blanked is skipped for that kind without using up quota, so
    /// short inputs may return fewer items than asked for.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        text: &str,
        num_tf: usize,
        num_blank: usize,
        rng: &mut R,
    ) -> QuizResult {
        let sentences = split_sentences(text);
        let ranking = self.scorer.score(&sentences);
        let mut quiz = QuizResult::default();

        for sentence in &sentences {
            if quiz.tf.len() >= num_tf && quiz.blank.len() >= num_blank {
                break;
            }
            if quiz.tf.len() < num_tf {
                quiz.tf.push(self.true_false.generate(sentence, rng));
            }
            if quiz.blank.len() < num_blank {
                match self.blank.generate(sentence, &ranking) {
                    Some(q) => quiz.blank.push(q),
                    None => tracing::trace!(sentence = %sentence, "no blank candidate"),
                }
            }
        }

        tracing::debug!(
            sentences = sentences.len(),
            tf = quiz.tf.len(),
            blank = quiz.blank.len(),
            "generated quiz"
        );
        quiz
    }

    /// [`generate`](Self::generate) with a fresh per-call random source.
    pub fn generate_seeded(
        &self,
        text: &str,
        num_tf: usize,
        num_blank: usize,
        seed: Option<u64>,
    ) -> QuizResult {
        self.generate(text, num_tf, num_blank, &mut request_rng(seed))
    }

    /// Produce every requested section for `text`.
    pub fn build_document<R: Rng + ?Sized>(
        &self,
        text: &str,
        request: &GenerateRequest,
        rng: &mut R,
    ) -> StudyDocument {
        let request = request.clamped();
        let categories = request.categories;

        let topics = if categories.discussion {
            self.discussion(text, request.discussion_count)
        } else {
            Vec::new()
        };
        let quota = |wanted: bool, count: usize| if wanted { count } else { 0 };
        let quiz = self.generate(
            text,
            quota(categories.true_false, request.true_false_count),
            quota(categories.fill_blank, request.blank_count),
            rng,
        );

        StudyDocument {
            locale: self.locale,
            include: categories,
            topics,
            quiz,
        }
    }

    /// The formatted markdown document for `text`.
    pub fn generate_all<R: Rng + ?Sized>(
        &self,
        text: &str,
        request: &GenerateRequest,
        rng: &mut R,
    ) -> String {
        self.build_document(text, request, rng).to_markdown()
    }
}
