//! True/false statement generation by numeric perturbation.
//!
//! A sentence containing digits is falsified with some probability by adding
//! a small random offset to one of its numbers. Sentences without digits, or
//! that lose the draw, are returned verbatim as true statements.

use std::sync::OnceLock;

use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::locale::Locale;
use crate::model::{NumberChange, TrueFalseQuestion};

fn digits_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]+").expect("digit pattern is a valid regex"))
}

/// How often and how far numbers are changed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerturbationSettings {
    /// Chance that a sentence with digits is falsified.
    #[serde(default = "default_probability")]
    pub probability: f64,
    /// Smallest value added to the chosen number.
    #[serde(default = "default_min_offset")]
    pub min_offset: u32,
    /// Largest value added to the chosen number.
    #[serde(default = "default_max_offset")]
    pub max_offset: u32,
}

fn default_probability() -> f64 {
    0.6
}
fn default_min_offset() -> u32 {
    1
}
fn default_max_offset() -> u32 {
    10
}

impl Default for PerturbationSettings {
    fn default() -> Self {
        Self {
            probability: default_probability(),
            min_offset: default_min_offset(),
            max_offset: default_max_offset(),
        }
    }
}

impl PerturbationSettings {
    pub fn validate(&self) -> Result<(), QuizError> {
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(QuizError::InvalidProbability(self.probability));
        }
        if self.min_offset == 0 || self.min_offset > self.max_offset {
            return Err(QuizError::InvalidOffsetRange {
                min: self.min_offset,
                max: self.max_offset,
            });
        }
        Ok(())
    }
}

/// Produces true/false items from single sentences.
#[derive(Debug, Clone, Default)]
pub struct TrueFalseGenerator {
    locale: Locale,
    settings: PerturbationSettings,
}

impl TrueFalseGenerator {
    pub fn new(locale: Locale, settings: PerturbationSettings) -> Result<Self, QuizError> {
        settings.validate()?;
        Ok(Self { locale, settings })
    }

    /// Make a statement from `sentence`, drawing all randomness from `rng`.
    ///
    /// The rng is consulted only when the sentence contains digits: one draw
    /// for the falsify decision, then one to pick the number and one for the
    /// offset.
    pub fn generate<R: Rng + ?Sized>(&self, sentence: &str, rng: &mut R) -> TrueFalseQuestion {
        let numbers = digit_runs(sentence);
        if !numbers.is_empty() && rng.gen::<f64>() < self.settings.probability {
            if let Some(&original) = numbers.choose(rng) {
                let offset = rng.gen_range(self.settings.min_offset..=self.settings.max_offset);
                return self.falsify(sentence, original, offset);
            }
        }
        self.keep(sentence)
    }

    /// The sentence unchanged, marked true.
    pub fn keep(&self, sentence: &str) -> TrueFalseQuestion {
        TrueFalseQuestion {
            statement: sentence.to_string(),
            answer: true,
            explanation: self.locale.source_quote(sentence),
            change: None,
        }
    }

    /// Replace the first occurrence of `original` with `original + offset`.
    ///
    /// The first occurrence can be part of a longer number: falsifying `5`
    /// in "15 or 5" rewrites the `5` of `15`.
    pub fn falsify(&self, sentence: &str, original: &str, offset: u32) -> TrueFalseQuestion {
        let replacement = add_offset(original, offset);
        tracing::trace!(original, replacement = %replacement, "falsified statement");
        let explanation = self.locale.source_quote(sentence)
            + &self.locale.number_change(original, &replacement);
        TrueFalseQuestion {
            statement: sentence.replacen(original, &replacement, 1),
            answer: false,
            explanation,
            change: Some(NumberChange {
                original: original.to_string(),
                replacement,
            }),
        }
    }
}

/// Maximal runs of ASCII digits, in order. A decimal like `3.14` yields `3`
/// and `14`. Non-ASCII digits such as full-width `１２` are never matched, so
/// they are never perturbed.
pub fn digit_runs(sentence: &str) -> Vec<&str> {
    digits_regex()
        .find_iter(sentence)
        .map(|m| m.as_str())
        .collect()
}

/// Decimal addition on a digit string of any length.
///
/// Leading zeros are dropped from the result, so `"007" + 3` is `"10"`.
/// Non-digit characters are ignored.
pub fn add_offset(digits: &str, offset: u32) -> String {
    let mut value: Vec<u8> = digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .skip_while(|&d| d == 0)
        .collect();

    let mut carry = u64::from(offset);
    for d in value.iter_mut().rev() {
        if carry == 0 {
            break;
        }
        let sum = u64::from(*d) + carry;
        *d = (sum % 10) as u8;
        carry = sum / 10;
    }

    let mut out = if carry > 0 {
        carry.to_string()
    } else {
        String::new()
    };
    out.extend(value.iter().map(|d| char::from(b'0' + d)));
    if out.is_empty() {
        out.push('0');
    }
    out
}
