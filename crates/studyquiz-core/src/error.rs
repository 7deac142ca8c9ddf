//! Error types for quiz configuration and request parsing.
//!
//! The text pipeline itself never fails; these errors only come from values
//! supplied by a user (category names, locales, config numbers).

use thiserror::Error;

/// Errors raised while interpreting user-supplied quiz settings.
#[derive(Debug, Error, PartialEq)]
pub enum QuizError {
    /// A category name that is not one of the known output sections.
    #[error("unknown category: {0} (expected discussion, true_false or fill_blank)")]
    UnknownCategory(String),

    /// A locale that has no template pack.
    #[error("unknown locale: {0} (expected ko or en)")]
    UnknownLocale(String),

    /// A fill-blank selection strategy that does not exist.
    #[error("unknown blank strategy: {0} (expected first or ranked)")]
    UnknownStrategy(String),

    /// Perturbation probability outside `[0, 1]`.
    #[error("perturbation probability must be within 0.0..=1.0, got {0}")]
    InvalidProbability(f64),

    /// Offset range that is empty, inverted or starts at zero.
    #[error("invalid offset range {min}..={max}: need 1 <= min <= max")]
    InvalidOffsetRange { min: u32, max: u32 },
}
