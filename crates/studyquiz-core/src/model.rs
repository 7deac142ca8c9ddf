//! Core data model types for studyquiz.
//!
//! Every value here is created fresh for one generation request and dropped
//! after formatting; nothing is cached between calls.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QuizError;

/// Marker that replaces the redacted term in a cloze question.
pub const BLANK_MARKER: &str = "____";

/// A cloze question and the term that was removed from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillBlankQuestion {
    /// The sentence with exactly one term replaced by [`BLANK_MARKER`].
    pub question: String,
    /// The removed term.
    pub answer: String,
}

impl FillBlankQuestion {
    /// Put the answer back into the first blank.
    pub fn restore(&self) -> String {
        self.question.replacen(BLANK_MARKER, &self.answer, 1)
    }
}

/// A numeric value that was altered to make a statement false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberChange {
    /// The digit run as it appeared in the source sentence.
    pub original: String,
    /// The digits written in its place.
    pub replacement: String,
}

/// A statement to be judged true or false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrueFalseQuestion {
    pub statement: String,
    /// Ground truth for `statement`.
    pub answer: bool,
    pub explanation: String,
    /// Present exactly when `answer` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<NumberChange>,
}

/// Questions produced for one input text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub tf: Vec<TrueFalseQuestion>,
    pub blank: Vec<FillBlankQuestion>,
}

impl QuizResult {
    pub fn is_empty(&self) -> bool {
        self.tf.is_empty() && self.blank.is_empty()
    }
}

/// One section of the output document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Category {
    Discussion,
    TrueFalse,
    FillBlank,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Discussion,
        Category::TrueFalse,
        Category::FillBlank,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Discussion => write!(f, "discussion"),
            Category::TrueFalse => write!(f, "true_false"),
            Category::FillBlank => write!(f, "fill_blank"),
        }
    }
}

impl FromStr for Category {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "discussion" => Ok(Category::Discussion),
            "true_false" | "tf" | "ox" => Ok(Category::TrueFalse),
            "fill_blank" | "blank" | "cloze" => Ok(Category::FillBlank),
            other => Err(QuizError::UnknownCategory(other.to_string())),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = QuizError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The set of sections a caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySet {
    pub discussion: bool,
    pub true_false: bool,
    pub fill_blank: bool,
}

impl CategorySet {
    pub fn all() -> Self {
        Self {
            discussion: true,
            true_false: true,
            fill_blank: true,
        }
    }

    pub fn none() -> Self {
        Self {
            discussion: false,
            true_false: false,
            fill_blank: false,
        }
    }

    pub fn contains(&self, category: Category) -> bool {
        match category {
            Category::Discussion => self.discussion,
            Category::TrueFalse => self.true_false,
            Category::FillBlank => self.fill_blank,
        }
    }

    pub fn insert(&mut self, category: Category) {
        match category {
            Category::Discussion => self.discussion = true,
            Category::TrueFalse => self.true_false = true,
            Category::FillBlank => self.fill_blank = true,
        }
    }

    /// Parse a comma-separated list such as `"discussion,tf"`.
    pub fn parse_list(list: &str) -> Result<Self, QuizError> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse::<Category>)
            .collect()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut set = CategorySet::none();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

/// How the fill-blank generator picks among its candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlankStrategy {
    /// First candidate in sentence order.
    #[default]
    First,
    /// Candidate with the highest term score; sentence order breaks ties.
    Ranked,
}

impl fmt::Display for BlankStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlankStrategy::First => write!(f, "first"),
            BlankStrategy::Ranked => write!(f, "ranked"),
        }
    }
}

impl FromStr for BlankStrategy {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first" => Ok(BlankStrategy::First),
            "ranked" | "score" => Ok(BlankStrategy::Ranked),
            other => Err(QuizError::UnknownStrategy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_display_and_parse() {
        assert_eq!(Category::TrueFalse.to_string(), "true_false");
        assert_eq!("discussion".parse::<Category>().unwrap(), Category::Discussion);
        assert_eq!("TF".parse::<Category>().unwrap(), Category::TrueFalse);
        assert_eq!("fill-blank".parse::<Category>().unwrap(), Category::FillBlank);
        assert_eq!("cloze".parse::<Category>().unwrap(), Category::FillBlank);
        assert!(matches!(
            "essay".parse::<Category>(),
            Err(QuizError::UnknownCategory(_))
        ));
    }

    #[test]
    fn category_set_from_list() {
        let set = CategorySet::parse_list("discussion, fill_blank").unwrap();
        assert!(set.discussion);
        assert!(!set.true_false);
        assert!(set.fill_blank);

        assert_eq!(CategorySet::parse_list("").unwrap(), CategorySet::none());
        assert!(CategorySet::parse_list("tf,poetry").is_err());
    }

    #[test]
    fn restore_fills_first_blank_only() {
        let q = FillBlankQuestion {
            question: "The ____ sat on the mat.".into(),
            answer: "cat".into(),
        };
        assert_eq!(q.restore(), "The cat sat on the mat.");
    }

    #[test]
    fn true_false_serde_skips_missing_change() {
        let q = TrueFalseQuestion {
            statement: "It was 5 years old.".into(),
            answer: true,
            explanation: "quoted".into(),
            change: None,
        };
        let json = serde_json::to_string(&q).unwrap();
        assert!(!json.contains("change"));
        let back: TrueFalseQuestion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }

    #[test]
    fn blank_strategy_parse() {
        assert_eq!("ranked".parse::<BlankStrategy>().unwrap(), BlankStrategy::Ranked);
        assert_eq!(BlankStrategy::default(), BlankStrategy::First);
        assert!("random".parse::<BlankStrategy>().is_err());
    }
}
