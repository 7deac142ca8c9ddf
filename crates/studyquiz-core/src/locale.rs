//! Wording used in generated prompts, explanations and section headers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QuizError;

/// Language of the generated wording. Input text may be in any supported
/// script regardless of locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ko,
    En,
}

/// Section and field labels for the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub discussion: &'static str,
    pub true_false: &'static str,
    pub fill_blank: &'static str,
    pub answer: &'static str,
    pub explanation: &'static str,
    pub truthy: &'static str,
    pub falsy: &'static str,
}

const KO_LABELS: Labels = Labels {
    discussion: "토론 주제",
    true_false: "OX 문제",
    fill_blank: "빈칸 채우기",
    answer: "정답",
    explanation: "해설",
    truthy: "O(참)",
    falsy: "X(거짓)",
};

const EN_LABELS: Labels = Labels {
    discussion: "Discussion Topics",
    true_false: "True or False",
    fill_blank: "Fill in the Blank",
    answer: "Answer",
    explanation: "Explanation",
    truthy: "True",
    falsy: "False",
};

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::Ko => &KO_LABELS,
            Locale::En => &EN_LABELS,
        }
    }

    pub fn discussion_prompt(self, sentence: &str) -> String {
        match self {
            Locale::Ko => format!("'{sentence}'의 핵심 의미와 사회적/역사적 영향을 토론하시오."),
            Locale::En => format!(
                "Discuss the core meaning of '{sentence}' and its social or historical impact."
            ),
        }
    }

    /// Explanation attached to every true/false item.
    pub fn source_quote(self, sentence: &str) -> String {
        match self {
            Locale::Ko => format!("원문: '{sentence}'"),
            Locale::En => format!("Original: '{sentence}'"),
        }
    }

    /// Suffix appended to the quote when a number was altered.
    pub fn number_change(self, original: &str, replacement: &str) -> String {
        match self {
            Locale::Ko => format!(" -> 숫자 변경 {original}→{replacement}"),
            Locale::En => format!(" -> number changed {original}→{replacement}"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Ko => write!(f, "ko"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl FromStr for Locale {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ko" | "kr" | "korean" => Ok(Locale::Ko),
            "en" | "english" => Ok(Locale::En),
            other => Err(QuizError::UnknownLocale(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn korean_wording_matches_classroom_format() {
        assert_eq!(
            Locale::Ko.discussion_prompt("물은 100도에서 끓는다."),
            "'물은 100도에서 끓는다.'의 핵심 의미와 사회적/역사적 영향을 토론하시오."
        );
        assert_eq!(
            Locale::Ko.source_quote("It was 5 years old.") + &Locale::Ko.number_change("5", "8"),
            "원문: 'It was 5 years old.' -> 숫자 변경 5→8"
        );
    }

    #[test]
    fn locale_parse() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("korean".parse::<Locale>().unwrap(), Locale::Ko);
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::default().labels().true_false, "OX 문제");
    }
}
