//! The assembled study document and its markdown rendering.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::model::{CategorySet, QuizResult};

/// Everything produced for one request, plus which sections to show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyDocument {
    pub locale: Locale,
    pub include: CategorySet,
    pub topics: Vec<String>,
    pub quiz: QuizResult,
}

impl StudyDocument {
    /// `true` when no section would be rendered.
    pub fn is_empty(&self) -> bool {
        !(self.include.discussion && !self.topics.is_empty()
            || self.include.true_false && !self.quiz.tf.is_empty()
            || self.include.fill_blank && !self.quiz.blank.is_empty())
    }

    /// Render as a markdown document.
    ///
    /// Sections appear in the order discussion, true/false, fill-blank. A
    /// section is left out when it was not requested or has no items. Each
    /// one is a `###` header, a numbered list and a trailing blank line.
    pub fn to_markdown(&self) -> String {
        let labels = self.locale.labels();
        let mut md = String::new();

        if self.include.discussion && !self.topics.is_empty() {
            md.push_str(&format!("### {}\n", labels.discussion));
            for (i, topic) in self.topics.iter().enumerate() {
                md.push_str(&format!("{}) {}\n", i + 1, topic));
            }
            md.push('\n');
        }

        if self.include.true_false && !self.quiz.tf.is_empty() {
            md.push_str(&format!("### {}\n", labels.true_false));
            for (i, q) in self.quiz.tf.iter().enumerate() {
                let verdict = if q.answer { labels.truthy } else { labels.falsy };
                md.push_str(&format!("{}) {}\n", i + 1, q.statement));
                md.push_str(&format!("   {}: {}\n", labels.answer, verdict));
                md.push_str(&format!("   {}: {}\n", labels.explanation, q.explanation));
            }
            md.push('\n');
        }

        if self.include.fill_blank && !self.quiz.blank.is_empty() {
            md.push_str(&format!("### {}\n", labels.fill_blank));
            for (i, q) in self.quiz.blank.iter().enumerate() {
                md.push_str(&format!("{}) {}\n", i + 1, q.question));
                md.push_str(&format!("   {}: {}\n", labels.answer, q.answer));
            }
            md.push('\n');
        }

        md
    }
}

/// Render topics and quiz items as markdown; see [`StudyDocument::to_markdown`].
pub fn format_document(
    topics: &[String],
    quiz: &QuizResult,
    include: CategorySet,
    locale: Locale,
) -> String {
    StudyDocument {
        locale,
        include,
        topics: topics.to_vec(),
        quiz: quiz.clone(),
    }
    .to_markdown()
}
