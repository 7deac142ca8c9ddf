//! Discussion prompts built from the opening sentences of a text.

use crate::locale::Locale;

/// Wrap each of the first `count` sentences in the locale's prompt template.
pub fn discussion_topics<S: AsRef<str>>(
    sentences: &[S],
    count: usize,
    locale: Locale,
) -> Vec<String> {
    sentences
        .iter()
        .take(count)
        .map(|s| locale.discussion_prompt(s.as_ref()))
        .collect()
}
