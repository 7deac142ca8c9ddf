//! Lexical tokenizer for Latin words, decimal numbers and Hangul runs.

use std::sync::OnceLock;

use regex::Regex;

/// Latin word with one optional internal apostrophe, decimal number, or a
/// run of precomposed Hangul syllables.
const WORD_PATTERN: &str = r"[A-Za-z]+(?:'[A-Za-z]+)?|[0-9]+(?:\.[0-9]+)?|[가-힣]+";

fn word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(WORD_PATTERN).expect("word pattern is a valid regex"))
}

/// Split `text` into word and number tokens, skipping everything else.
pub fn tokenize(text: &str) -> Vec<&str> {
    word_regex().find_iter(text).map(|m| m.as_str()).collect()
}

/// Number of Unicode scalar values in a token; term lengths are measured this way.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
