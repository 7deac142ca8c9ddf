//! Sentence segmentation.
//!
//! Sentences end at terminal punctuation (`. ! ? 。 ？`) or at the Korean
//! declarative ending `다`, but only where whitespace follows. This is a
//! heuristic: abbreviations such as "Dr." split, and a word-internal `다`
//! followed by a space splits too.

use std::sync::OnceLock;

use regex::Regex;

use crate::tokenize::char_len;

/// Fragments shorter than this (in characters) are dropped.
pub const MIN_SENTENCE_CHARS: usize = 3;

fn whitespace_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is a valid regex"))
}

fn boundary_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([.!?。？]|다)\s+").expect("boundary pattern is a valid regex")
    })
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    whitespace_regex().replace_all(text, " ").trim().to_string()
}

/// Split `text` into sentences in source order.
pub fn split_sentences(text: &str) -> Vec<String> {
    let normalized = normalize_whitespace(text);
    if normalized.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut start = 0;
    for caps in boundary_regex().captures_iter(&normalized) {
        let (Some(marker), Some(whole)) = (caps.get(1), caps.get(0)) else {
            continue;
        };
        push_fragment(&mut sentences, &normalized[start..marker.end()]);
        start = whole.end();
    }
    push_fragment(&mut sentences, &normalized[start..]);

    tracing::trace!(count = sentences.len(), "split sentences");
    sentences
}

fn push_fragment(out: &mut Vec<String>, fragment: &str) {
    let fragment = fragment.trim();
    if char_len(fragment) >= MIN_SENTENCE_CHARS {
        out.push(fragment.to_string());
    }
}
