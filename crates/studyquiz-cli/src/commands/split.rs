//! The `studyquiz split` command.

use anyhow::Result;
use studyquiz_core::segment::split_sentences;

use super::input::InputArgs;

pub fn execute(input: InputArgs) -> Result<()> {
    let text = input.read()?;
    let sentences = split_sentences(&text);
    tracing::debug!(count = sentences.len(), "split text");

    for (i, sentence) in sentences.iter().enumerate() {
        println!("{}) {}", i + 1, sentence);
    }
    Ok(())
}
