//! Where a command reads its study text from.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Study text given inline
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Read study text from a UTF-8 file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    /// The text from `--text`, then `--file`, falling back to stdin.
    pub fn read(self) -> Result<String> {
        if let Some(text) = self.text {
            return Ok(text);
        }
        if let Some(path) = self.file {
            return std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()));
        }

        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read study text from stdin")?;
        Ok(text)
    }
}
