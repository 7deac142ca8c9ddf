//! The `studyquiz init` command.

use std::path::Path;

use anyhow::{Context, Result};
use studyquiz_core::config::{CONFIG_FILE_NAME, SAMPLE_CONFIG};

pub fn execute() -> Result<()> {
    let path = Path::new(CONFIG_FILE_NAME);
    if path.exists() {
        println!("{CONFIG_FILE_NAME} already exists, skipping.");
        return Ok(());
    }

    std::fs::write(path, SAMPLE_CONFIG)
        .with_context(|| format!("failed to write {CONFIG_FILE_NAME}"))?;
    println!("Created {CONFIG_FILE_NAME}");

    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE_NAME} to pick a locale and item counts");
    println!("  2. Run: studyquiz generate --file notes.txt");
    Ok(())
}
