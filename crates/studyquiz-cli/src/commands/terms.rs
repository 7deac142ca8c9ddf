//! The `studyquiz terms` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};
use studyquiz_core::config::load_config_from;
use studyquiz_core::scoring::TermRanking;
use studyquiz_core::QuizEngine;

use super::input::InputArgs;

pub fn execute(input: InputArgs, limit: usize, config: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config.as_deref())?;
    let engine = QuizEngine::new(config.engine_config())?;
    let text = input.read()?;

    let ranking = engine.rank_terms(&text);
    if ranking.is_empty() {
        eprintln!("No terms found.");
        return Ok(());
    }

    println!("{}", terms_table(&ranking, limit));
    Ok(())
}

fn terms_table(ranking: &TermRanking, limit: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Rank", "Term", "Frequency", "Score"]);

    for (i, term) in ranking.top(limit).iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&term.term),
            Cell::new(term.frequency),
            Cell::new(format!("{:.2}", term.score)),
        ]);
    }
    table
}
