//! The `studyquiz generate` command.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use studyquiz_core::config::{load_config_from, StudyquizConfig};
use studyquiz_core::{request_rng, CategorySet, GenerateRequest, QuizEngine};
use studyquiz_report::{render, OutputFormat};

use super::input::InputArgs;

/// Command-line overrides on top of the loaded config.
#[derive(Debug, Default)]
pub struct GenerateOptions {
    pub categories: Option<String>,
    pub discussion_count: Option<usize>,
    pub true_false_count: Option<usize>,
    pub blank_count: Option<usize>,
    pub seed: Option<u64>,
    pub locale: Option<String>,
    pub format: String,
    pub config: Option<PathBuf>,
}

pub fn execute(input: InputArgs, options: GenerateOptions) -> Result<()> {
    let format: OutputFormat = options.format.parse().map_err(|e: String| anyhow!(e))?;
    let mut config = load_config_from(options.config.as_deref())?;
    let request = apply_options(&mut config, &options)?;

    let engine = QuizEngine::new(config.engine_config())?;
    let text = input.read()?;

    let mut rng = request_rng(config.seed);
    let doc = engine.build_document(&text, &request, &mut rng);
    if doc.is_empty() {
        tracing::debug!("nothing to generate for the given text");
    }

    let rendered = render(&doc, format)?;
    match format {
        OutputFormat::Markdown => print!("{rendered}"),
        _ => println!("{rendered}"),
    }
    Ok(())
}

fn apply_options(
    config: &mut StudyquizConfig,
    options: &GenerateOptions,
) -> Result<GenerateRequest> {
    if let Some(locale) = &options.locale {
        config.locale = locale.parse()?;
    }
    if options.seed.is_some() {
        config.seed = options.seed;
    }

    let mut request = config.request();
    if let Some(list) = &options.categories {
        request.categories = CategorySet::parse_list(list)?;
    }
    if let Some(n) = options.discussion_count {
        request.discussion_count = n;
    }
    if let Some(n) = options.true_false_count {
        request.true_false_count = n;
    }
    if let Some(n) = options.blank_count {
        request.blank_count = n;
    }
    Ok(request)
}
