//! TOML configuration.
//!
//! Settings are read from `studyquiz.toml` and turned into an engine config
//! plus a default request. Every field has a default, so an empty file (or
//! no file at all) is a valid configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::{GenerateRequest, QuizEngineConfig};
use crate::error::QuizError;
use crate::locale::Locale;
use crate::model::{BlankStrategy, Category, CategorySet};
use crate::stopwords::StopwordSet;
use crate::truefalse::PerturbationSettings;

/// File name searched for in the working directory.
pub const CONFIG_FILE_NAME: &str = "studyquiz.toml";

/// Top-level studyquiz configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyquizConfig {
    /// Wording of generated prompts and section labels.
    #[serde(default)]
    pub locale: Locale,
    /// Fixed seed for reproducible true/false items.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Sections to render.
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub counts: CountsConfig,
    #[serde(default)]
    pub true_false: PerturbationSettings,
    #[serde(default)]
    pub fill_blank: FillBlankConfig,
    #[serde(default)]
    pub stopwords: StopwordsConfig,
}

/// Items per section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountsConfig {
    #[serde(default = "default_count")]
    pub discussion: usize,
    #[serde(default = "default_count")]
    pub true_false: usize,
    #[serde(default = "default_count")]
    pub fill_blank: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillBlankConfig {
    #[serde(default)]
    pub strategy: BlankStrategy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopwordsConfig {
    /// Words added to the built-in bilingual list.
    #[serde(default)]
    pub extra: Vec<String>,
}

fn default_categories() -> Vec<Category> {
    Category::ALL.to_vec()
}

fn default_count() -> usize {
    3
}

impl Default for CountsConfig {
    fn default() -> Self {
        Self {
            discussion: default_count(),
            true_false: default_count(),
            fill_blank: default_count(),
        }
    }
}

impl Default for StudyquizConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            seed: None,
            categories: default_categories(),
            counts: CountsConfig::default(),
            true_false: PerturbationSettings::default(),
            fill_blank: FillBlankConfig::default(),
            stopwords: StopwordsConfig::default(),
        }
    }
}

impl StudyquizConfig {
    pub fn validate(&self) -> Result<(), QuizError> {
        self.true_false.validate()
    }

    /// Engine settings described by this config.
    pub fn engine_config(&self) -> QuizEngineConfig {
        QuizEngineConfig {
            locale: self.locale,
            stopwords: StopwordSet::bilingual().extended(&self.stopwords.extra),
            perturbation: self.true_false,
            blank_strategy: self.fill_blank.strategy,
        }
    }

    /// The request made when no command-line overrides are given.
    pub fn request(&self) -> GenerateRequest {
        GenerateRequest {
            categories: self.categories.iter().copied().collect::<CategorySet>(),
            discussion_count: self.counts.discussion,
            true_false_count: self.counts.true_false,
            blank_count: self.counts.fill_blank,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order when `path` is `None`:
/// 1. `studyquiz.toml` in the current directory
/// 2. `~/.config/studyquiz/config.toml`
///
/// Environment variable overrides: `STUDYQUIZ_LOCALE`, `STUDYQUIZ_SEED`.
pub fn load_config_from(path: Option<&Path>) -> Result<StudyquizConfig> {
    load_config_with_env(path, |key| std::env::var(key).ok())
}

fn load_config_with_env<F>(path: Option<&Path>, lookup: F) -> Result<StudyquizConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            if local.exists() {
                Some(local)
            } else {
                dirs_path()
                    .map(|dir| dir.join("config.toml"))
                    .filter(|global| global.exists())
            }
        }
    };

    let config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => StudyquizConfig::default(),
    };

    let config = apply_env_overrides(config, lookup)?;
    config.validate()?;
    Ok(config)
}

/// Parse a TOML string into a config (useful for testing).
pub fn parse_config_str(content: &str) -> Result<StudyquizConfig> {
    let config: StudyquizConfig = toml::from_str(content)?;
    Ok(config)
}

/// Apply `STUDYQUIZ_*` overrides, reading variables through `lookup`.
pub fn apply_env_overrides<F>(mut config: StudyquizConfig, lookup: F) -> Result<StudyquizConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(locale) = lookup("STUDYQUIZ_LOCALE") {
        config.locale = locale.parse()?;
    }
    if let Some(seed) = lookup("STUDYQUIZ_SEED") {
        let seed = seed
            .trim()
            .parse::<u64>()
            .with_context(|| format!("STUDYQUIZ_SEED is not an unsigned integer: {seed}"))?;
        config.seed = Some(seed);
    }
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("studyquiz"))
}

/// Starter config written by `studyquiz init`.
pub const SAMPLE_CONFIG: &str = r#"# studyquiz configuration

# Wording of prompts and section headers: "ko" or "en"
locale = "ko"

# Uncomment for reproducible true/false items
# seed = 42

categories = ["discussion", "true_false", "fill_blank"]

[counts]
discussion = 3
true_false = 3
fill_blank = 3

[true_false]
probability = 0.6
min_offset = 1
max_offset = 10

[fill_blank]
# "first" blanks the first content word, "ranked" the most important one
strategy = "first"

[stopwords]
extra = []
"#;
