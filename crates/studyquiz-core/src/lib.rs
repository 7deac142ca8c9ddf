//! studyquiz-core — Text analysis and study question generation.
//!
//! This crate turns a block of study text into discussion prompts,
//! true/false statements and fill-in-the-blank questions. It holds the
//! tokenizer, sentence splitter, term scorer, the question generators and
//! the engine that ties them together.

pub mod blank;
pub mod config;
pub mod discussion;
pub mod engine;
pub mod error;
pub mod locale;
pub mod model;
pub mod report;
pub mod scoring;
pub mod segment;
pub mod stopwords;
pub mod tokenize;
pub mod truefalse;

pub use engine::{request_rng, GenerateRequest, QuizEngine, QuizEngineConfig};
pub use error::QuizError;
pub use locale::Locale;
pub use model::{Category, CategorySet, FillBlankQuestion, QuizResult, TrueFalseQuestion};
