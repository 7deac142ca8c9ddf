//! studyquiz CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

use commands::generate::GenerateOptions;
use commands::input::InputArgs;

#[derive(Parser)]
#[command(
    name = "studyquiz",
    version,
    about = "Turn study text into discussion prompts and quizzes"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate discussion topics and quiz questions
    Generate {
        #[command(flatten)]
        input: InputArgs,

        /// Sections to include (e.g. "discussion,true_false,fill_blank")
        #[arg(long)]
        categories: Option<String>,

        /// Number of discussion topics (1-10)
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..=10))]
        discussion_count: Option<u16>,

        /// Number of true/false questions (1-10)
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..=10))]
        tf_count: Option<u16>,

        /// Number of fill-in-the-blank questions (1-10)
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..=10))]
        blank_count: Option<u16>,

        /// Seed for reproducible true/false items
        #[arg(long)]
        seed: Option<u64>,

        /// Output language: ko, en
        #[arg(long)]
        locale: Option<String>,

        /// Output format: markdown, json, html
        #[arg(long, default_value = "markdown")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show the ranked key terms of a text
    Terms {
        #[command(flatten)]
        input: InputArgs,

        /// Maximum number of terms to show
        #[arg(long, default_value = "20")]
        limit: usize,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show how a text is split into sentences
    Split {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Create a starter studyquiz.toml
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("studyquiz=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            input,
            categories,
            discussion_count,
            tf_count,
            blank_count,
            seed,
            locale,
            format,
            config,
        } => commands::generate::execute(
            input,
            GenerateOptions {
                categories,
                discussion_count: discussion_count.map(usize::from),
                true_false_count: tf_count.map(usize::from),
                blank_count: blank_count.map(usize::from),
                seed,
                locale,
                format,
                config,
            },
        ),
        Commands::Terms {
            input,
            limit,
            config,
        } => commands::terms::execute(input, limit, config),
        Commands::Split { input } => commands::split::execute(input),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
