//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for generated answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The answer text only
    Text,
    /// JSON object with question, marks, model and answer or error
    Json,
}

impl From<OutputFormat> for examgen_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => examgen_domain::OutputFormat::Text,
            OutputFormat::Json => examgen_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for examgen
#[derive(Parser, Debug)]
#[command(name = "examgen")]
#[command(author, version, about = "Exam-style answers from a hosted LLM")]
#[command(long_about = r#"
examgen renders an exam question, its context documents and a marks label
into a fixed prompt and asks a hosted model for the answer.

The API key is read from GROQ_API_KEY unless configured otherwise.

Configuration files are loaded from (in priority order):
1. EXAMGEN_* environment variables (e.g. EXAMGEN_PROVIDER__MODEL)
2. --config <path>     Explicit config file
3. ./examgen.toml      Project-level config
4. ~/.config/examgen/config.toml   Global config

Example:
  examgen "What is TCP?"
  examgen -m 10 -d notes/osi.txt "Define OSI model"
  examgen --output json --model llama-3.3-70b-versatile "Explain paging"
"#)]
pub struct Cli {
    /// The exam question (not required with --show-config)
    pub question: Option<String>,

    /// Marks the answer is written for (free-form, e.g. 5 or 10)
    #[arg(short, long, default_value = "5")]
    pub marks: String,

    /// Context document file (can be specified multiple times, order is kept)
    #[arg(short, long = "doc", value_name = "PATH")]
    pub docs: Vec<PathBuf>,

    /// Model to use instead of the configured one
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append prompts and answers to a JSONL transcript
    #[arg(long, value_name = "PATH")]
    pub log_conversation: Option<PathBuf>,
}
