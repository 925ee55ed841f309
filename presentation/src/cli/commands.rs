//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for panel results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with all phases
    Full,
    /// Only the final synthesis
    Synthesis,
    /// JSON output
    Json,
}

/// CLI arguments for llm-panel
#[derive(Parser, Debug)]
#[command(name = "llm-panel")]
#[command(author, version, about = "LLM panel - several providers answer, one adjudicates")]
#[command(long_about = r#"
llm-panel sends a question to a panel of LLM providers and has one of them
adjudicate a final answer.

The process has up to three phases:
1. Panel Answers: every seat answers the question in parallel
2. Cross-Critique: each seat questions the other answers (optional)
3. Synthesis: the adjudicator weighs everything into one answer

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./llm-panel.toml    Project-level config
3. ~/.config/llm-panel/config.toml   Global config

Environment variables prefixed LLM_PANEL_ override any file.

Example:
  llm-panel "What's the best way to handle errors in Rust?"
  llm-panel -s groq -s ollama "Compare async/await patterns"
  llm-panel --local --critique -o full "Is this architecture sound?"
  llm-panel --refine "Draft a short incident report"
"#)]
pub struct Cli {
    /// The question to put to the panel (not required with --show-config)
    pub question: Option<String>,

    /// Seats on the panel, in query order (can be specified multiple times)
    #[arg(short, long, value_name = "PROVIDER")]
    pub seat: Vec<String>,

    /// Use the local Ollama server for the swing seat instead of the hosted API
    #[arg(long)]
    pub local: bool,

    /// Seat that synthesizes the final answer
    #[arg(long, value_name = "PROVIDER")]
    pub adjudicator: Option<String>,

    /// Run the cross-critique phase before synthesis
    #[arg(long)]
    pub critique: bool,

    /// Skip the cross-critique phase even if the config enables it
    #[arg(long, conflicts_with = "critique")]
    pub no_critique: bool,

    /// Refine one answer through the seats in sequence instead of running a panel
    #[arg(long)]
    pub refine: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "synthesis")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show the effective configuration and its sources, then exit
    #[arg(long)]
    pub show_config: bool,
}
