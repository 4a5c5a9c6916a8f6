//! CLI command definitions and handlers

mod score;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse and validate a duration in seconds (non-negative)
fn parse_duration(s: &str) -> Result<f64, String> {
    let secs: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number of seconds", s))?;
    if secs < 0.0 {
        Err("duration cannot be negative (use 0 for unknown)".to_string())
    } else {
        Ok(secs)
    }
}

/// introscore - rubric-based communication scoring
///
/// Scores a spoken self-introduction transcript against a fixed rubric.
#[derive(Parser, Debug)]
#[command(name = "introscore")]
#[command(
    version,
    about = "Score a self-introduction transcript against a communication rubric (0-100)",
    long_about = "introscore evaluates a student's spoken self-introduction transcript against \
a fixed communication rubric: salutation, keyword coverage, structural flow, speaking pace, \
grammar proxy, vocabulary diversity, filler-word rate, and sentiment-based engagement. \
It also reports a semantic-similarity match against an ideal introduction.",
    after_help = "\
Examples:
  introscore score transcript.txt --duration 52      Score with a known duration
  introscore score transcript.txt                    Unknown duration (assumes ideal pace)
  introscore score - --format json < transcript.txt  JSON export from stdin
  introscore similarity transcript.txt               Semantic match only"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a transcript against the full rubric
    Score {
        /// Transcript file path, or '-' for stdin
        input: PathBuf,

        /// Speaking duration in seconds (0 = unknown, assumes ideal pace)
        #[arg(long, short = 'd', default_value = "0", value_parser = parse_duration)]
        duration: f64,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Semantic similarity between a transcript and the ideal introduction
    Similarity {
        /// Transcript file path, or '-' for stdin
        input: PathBuf,
    },
}

/// Dispatch the parsed CLI command
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Score {
            input,
            duration,
            format,
            output,
        } => score::run(&input, duration, &format, output.as_deref()),
        Commands::Similarity { input } => score::run_similarity(&input),
    }
}
