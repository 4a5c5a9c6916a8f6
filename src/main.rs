//! introscore - rubric-based communication scoring CLI
//!
//! Scores a spoken self-introduction transcript against a fixed rubric
//! and reports per-criterion breakdowns plus a semantic-match figure.

use anyhow::Result;
use clap::Parser;
use introscore::cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Parse CLI args first so --log-level can seed the filter; RUST_LOG
    // still wins when set.
    let cli = cli::Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    cli::run(cli)
}
