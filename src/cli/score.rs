//! Score and similarity command handlers

use crate::engine::ScoringEngine;
use crate::nlp::warm_embedder;
use crate::reporters::{self, OutputFormat};
use anyhow::{bail, Context, Result};
use console::style;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Read the transcript from a file, or stdin when the path is '-'
fn read_transcript(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read transcript from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read transcript file: {}", input.display()))
    }
}

/// Run the score command
pub(crate) fn run(
    input: &Path,
    duration: f64,
    format: &str,
    output: Option<&Path>,
) -> Result<()> {
    let transcript = read_transcript(input)?;
    // Shell-side precondition: never invoke the engine on blank input
    if transcript.trim().is_empty() {
        bail!("transcript is empty; please provide a non-blank transcript");
    }

    let format = OutputFormat::from_str(format)?;
    warm_embedder();
    let engine = ScoringEngine::new();
    let report = engine.score(&transcript, duration)?;

    let rendered = match format {
        OutputFormat::Json => reporters::json::render(&report)?,
        OutputFormat::Text => {
            let similarity = engine.similarity(&transcript)?;
            reporters::text::render(&report, Some(similarity))?
        }
    };

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            println!(
                "{} Report written to {}",
                style("✓").green(),
                style(path.display()).cyan()
            );
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Run the similarity command
pub(crate) fn run_similarity(input: &Path) -> Result<()> {
    let transcript = read_transcript(input)?;
    if transcript.trim().is_empty() {
        bail!("transcript is empty; please provide a non-blank transcript");
    }

    warm_embedder();
    let engine = ScoringEngine::new();
    let similarity = engine.similarity(&transcript)?;
    println!(
        "{} {:.1}%",
        style("Semantic match to ideal intro:").bold(),
        similarity * 100.0
    );

    Ok(())
}
