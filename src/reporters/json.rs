//! JSON reporter
//!
//! Outputs the full ScoringReport as pretty-printed JSON. This is the
//! export format: exactly the report fields, lossless, suitable for
//! persistence or further processing.

use crate::models::ScoringReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &ScoringReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render report as compact JSON (single line)
pub fn render_compact(report: &ScoringReport) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}
