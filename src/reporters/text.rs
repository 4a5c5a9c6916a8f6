//! Text (terminal) reporter with colors and formatting

use crate::models::ScoringReport;
use anyhow::Result;

/// Score colors by fraction of the criterion max (ANSI escape codes)
fn score_color(score: u32, max: u32) -> &'static str {
    if max == 0 {
        return "\x1b[0m";
    }
    let ratio = score as f64 / max as f64;
    if ratio >= 0.9 {
        "\x1b[32m" // Green
    } else if ratio >= 0.6 {
        "\x1b[33m" // Yellow
    } else {
        "\x1b[31m" // Red
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Render report as formatted terminal output
///
/// `similarity` is the auxiliary semantic-match figure in [-1, 1]; it is
/// displayed but never folded into the overall score.
pub fn render(report: &ScoringReport, similarity: Option<f64>) -> Result<String> {
    let mut out = String::new();

    // Header
    let overall_c = score_color(report.overall_score, 100);
    out.push_str(&format!("\n{BOLD}Introduction Score{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Overall: {overall_c}{BOLD}{}/100{RESET}  ",
        report.overall_score
    ));
    out.push_str(&format!(
        "Words: {}  Sentences: {}\n\n",
        report.word_count, report.sentence_count
    ));

    // Per-criterion breakdown
    out.push_str(&format!("{BOLD}CRITERIA{RESET}\n"));
    for c in &report.criteria {
        let color = score_color(c.score, c.max);
        out.push_str(&format!(
            "  {color}{:>2}/{:<2}{RESET} {BOLD}{}{RESET} {DIM}{}{RESET}\n",
            c.score, c.max, c.name, c.feedback
        ));
    }

    if let Some(sim) = similarity {
        out.push_str(&format!(
            "\n{BOLD}Semantic match to ideal intro:{RESET} {:.1}%\n",
            sim * 100.0
        ));
    }

    out.push_str(&format!(
        "{DIM}Generated at {}{RESET}\n",
        report.generated_at.to_rfc3339()
    ));

    Ok(out)
}
