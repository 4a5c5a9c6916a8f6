//! Core data models for introscore
//!
//! These models represent the rubric scoring output: one `CriterionResult`
//! per rubric criterion, collected into a `ScoringReport`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of rubric criteria in every report
pub const CRITERION_COUNT: usize = 8;

/// Outcome of a single rubric criterion
///
/// Invariant: `0 <= score <= max`. Each scorer enforces this through its
/// own bounded point tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionResult {
    /// Display name of the criterion (e.g. "Salutation Level")
    pub name: String,
    /// Points awarded
    pub score: u32,
    /// Maximum points this criterion can award
    pub max: u32,
    /// Human-readable summary of the diagnostic metadata
    pub feedback: String,
}

/// Full rubric report for one scored transcript
///
/// Built fresh per request and never mutated afterwards. `criteria` always
/// holds the 8 criteria in fixed declaration order: Salutation, Keyword,
/// Flow, Speech Rate, Grammar, Vocabulary, Clarity (Fillers), Engagement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringReport {
    /// Composite score, clamped to 0-100
    pub overall_score: u32,
    /// Whitespace-split token count of the transcript
    pub word_count: usize,
    /// Sentence count from the tokenizer adapter
    pub sentence_count: usize,
    /// Per-criterion breakdowns, fixed order
    pub criteria: Vec<CriterionResult>,
    /// The trimmed transcript that was scored
    pub transcript: String,
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
}

impl ScoringReport {
    /// Sum of the per-criterion maxima (always 100 for the fixed rubric)
    pub fn max_total(&self) -> u32 {
        self.criteria.iter().map(|c| c.max).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ScoringReport {
        ScoringReport {
            overall_score: 42,
            word_count: 10,
            sentence_count: 2,
            criteria: vec![CriterionResult {
                name: "Flow".to_string(),
                score: 5,
                max: 5,
                feedback: "Follows expected order".to_string(),
            }],
            transcript: "Hello everyone. Thank you.".to_string(),
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_report_serde_round_trip() {
        let report = sample_report();
        let json = serde_json::to_string(&report).expect("serialize report");
        let parsed: ScoringReport = serde_json::from_str(&json).expect("parse report");
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_max_total_sums_criteria() {
        let report = sample_report();
        assert_eq!(report.max_total(), 5);
    }
}
