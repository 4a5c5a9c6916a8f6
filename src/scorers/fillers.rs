//! Filler-word (clarity) scorer
//!
//! Counts lowercased whitespace-split tokens that exactly match the filler
//! set, then bands the filler rate per 100 words (lower is better). The
//! set carries the rubric's multi-word entries ("you know", "i mean",
//! "sort of") even though single-token scanning can never match them;
//! that mirrors the reference rubric as written rather than silently
//! fixing it.

use crate::scorers::bands::{ceiling_points, CeilingBand};
use tracing::debug;

pub const MAX_POINTS: u32 = 15;

/// Filler-word set from the rubric
pub const FILLER_WORDS: &[&str] = &[
    "um", "uh", "like", "you know", "so", "actually", "basically", "right", "i mean", "well",
    "kinda", "sort of", "okay", "hmm", "ah",
];

/// Bands over filler rate percent; first ceiling the rate fits under wins
pub const FILLER_BANDS: &[CeilingBand] = &[
    CeilingBand { max: 3.0, points: 15 },
    CeilingBand { max: 6.0, points: 12 },
    CeilingBand { max: 9.0, points: 9 },
    CeilingBand { max: 12.0, points: 6 },
];

const FALLBACK_POINTS: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct FillerOutcome {
    pub score: u32,
    /// Filler tokens per 100 words
    pub rate: f64,
    /// Raw filler token count
    pub count: usize,
}

/// Score clarity from filler-word density
pub fn score_fillers(text: &str, word_count: usize) -> FillerOutcome {
    let lower = text.to_lowercase();
    let count = lower
        .split_whitespace()
        .filter(|w| FILLER_WORDS.contains(w))
        .count();

    let rate = if word_count > 0 {
        (count as f64 / word_count as f64) * 100.0
    } else {
        0.0
    };
    let score = ceiling_points(FILLER_BANDS, rate, FALLBACK_POINTS);

    debug!(count, rate, score, "filler words");
    FillerOutcome { score, rate, count }
}
