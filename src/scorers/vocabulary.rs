//! Vocabulary diversity scorer (type-token ratio)
//!
//! TTR over whitespace-split lowercased tokens. Punctuation is not
//! stripped, so "cricket." and "cricket" count as distinct types; the
//! reference rubric behaves the same way. Empty transcripts score zero.

use crate::scorers::bands::{floor_points, FloorBand};
use std::collections::HashSet;

pub const MAX_POINTS: u32 = 10;

/// Bands over the type-token ratio
pub const TTR_BANDS: &[FloorBand] = &[
    FloorBand { min: 0.9, points: 10 },
    FloorBand { min: 0.7, points: 8 },
    FloorBand { min: 0.5, points: 6 },
    FloorBand { min: 0.3, points: 4 },
];

const FALLBACK_POINTS: u32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct VocabularyOutcome {
    pub score: u32,
    /// Type-token ratio in [0, 1]; 0 for empty transcripts
    pub ttr: f64,
}

/// Score lexical diversity of the transcript
pub fn score_vocabulary(text: &str) -> VocabularyOutcome {
    let lower = text.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    if words.is_empty() {
        return VocabularyOutcome { score: 0, ttr: 0.0 };
    }

    let distinct: HashSet<&str> = words.iter().copied().collect();
    let ttr = distinct.len() as f64 / words.len() as f64;
    VocabularyOutcome {
        score: floor_points(TTR_BANDS, ttr, FALLBACK_POINTS),
        ttr,
    }
}
