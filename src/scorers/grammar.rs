//! Grammar proxy scorer
//!
//! Not a grammar checker. Sentences that do not end in `.`, `!` or `?`
//! count as errors, normalized to errors-per-100-words against a ceiling
//! of 10, and the resulting clean fraction is banded. Zero-word
//! transcripts short-circuit to a clean rate of zero errors.

use crate::nlp::SentenceTokenizer;
use crate::scorers::bands::{floor_points, FloorBand};
use tracing::debug;

pub const MAX_POINTS: u32 = 10;

/// Errors-per-100-words ceiling used for normalization
const ERROR_CEILING_PER_100: f64 = 10.0;

/// Bands over the clean fraction (1 - normalized error ratio)
pub const CLEAN_BANDS: &[FloorBand] = &[
    FloorBand { min: 0.9, points: 10 },
    FloorBand { min: 0.7, points: 8 },
    FloorBand { min: 0.5, points: 6 },
    FloorBand { min: 0.3, points: 4 },
];

const FALLBACK_POINTS: u32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct GrammarOutcome {
    pub score: u32,
    /// Sentences without terminal punctuation
    pub errors: usize,
    /// Clean fraction in [0, 1]
    pub clean: f64,
}

/// Score the grammar proxy over the transcript
pub fn score_grammar(
    tokenizer: &dyn SentenceTokenizer,
    text: &str,
    word_count: usize,
) -> GrammarOutcome {
    let sentences = tokenizer.sentences(text);
    let errors = sentences
        .iter()
        .filter(|s| {
            let trimmed = s.trim();
            !trimmed.is_empty() && !trimmed.ends_with(['.', '!', '?'])
        })
        .count();

    let errors_per_100 = if word_count > 0 {
        (errors as f64 / word_count as f64) * 100.0
    } else {
        0.0
    };
    let ratio = (errors_per_100 / ERROR_CEILING_PER_100).min(1.0);
    let clean = (1.0 - ratio).max(0.0);
    let score = floor_points(CLEAN_BANDS, clean, FALLBACK_POINTS);

    debug!(errors, clean, score, "grammar proxy");
    GrammarOutcome {
        score,
        errors,
        clean,
    }
}
