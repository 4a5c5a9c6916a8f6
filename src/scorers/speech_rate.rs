//! Speech rate scorer
//!
//! Words-per-minute mapped through an inverted-U band table: the optimum
//! band sits at 111-140 WPM and both faster and slower speech lose points.
//! A duration of zero (or less) is the "unknown duration" sentinel and
//! scores the full 10 as an assumed-ideal pace, not a measurement.
//!
//! The bands are closed ranges; a fractional WPM that falls between two
//! bands (e.g. 140.5) drops to the fallback, matching the rubric as
//! written.

use tracing::debug;

pub const MAX_POINTS: u32 = 10;

/// Points when the rate lands inside `lo..=hi` WPM
#[derive(Debug, Clone, Copy)]
pub struct RateBand {
    pub lo: f64,
    pub hi: f64,
    pub points: u32,
}

/// Inverted-U rate bands
pub const RATE_BANDS: &[RateBand] = &[
    RateBand { lo: 141.0, hi: 160.0, points: 6 },
    RateBand { lo: 111.0, hi: 140.0, points: 10 },
    RateBand { lo: 81.0, hi: 110.0, points: 6 },
];

/// Points above the top band (too fast)
const FAST_POINTS: u32 = 2;
/// Points below every band (too slow)
const SLOW_POINTS: u32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRateOutcome {
    pub score: u32,
    /// Computed words per minute; `None` when the duration was unknown
    pub wpm: Option<f64>,
}

/// Score speaking pace from word count and duration in seconds
pub fn score_speech_rate(word_count: usize, duration_sec: f64) -> SpeechRateOutcome {
    if duration_sec <= 0.0 {
        // Unknown duration: assume ideal pace
        return SpeechRateOutcome {
            score: MAX_POINTS,
            wpm: None,
        };
    }

    let wpm = (word_count as f64 / duration_sec) * 60.0;
    let score = if wpm > 160.0 {
        FAST_POINTS
    } else {
        RATE_BANDS
            .iter()
            .find(|b| wpm >= b.lo && wpm <= b.hi)
            .map(|b| b.points)
            .unwrap_or(SLOW_POINTS)
    };

    debug!(wpm, score, "speech rate");
    SpeechRateOutcome {
        score,
        wpm: Some(wpm),
    }
}
