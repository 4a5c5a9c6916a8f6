//! Engagement scorer
//!
//! Delegates to the sentiment adapter for a positive-polarity intensity in
//! [0, 1] and bands it. Adapter failures abort the request; a defaulted
//! engagement score would skew the composite.

use crate::error::ScoreResult;
use crate::nlp::SentimentAnalyzer;
use crate::scorers::bands::{floor_points, FloorBand};

pub const MAX_POINTS: u32 = 15;

/// Bands over positive polarity
pub const ENGAGEMENT_BANDS: &[FloorBand] = &[
    FloorBand { min: 0.9, points: 15 },
    FloorBand { min: 0.7, points: 12 },
    FloorBand { min: 0.5, points: 9 },
    FloorBand { min: 0.3, points: 6 },
];

const FALLBACK_POINTS: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct EngagementOutcome {
    pub score: u32,
    /// Raw positive polarity from the adapter
    pub positive: f64,
}

/// Score engagement from sentiment polarity
pub fn score_engagement(
    sentiment: &dyn SentimentAnalyzer,
    text: &str,
) -> ScoreResult<EngagementOutcome> {
    let positive = sentiment.positive_polarity(text)?;
    Ok(EngagementOutcome {
        score: floor_points(ENGAGEMENT_BANDS, positive, FALLBACK_POINTS),
        positive,
    })
}
