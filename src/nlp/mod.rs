//! NLP adapter interfaces and built-in implementations
//!
//! The scoring engine never calls an NLP library directly; it goes through
//! the traits defined here so deterministic stubs can be substituted in
//! tests:
//! - `SentenceTokenizer` - sentence splitting (`tokenizer`)
//! - `SentimentAnalyzer` - positive-polarity intensity (`sentiment`)
//! - `Embedder` - text embeddings for semantic similarity (`embedding`)

pub mod embedding;
pub mod sentiment;
pub mod tokenizer;

pub use embedding::{
    cosine_similarity, global_embedder, warm_embedder, HashedBowEmbedder, EMBEDDING_DIM,
};
pub use sentiment::LexiconSentiment;
pub use tokenizer::RuleTokenizer;

use crate::error::ScoreResult;

/// Splits raw text into sentences
///
/// Empty or whitespace-only input must produce an empty sequence.
pub trait SentenceTokenizer: Send + Sync {
    fn sentences(&self, text: &str) -> Vec<String>;
}

/// Scores the positive affect of a text
pub trait SentimentAnalyzer: Send + Sync {
    /// Positive-polarity intensity in `[0, 1]`; higher means more positive.
    fn positive_polarity(&self, text: &str) -> ScoreResult<f64>;
}

/// Maps text to a fixed-dimension vector
pub trait Embedder: Send + Sync {
    fn embed(&self, text: &str) -> ScoreResult<Vec<f32>>;
}
