//! Lexicon-based positive polarity
//!
//! A small, fixed lexicon of positive-affect words. The polarity is the
//! fraction of transcript tokens that hit the lexicon, which lands in
//! `[0, 1]` by construction. Tokens are lowercased and stripped of
//! surrounding punctuation before lookup.

use crate::error::ScoreResult;
use crate::nlp::SentimentAnalyzer;

/// Positive-affect lexicon, lowercase
const POSITIVE_WORDS: &[&str] = &[
    "amazing",
    "awesome",
    "beautiful",
    "best",
    "brilliant",
    "cheerful",
    "confident",
    "delighted",
    "enjoy",
    "enjoyed",
    "excellent",
    "excited",
    "exciting",
    "fantastic",
    "favorite",
    "favourite",
    "friendly",
    "fun",
    "glad",
    "good",
    "grateful",
    "great",
    "happy",
    "interesting",
    "kind",
    "love",
    "loved",
    "lovely",
    "nice",
    "passionate",
    "perfect",
    "pleasant",
    "pleased",
    "proud",
    "special",
    "thank",
    "thanks",
    "thrilled",
    "wonderful",
];

/// Built-in sentiment adapter with no external model
#[derive(Debug, Default, Clone)]
pub struct LexiconSentiment;

impl LexiconSentiment {
    pub fn new() -> Self {
        Self
    }
}

fn normalize(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

impl SentimentAnalyzer for LexiconSentiment {
    fn positive_polarity(&self, text: &str) -> ScoreResult<f64> {
        let lower = text.to_lowercase();
        let mut total = 0usize;
        let mut positive = 0usize;
        for token in lower.split_whitespace() {
            total += 1;
            if POSITIVE_WORDS.binary_search(&normalize(token)).is_ok() {
                positive += 1;
            }
        }
        if total == 0 {
            return Ok(0.0);
        }
        Ok((positive as f64 / total as f64).clamp(0.0, 1.0))
    }
}
