//! Composite scoring engine
//!
//! Runs the eight criterion scorers over one transcript, assembles the
//! `ScoringReport`, and exposes the auxiliary semantic-similarity check.
//! Scoring is stateless: every call derives fresh transcript facts and
//! builds a fresh report.

use crate::error::{ScoreError, ScoreResult};
use crate::models::{CriterionResult, ScoringReport};
use crate::nlp::{
    cosine_similarity, global_embedder, Embedder, LexiconSentiment, RuleTokenizer,
    SentenceTokenizer, SentimentAnalyzer,
};
use crate::scorers;
use chrono::Utc;
use tracing::{debug, info};

/// Reference description the similarity check embeds against
pub const IDEAL_INTRODUCTION: &str = "A clear, confident, well-structured self-introduction \
including name, age, school, family, hobbies, goals, and a unique fact, with positive tone \
and smooth flow.";

/// Stateless rubric scoring engine
///
/// Holds the adapter implementations; built-in deterministic adapters by
/// default, swappable for stubs through `with_adapters`.
pub struct ScoringEngine {
    tokenizer: Box<dyn SentenceTokenizer>,
    sentiment: Box<dyn SentimentAnalyzer>,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringEngine {
    /// Engine with the built-in tokenizer and sentiment adapters
    pub fn new() -> Self {
        Self {
            tokenizer: Box::new(RuleTokenizer::new()),
            sentiment: Box::new(LexiconSentiment::new()),
        }
    }

    /// Engine with caller-supplied adapters
    pub fn with_adapters(
        tokenizer: Box<dyn SentenceTokenizer>,
        sentiment: Box<dyn SentimentAnalyzer>,
    ) -> Self {
        Self {
            tokenizer,
            sentiment,
        }
    }

    /// Score a transcript against the full rubric
    ///
    /// `duration_sec <= 0` means "duration unknown, assume ideal pace".
    /// Blank transcripts are rejected before any scorer runs.
    pub fn score(&self, transcript: &str, duration_sec: f64) -> ScoreResult<ScoringReport> {
        let text = transcript.trim();
        if text.is_empty() {
            return Err(ScoreError::EmptyTranscript);
        }

        let lower = text.to_lowercase();
        let word_count = text.split_whitespace().count();
        let sentence_count = self.tokenizer.sentences(text).len();
        debug!(word_count, sentence_count, "scoring transcript");

        let salutation = scorers::score_salutation(text);
        let keywords = scorers::score_keywords(&lower);
        let flow = scorers::score_flow(&lower);
        let rate = scorers::score_speech_rate(word_count, duration_sec);
        let grammar = scorers::score_grammar(self.tokenizer.as_ref(), text, word_count);
        let vocabulary = scorers::score_vocabulary(text);
        let fillers = scorers::score_fillers(text, word_count);
        let engagement = scorers::score_engagement(self.sentiment.as_ref(), text)?;

        let criteria = vec![
            CriterionResult {
                name: "Salutation Level".to_string(),
                score: salutation.score,
                max: scorers::salutation::MAX_POINTS,
                feedback: match salutation.tier {
                    Some(tier) => format!("Detected {tier} opening"),
                    None => "No salutation detected".to_string(),
                },
            },
            CriterionResult {
                name: "Keyword Presence".to_string(),
                score: keywords.score,
                max: scorers::keywords::MAX_POINTS,
                feedback: format!(
                    "Must: {:?}, Good: {:?}",
                    keywords.must_found, keywords.good_found
                ),
            },
            CriterionResult {
                name: "Flow".to_string(),
                score: flow,
                max: scorers::flow::MAX_POINTS,
                feedback: if flow > 0 {
                    "Follows expected order".to_string()
                } else {
                    "Order not ideal".to_string()
                },
            },
            CriterionResult {
                name: "Speech Rate (WPM)".to_string(),
                score: rate.score,
                max: scorers::speech_rate::MAX_POINTS,
                feedback: match rate.wpm {
                    Some(wpm) => format!("WPM: {wpm:.1}"),
                    None => "Assumed ideal".to_string(),
                },
            },
            CriterionResult {
                name: "Grammar".to_string(),
                score: grammar.score,
                max: scorers::grammar::MAX_POINTS,
                feedback: format!("{} sentence(s) missing terminal punctuation", grammar.errors),
            },
            CriterionResult {
                name: "Vocabulary (TTR)".to_string(),
                score: vocabulary.score,
                max: scorers::vocabulary::MAX_POINTS,
                feedback: format!("TTR = {:.2}", vocabulary.ttr),
            },
            CriterionResult {
                name: "Clarity (Fillers)".to_string(),
                score: fillers.score,
                max: scorers::fillers::MAX_POINTS,
                feedback: format!("{:.1}% filler words", fillers.rate),
            },
            CriterionResult {
                name: "Engagement".to_string(),
                score: engagement.score,
                max: scorers::engagement::MAX_POINTS,
                feedback: format!("Positive sentiment: {:.2}", engagement.positive),
            },
        ];

        let total: u32 = criteria.iter().map(|c| c.score).sum();
        // Maxima sum to exactly 100, so the clamp should never fire; kept
        // as the documented guard.
        let overall_score = total.min(100);
        info!(overall_score, word_count, "transcript scored");

        Ok(ScoringReport {
            overall_score,
            word_count,
            sentence_count,
            criteria,
            transcript: text.to_string(),
            generated_at: Utc::now(),
        })
    }

    /// Cosine similarity between the transcript and the ideal-introduction
    /// reference, in `[-1, 1]`
    ///
    /// Reported separately from the rubric; never part of `overall_score`.
    pub fn similarity(&self, transcript: &str) -> ScoreResult<f64> {
        let text = transcript.trim();
        if text.is_empty() {
            return Err(ScoreError::EmptyTranscript);
        }
        let embedder = global_embedder();
        let a = embedder.embed(text)?;
        let b = embedder.embed(IDEAL_INTRODUCTION)?;
        Ok(cosine_similarity(&a, &b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ScoringEngine {
        ScoringEngine::new()
    }

    #[test]
    fn test_blank_transcript_rejected() {
        assert!(matches!(
            engine().score("", 30.0),
            Err(ScoreError::EmptyTranscript)
        ));
        assert!(matches!(
            engine().score("  \n ", 30.0),
            Err(ScoreError::EmptyTranscript)
        ));
    }

    #[test]
    fn test_criteria_fixed_order_and_bounds() {
        let report = engine()
            .score("Hello everyone, myself Sam. I am 13. Thank you.", 20.0)
            .unwrap();
        let names: Vec<&str> = report.criteria.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Salutation Level",
                "Keyword Presence",
                "Flow",
                "Speech Rate (WPM)",
                "Grammar",
                "Vocabulary (TTR)",
                "Clarity (Fillers)",
                "Engagement"
            ]
        );
        for c in &report.criteria {
            assert!(c.score <= c.max, "{}: {} > {}", c.name, c.score, c.max);
        }
        assert_eq!(report.max_total(), 100);
    }

    #[test]
    fn test_overall_equals_unclamped_sum() {
        let report = engine()
            .score("Good morning, myself Sam from class 7. Thanks.", 15.0)
            .unwrap();
        let raw: u32 = report.criteria.iter().map(|c| c.score).sum();
        assert_eq!(report.overall_score, raw);
        assert!(report.overall_score <= 100);
    }

    #[test]
    fn test_transcript_is_trimmed_into_report() {
        let report = engine().score("  Hi. Thanks.  ", 0.0).unwrap();
        assert_eq!(report.transcript, "Hi. Thanks.");
    }

    #[test]
    fn test_unknown_duration_feedback() {
        let report = engine()
            .score("Hello everyone, this is a twenty word transcript used to exercise \
                    the ideal pace assumption in the rate scorer. Thanks.", 0.0)
            .unwrap();
        let rate = &report.criteria[3];
        assert_eq!(rate.score, 10);
        assert_eq!(rate.feedback, "Assumed ideal");
    }

    #[test]
    fn test_similarity_in_range_and_blank_rejected() {
        let sim = engine()
            .similarity("Hello everyone, myself Sam, I am 13 years old.")
            .unwrap();
        assert!((-1.0..=1.0).contains(&sim));
        assert!(matches!(
            engine().similarity("  "),
            Err(ScoreError::EmptyTranscript)
        ));
    }

    #[test]
    fn test_ideal_text_matches_itself() {
        let sim = engine().similarity(IDEAL_INTRODUCTION).unwrap();
        assert!(sim > 0.999);
    }
}
