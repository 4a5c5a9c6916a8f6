//! Criterion scorers for the communication rubric
//!
//! Eight independent scorers, each a pure function over immutable inputs
//! returning a bounded point value plus diagnostic metadata. Their maxima
//! sum to exactly 100:
//!
//! | Criterion          | Max |
//! |--------------------|-----|
//! | Salutation         |   5 |
//! | Keyword coverage   |  30 |
//! | Flow               |   5 |
//! | Speech rate        |  10 |
//! | Grammar proxy      |  10 |
//! | Vocabulary (TTR)   |  10 |
//! | Clarity (fillers)  |  15 |
//! | Engagement         |  15 |
//!
//! Rubric thresholds live in named tables (`bands`, per-module consts) so
//! rubric changes are data edits.

pub mod bands;
pub mod engagement;
pub mod fillers;
pub mod flow;
pub mod grammar;
pub mod keywords;
pub mod salutation;
pub mod speech_rate;
pub mod vocabulary;

pub use engagement::{score_engagement, EngagementOutcome};
pub use fillers::{score_fillers, FillerOutcome, FILLER_WORDS};
pub use flow::score_flow;
pub use grammar::{score_grammar, GrammarOutcome};
pub use keywords::{score_keywords, KeywordOutcome};
pub use salutation::{score_salutation, SalutationOutcome};
pub use speech_rate::{score_speech_rate, SpeechRateOutcome};
pub use vocabulary::{score_vocabulary, VocabularyOutcome};
