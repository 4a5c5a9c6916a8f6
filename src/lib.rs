//! introscore - rubric scoring for spoken self-introductions
//!
//! Scores a transcript against a fixed communication rubric (0-100) with
//! per-criterion breakdowns, plus a semantic-similarity check against an
//! ideal-introduction reference. One transcript at a time, stateless; the
//! output is a structured `ScoringReport`.

pub mod cli;
pub mod engine;
pub mod error;
pub mod models;
pub mod nlp;
pub mod reporters;
pub mod scorers;

pub use engine::{ScoringEngine, IDEAL_INTRODUCTION};
pub use error::{ScoreError, ScoreResult};
pub use models::{CriterionResult, ScoringReport, CRITERION_COUNT};
