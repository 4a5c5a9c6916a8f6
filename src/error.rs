//! Error types for the scoring engine

use thiserror::Error;

/// Errors that can occur while scoring a transcript
///
/// A scoring request either completes with a full report or fails with one
/// of these; no partial reports are produced.
#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("transcript is empty or blank; nothing to score")]
    EmptyTranscript,

    #[error("adapter failure: {0}")]
    Adapter(String),
}

pub type ScoreResult<T> = Result<T, ScoreError>;
