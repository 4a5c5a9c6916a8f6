//! Flow scorer
//!
//! Binary check for the expected introduction shape: an opener among the
//! first five words and a closing thanks anywhere in the text. No partial
//! credit. Transcripts shorter than five words check whatever words exist.

pub const MAX_POINTS: u32 = 5;

/// Opening greeting tokens looked for in the first five words
pub const OPENERS: &[&str] = &["hello", "hi", "good"];

/// Closing phrases looked for anywhere in the text
pub const CLOSERS: &[&str] = &["thank", "thanks"];

/// Score structural flow over the lowercased transcript
pub fn score_flow(lower: &str) -> u32 {
    let starts_ok = lower
        .split_whitespace()
        .take(5)
        .any(|w| OPENERS.iter().any(|o| w.contains(o)));
    let ends_ok = CLOSERS.iter().any(|c| lower.contains(c));
    if starts_ok && ends_ok {
        MAX_POINTS
    } else {
        0
    }
}
