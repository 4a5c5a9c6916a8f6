//! Rule-based sentence tokenizer
//!
//! Splits on `.`, `!`, `?` runs, keeping the terminator attached to its
//! sentence. Trailing text without a terminator still forms a sentence,
//! which is what the grammar proxy scorer counts as an "error".

use crate::nlp::SentenceTokenizer;
use regex::Regex;
use std::sync::OnceLock;

static SENTENCE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn get_pattern() -> &'static Regex {
    SENTENCE_PATTERN.get_or_init(|| {
        // A sentence is a run of non-terminator chars plus an optional
        // terminator run ("Wait?!" stays one sentence).
        Regex::new(r"[^.!?]+[.!?]*|[.!?]+").expect("valid regex")
    })
}

/// Built-in sentence splitter with no external model
#[derive(Debug, Default, Clone)]
pub struct RuleTokenizer;

impl RuleTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl SentenceTokenizer for RuleTokenizer {
    fn sentences(&self, text: &str) -> Vec<String> {
        get_pattern()
            .find_iter(text)
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty() && s.chars().any(|c| !".!?".contains(c)))
            .map(|s| s.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<String> {
        RuleTokenizer::new().sentences(text)
    }

    #[test]
    fn test_empty_input_yields_no_sentences() {
        assert!(split("").is_empty());
        assert!(split("   \n\t ").is_empty());
    }

    #[test]
    fn test_basic_split() {
        let sentences = split("Hello everyone. How are you? I am fine!");
        assert_eq!(
            sentences,
            vec!["Hello everyone.", "How are you?", "I am fine!"]
        );
    }

    #[test]
    fn test_terminator_run_stays_attached() {
        let sentences = split("Really?! Yes.");
        assert_eq!(sentences, vec!["Really?!", "Yes."]);
    }

    #[test]
    fn test_trailing_fragment_without_terminator() {
        let sentences = split("I like science. And I like music");
        assert_eq!(sentences, vec!["I like science.", "And I like music"]);
        assert!(!sentences[1].ends_with('.'));
    }

    #[test]
    fn test_lone_punctuation_is_not_a_sentence() {
        assert!(split("...").is_empty());
        assert!(split("?!").is_empty());
    }
}
