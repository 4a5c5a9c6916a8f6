//! Keyword coverage scorer
//!
//! Two additive check lists against the lowercased transcript:
//! must-have content (5 checks x 4 points) and good-to-have content
//! (5 checks x 2 points). Each check fires at most once no matter how
//! often its phrases repeat. Matched labels are reported in
//! check-definition order for feedback display.

use tracing::debug;

pub const MAX_POINTS: u32 = 30;

/// A single keyword check
///
/// Fires when any `any_of` phrase is present and every `required` phrase
/// is also present. Most checks leave `required` empty.
#[derive(Debug, Clone, Copy)]
pub struct KeywordCheck {
    pub label: &'static str,
    pub any_of: &'static [&'static str],
    pub required: &'static [&'static str],
    pub points: u32,
}

impl KeywordCheck {
    fn matches(&self, lower: &str) -> bool {
        self.any_of.iter().any(|p| lower.contains(p))
            && self.required.iter().all(|p| lower.contains(p))
    }
}

/// Must-have content, 4 points each
pub const MUST_HAVE: &[KeywordCheck] = &[
    KeywordCheck {
        label: "name",
        any_of: &["myself", "i am", "name"],
        required: &[],
        points: 4,
    },
    KeywordCheck {
        label: "age",
        any_of: &["10", "11", "12", "13", "14", "15", "16", "17", "18", "19"],
        required: &[],
        points: 4,
    },
    KeywordCheck {
        label: "class/school",
        any_of: &["class", "grade", "section", "school"],
        required: &[],
        points: 4,
    },
    KeywordCheck {
        label: "family",
        any_of: &["family"],
        required: &[],
        points: 4,
    },
    KeywordCheck {
        label: "hobbies/interests",
        any_of: &[
            "play",
            "cricket",
            "hobb",
            "interest",
            "like to",
            "enjoy",
            "free time",
        ],
        required: &[],
        points: 4,
    },
];

/// Good-to-have content, 2 points each
pub const GOOD_TO_HAVE: &[KeywordCheck] = &[
    KeywordCheck {
        label: "about family",
        any_of: &["kind heart", "soft spoken"],
        required: &[],
        points: 2,
    },
    KeywordCheck {
        label: "origin",
        any_of: &["i am from", "parents are from"],
        required: &["from"],
        points: 2,
    },
    KeywordCheck {
        label: "goal/ambition",
        any_of: &["science", "explore", "discover", "improve lives"],
        required: &[],
        points: 2,
    },
    KeywordCheck {
        label: "fun fact / unique",
        any_of: &["mirror", "stole", "fun fact"],
        required: &[],
        points: 2,
    },
    KeywordCheck {
        label: "strength/achievement",
        any_of: &["strength", "achievement", "improve the lives"],
        required: &[],
        points: 2,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordOutcome {
    pub score: u32,
    /// Labels of matched must-have checks, definition order
    pub must_found: Vec<&'static str>,
    /// Labels of matched good-to-have checks, definition order
    pub good_found: Vec<&'static str>,
}

/// Score keyword coverage over the lowercased transcript
pub fn score_keywords(lower: &str) -> KeywordOutcome {
    let mut score = 0;
    let mut must_found = Vec::new();
    let mut good_found = Vec::new();

    for check in MUST_HAVE {
        if check.matches(lower) {
            score += check.points;
            must_found.push(check.label);
        }
    }
    for check in GOOD_TO_HAVE {
        if check.matches(lower) {
            score += check.points;
            good_found.push(check.label);
        }
    }

    debug!(score, ?must_found, ?good_found, "keyword coverage");
    KeywordOutcome {
        score,
        must_found,
        good_found,
    }
}
