//! Salutation scorer
//!
//! Tiered phrase matching over the lowercased transcript. Tiers are
//! checked in priority order and the highest matching tier wins; tier
//! scores never stack. Matching is substring containment, so "hi" matches
//! inside a longer word too.

use tracing::debug;

pub const MAX_POINTS: u32 = 5;

/// One salutation tier: any phrase present awards the tier's points
#[derive(Debug, Clone, Copy)]
pub struct SalutationTier {
    pub label: &'static str,
    pub phrases: &'static [&'static str],
    pub points: u32,
}

/// Tiers in priority order, best first
pub const SALUTATION_TIERS: &[SalutationTier] = &[
    SalutationTier {
        label: "enthusiastic",
        phrases: &["i am excited", "feeling great", "thrilled to introduce"],
        points: 5,
    },
    SalutationTier {
        label: "formal",
        phrases: &[
            "good morning",
            "good afternoon",
            "good evening",
            "good day",
            "hello everyone",
        ],
        points: 4,
    },
    SalutationTier {
        label: "plain",
        phrases: &["hi", "hello"],
        points: 2,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalutationOutcome {
    pub score: u32,
    /// Label of the winning tier, if any
    pub tier: Option<&'static str>,
}

/// Score the opening salutation of a transcript
pub fn score_salutation(text: &str) -> SalutationOutcome {
    let lower = text.to_lowercase();
    for tier in SALUTATION_TIERS {
        if tier.phrases.iter().any(|p| lower.contains(p)) {
            debug!(tier = tier.label, points = tier.points, "salutation matched");
            return SalutationOutcome {
                score: tier.points,
                tier: Some(tier.label),
            };
        }
    }
    SalutationOutcome {
        score: 0,
        tier: None,
    }
}
