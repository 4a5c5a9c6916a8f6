//! Hashed bag-of-words text embeddings
//!
//! Deterministic embedding with no model download: tokens (and adjacent
//! token bigrams) are FNV-1a hashed into a fixed-dimension vector that is
//! then L2-normalized. Cosine similarity between two such vectors reflects
//! lexical overlap, which stands in for the semantic-match signal.
//!
//! The embedder is held in a process-wide `OnceLock` so it is constructed
//! exactly once and reused across requests.

use crate::error::ScoreResult;
use crate::nlp::Embedder;
use std::sync::OnceLock;
use tracing::debug;

/// Dimension of every embedding vector
pub const EMBEDDING_DIM: usize = 512;

/// Global embedder instance
static GLOBAL_EMBEDDER: OnceLock<HashedBowEmbedder> = OnceLock::new();

/// Get or initialize the global embedder
pub fn global_embedder() -> &'static HashedBowEmbedder {
    GLOBAL_EMBEDDER.get_or_init(HashedBowEmbedder::new)
}

/// Warm the global embedder ahead of the first scoring request
pub fn warm_embedder() {
    let embedder = global_embedder();
    debug!("embedder ready (dim={})", embedder.dim());
}

/// FNV-1a 64-bit hash
fn fnv1a_hash(bytes: &[u8]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
    let mut hash = FNV_OFFSET;
    for &b in bytes {
        hash ^= b as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Scale a vector to unit L2 norm in place; zero vectors are left as-is
pub fn l2_normalize(v: &mut [f32]) {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 1e-10 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}

/// Cosine similarity between two vectors, in `[-1, 1]`
///
/// Returns 0.0 when either vector has near-zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| (x * y) as f64).sum();
    let mag_a: f64 = a.iter().map(|x| (x * x) as f64).sum::<f64>().sqrt();
    let mag_b: f64 = b.iter().map(|x| (x * x) as f64).sum::<f64>().sqrt();

    if mag_a < 1e-10 || mag_b < 1e-10 {
        return 0.0;
    }

    (dot / (mag_a * mag_b)).clamp(-1.0, 1.0)
}

/// Deterministic hashed bag-of-words embedder
#[derive(Debug, Clone)]
pub struct HashedBowEmbedder {
    dim: usize,
}

impl HashedBowEmbedder {
    pub fn new() -> Self {
        Self { dim: EMBEDDING_DIM }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    fn bucket(&self, term: &str) -> usize {
        (fnv1a_hash(term.as_bytes()) % self.dim as u64) as usize
    }
}

impl Default for HashedBowEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl Embedder for HashedBowEmbedder {
    fn embed(&self, text: &str) -> ScoreResult<Vec<f32>> {
        let lower = text.to_lowercase();
        let tokens: Vec<&str> = lower
            .split_whitespace()
            .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|t| !t.is_empty())
            .collect();

        let mut v = vec![0.0f32; self.dim];
        for token in &tokens {
            v[self.bucket(token)] += 1.0;
        }
        // Bigrams add a little word-order sensitivity on top of the bag
        for pair in tokens.windows(2) {
            let bigram = format!("{} {}", pair[0], pair[1]);
            v[self.bucket(&bigram)] += 0.5;
        }

        l2_normalize(&mut v);
        Ok(v)
    }
}
