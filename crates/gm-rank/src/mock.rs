//! A deterministic stand-in for a real feature-similarity model.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use gm_catalog::Candidate;

use crate::{RankResult, SimilarityScorer};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Mock similarity scorer: uniform confidence in `[0.70, 0.95]`, rounded to
/// three decimals.
///
/// The draw is deterministic per (query seed, candidate id): each candidate
/// gets its own `SmallRng` seeded by `seed XOR (id * MIXING_CONSTANT)`, so
/// scores depend on neither catalog order nor thread scheduling, and a rerun
/// with the same seed reproduces the same ranking.  Production deployments
/// substitute an embedding-distance model behind [`SimilarityScorer`].
#[derive(Copy, Clone, Debug)]
pub struct MockScorer {
    seed: u64,
}

impl MockScorer {
    /// Create a scorer for one query, keyed by that query's seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl SimilarityScorer for MockScorer {
    fn score(&self, candidate: &Candidate) -> RankResult<f64> {
        let mixed = self.seed ^ (candidate.id.0 as u64).wrapping_mul(MIXING_CONSTANT);
        let mut rng = SmallRng::seed_from_u64(mixed);
        let raw: f64 = rng.gen_range(0.70..=0.95);
        // Three decimals; ties between candidates can occur and are resolved
        // by the ranker's stable sort.
        Ok((raw * 1000.0).round() / 1000.0)
    }
}
