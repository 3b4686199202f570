//! Deterministic random number generation.
//!
//! RULE: Nothing in the simulation may call any platform RNG.
//! Every draw flows through the single `GameRng` owned by the `Zoo`,
//! seeded once at construction. The day cycle and the command handlers
//! consume draws in a fixed, documented order, so a replay with the
//! same seed and the same command script is bit-identical.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// The simulation's only randomness source.
pub struct GameRng {
    inner: Pcg64Mcg,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Roll a u64 in [0, n).
    pub fn below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// True with probability p percent (p in 0..=100).
    pub fn percent(&mut self, p: u64) -> bool {
        self.below(100) < p
    }

    /// Fair coin flip.
    pub fn coin(&mut self) -> bool {
        self.below(2) == 0
    }

    /// Uniform index into a non-empty slice of the given length.
    pub fn pick_index(&mut self, len: usize) -> usize {
        self.below(len as u64) as usize
    }

    /// Roll a float in [lo, hi).
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Uniform integer in [-span, +span], inclusive on both ends.
    pub fn offset(&mut self, span: i64) -> i64 {
        self.below(2 * span as u64 + 1) as i64 - span
    }

    fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}
