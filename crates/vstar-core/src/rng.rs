//! Deterministic random streams for the bootstrap loop.
//!
//! RULE: nothing in the pipeline may touch a platform RNG. All randomness
//! flows from one master PCG64 stream seeded from the run seed. Each trial
//! draws a fresh sub-seed from the master, in trial index order, which makes
//! the substream sequence a pure function of `(seed, index)`. A parallel
//! trial loop would produce the same streams.
//!
//! The master stream is owned by the bootstrap aggregator for the run's
//! duration and dropped on return; it is never a process-wide singleton.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64;

/// Scale factor mapping the top 53 bits of a `u64` into `[0, 1)`.
const UNIT_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

/// Master random stream for one full run.
pub struct MasterStream {
    rng: Pcg64,
}

impl MasterStream {
    /// Seed a master stream from the run seed.
    pub fn init(seed: u64) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Derive the next trial substream.
    ///
    /// Draws one sub-seed from the master. Callers must invoke this exactly
    /// once per trial, in trial index order.
    pub fn derive_substream(&mut self) -> Substream {
        let sub_seed = self.rng.next_u64();
        Substream {
            rng: Pcg64::seed_from_u64(sub_seed),
        }
    }
}

/// Independent per-trial random stream.
pub struct Substream {
    rng: Pcg64,
}

impl Substream {
    /// Draw a float in `[0, 1)` from the top 53 bits of the next word.
    ///
    /// Bit-level construction keeps the mapping identical on every platform.
    pub fn next_unit(&mut self) -> f64 {
        (self.rng.next_u64() >> 11) as f64 * UNIT_SCALE
    }

    /// Draw a raw `u64` (full range).
    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }
}
