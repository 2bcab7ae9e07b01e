//! Error types for the v_* estimation pipeline.
//!
//! Validation errors are fatal and detected before any trial runs.
//! [`Error::NumericInstability`] is a per-trial failure: the bootstrap
//! aggregator drops the trial and counts it rather than aborting the run.

use thiserror::Error;

/// Top-level error type for all operations in the pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Seed outside the generator's supported range (negative CLI input).
    #[error("invalid seed {seed}: must be a non-negative integer")]
    InvalidSeed { seed: i64 },

    /// Lattice site count or code rate outside its domain.
    #[error("invalid lattice parameters n={n}, kappa={kappa}: need n > 0 and kappa in (0, 1)")]
    InvalidLatticeParameters { n: usize, kappa: f64 },

    /// Entropy density outside its domain.
    #[error("invalid entropy density chi={chi}: must be finite and positive")]
    InvalidEntropyDensity { chi: f64 },

    /// LR tail cutoff outside its domain.
    #[error("invalid LR tail cutoff eps={eps}: must lie in (0, 1)")]
    InvalidCutoff { eps: f64 },

    /// Bootstrap trial count outside its domain.
    #[error("invalid trial count {trials}: must be positive")]
    InvalidTrials { trials: usize },

    /// A single trial produced a non-finite or non-positive speed.
    ///
    /// Recovered locally by the aggregator: the trial is dropped and counted.
    #[error("numeric instability: {detail}")]
    NumericInstability { detail: String },

    /// Every trial failed; no aggregate statistic can be produced.
    #[error("aggregation failed: all {failed} trials were numerically unstable")]
    AggregationFailed { failed: usize },
}

/// Type alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;
