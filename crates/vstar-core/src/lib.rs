//! # vstar-core
//!
//! **Emergent signalling speed from an entropic lattice.**
//!
//! `vstar-core` numerically evaluates the emergent signalling speed
//!
//! ```text
//! v_* = sqrt(chi / kappa) / ell_P
//! ```
//!
//! of a discrete information-theoretic lattice model (Shrieve 2025), and
//! estimates its statistical uncertainty with a bootstrap over independently
//! sampled lattice configurations.
//!
//! ## Quick Start
//!
//! ```
//! use vstar_core::{Parameters, bootstrap};
//!
//! let params = Parameters { n: 1024, trials: 12, seed: 42, ..Parameters::default() };
//! let result = bootstrap::run(params).unwrap();
//!
//! assert!(result.v_mean > 0.0);
//! assert_eq!(result.n_trials_used, 12);
//! ```
//!
//! ## Architecture
//!
//! Master stream → per-trial substreams → Lattice Sampler → Rate Estimator → Aggregate
//!
//! Every trial derives its own PCG64 substream from the master stream, in
//! trial index order, so a full run is bit-for-bit reproducible from the seed
//! alone. The aggregator owns the master stream for the run's duration and
//! discards it afterwards; there is no process-wide generator state.
//!
//! Per-trial numeric failures ([`Error::NumericInstability`]) are dropped and
//! counted, never retried; the aggregate carries `n_trials_failed` so a
//! degraded run is always visible to the caller.

pub mod bootstrap;
pub mod error;
pub mod estimator;
pub mod lattice;
pub mod machine;
pub mod params;
pub mod record;
pub mod rng;

pub use bootstrap::AggregateResult;
pub use error::{Error, Result};
pub use estimator::{ELL_P, estimate};
pub use lattice::sample;
pub use machine::{MachineInfo, detect_machine_info};
pub use params::{
    DEFAULT_CHI, DEFAULT_EPS, DEFAULT_KAPPA, DEFAULT_N, DEFAULT_SEED, DEFAULT_TRIALS, Parameters,
};
pub use record::RunRecord;
pub use rng::{MasterStream, Substream};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
