//! Canonical result record emitted once per invocation.
//!
//! The record carries the aggregate statistics, the echoed input parameters,
//! and the Planck-length constant the speeds are expressed against. The CLI
//! serializes it to JSON on stdout; nothing else writes to that stream.

use serde::Serialize;

use crate::bootstrap::AggregateResult;
use crate::estimator::ELL_P;
use crate::params::Parameters;

/// Result record for one run.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    /// Echoed input parameters.
    pub params: Parameters,
    /// Planck length in meters.
    pub ell_p_m: f64,
    /// Bootstrap mean of v_*, m/s.
    pub v_star_mean_m_per_s: f64,
    /// Bootstrap sample standard deviation of v_*, m/s.
    pub v_star_std_m_per_s: f64,
    /// Trials that contributed to the statistics.
    pub n_trials_used: usize,
    /// Trials dropped for numeric instability.
    pub n_trials_failed: usize,
}

impl RunRecord {
    /// Package an aggregate result into the emitted record.
    pub fn new(result: &AggregateResult) -> Self {
        Self {
            params: result.params,
            ell_p_m: ELL_P,
            v_star_mean_m_per_s: result.v_mean,
            v_star_std_m_per_s: result.v_std,
            n_trials_used: result.n_trials_used,
            n_trials_failed: result.n_trials_failed,
        }
    }
}
