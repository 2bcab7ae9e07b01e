//! Bootstrap aggregation over independent lattice trials.
//!
//! The aggregator owns the run's master stream. For each trial it derives a
//! substream (in trial index order, the reproducibility contract), samples a
//! configuration, and estimates a speed. Unstable trials are dropped and
//! counted; a run where every trial fails is itself a failure.

use log::debug;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::params::Parameters;
use crate::rng::MasterStream;
use crate::{estimator, lattice};

/// Aggregate statistics over the successful trials of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    /// Arithmetic mean of the successful trial estimates, m/s.
    pub v_mean: f64,
    /// Sample standard deviation (ddof = 1 when more than one trial), m/s.
    pub v_std: f64,
    /// Count of successful trials.
    pub n_trials_used: usize,
    /// Count of dropped trials.
    pub n_trials_failed: usize,
    /// Echo of the input parameters.
    pub params: Parameters,
}

/// Run the full sample-and-estimate pipeline `params.trials` times.
///
/// Validates parameters before any trial runs. Per-trial
/// [`Error::NumericInstability`] is recovered here: dropped, counted, never
/// retried (the failure is deterministic for the trial's substream). Fails
/// with [`Error::AggregationFailed`] only when zero trials succeed.
pub fn run(params: Parameters) -> Result<AggregateResult> {
    params.validate()?;

    let mut master = MasterStream::init(params.seed);
    let mut estimates = Vec::with_capacity(params.trials);
    let mut failed = 0usize;

    for trial in 0..params.trials {
        let mut stream = master.derive_substream();
        let config = lattice::sample(&mut stream, params.n, params.kappa)?;
        match estimator::estimate(&config, params.chi, params.eps) {
            Ok(v) => estimates.push(v),
            Err(err) => {
                debug!("trial {trial} dropped: {err}");
                failed += 1;
            }
        }
    }

    if estimates.is_empty() {
        return Err(Error::AggregationFailed { failed });
    }

    let v_mean = mean(&estimates);
    Ok(AggregateResult {
        v_mean,
        v_std: sample_std(&estimates, v_mean),
        n_trials_used: estimates.len(),
        n_trials_failed: failed,
        params,
    })
}

/// Arithmetic mean, summed in trial order.
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation with ddof = 1; 0.0 for a single value.
fn sample_std(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (ss / (values.len() - 1) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_params() -> Parameters {
        Parameters {
            n: 1024,
            trials: 12,
            seed: 42,
            ..Parameters::default()
        }
    }

    #[test]
    fn full_run_is_bit_identical() {
        let a = run(small_params()).unwrap();
        let b = run(small_params()).unwrap();
        assert_eq!(a.v_mean.to_bits(), b.v_mean.to_bits());
        assert_eq!(a.v_std.to_bits(), b.v_std.to_bits());
        assert_eq!(a.n_trials_used, b.n_trials_used);
    }

    #[test]
    fn seed_changes_the_estimate() {
        let base = Parameters {
            n: 1024,
            trials: 1,
            ..Parameters::default()
        };
        let a = run(Parameters { seed: 1, ..base }).unwrap();
        let b = run(Parameters { seed: 2, ..base }).unwrap();
        assert_ne!(a.v_mean.to_bits(), b.v_mean.to_bits());
    }

    #[test]
    fn end_to_end_reference_run() {
        let result = run(small_params()).unwrap();
        assert!(result.v_mean.is_finite() && result.v_mean > 0.0);
        assert!(result.v_std.is_finite() && result.v_std >= 0.0);
        assert_eq!(result.n_trials_used, 12);
        assert_eq!(result.n_trials_failed, 0);
        // Centered on the closed form sqrt(chi/kappa)/ell_P ~ 3.95e34 m/s;
        // kappa_hat fluctuation at n=1024 keeps the mean well inside 10%.
        let closed_form = (0.051f64 / 0.125).sqrt() / estimator::ELL_P;
        assert!((result.v_mean - closed_form).abs() / closed_form < 0.10);
    }

    #[test]
    fn single_trial_has_zero_std() {
        let result = run(Parameters {
            n: 1024,
            trials: 1,
            seed: 5,
            ..Parameters::default()
        })
        .unwrap();
        assert_eq!(result.v_std, 0.0);
        assert_eq!(result.n_trials_used, 1);
    }

    #[test]
    fn std_stays_finite_as_trials_grow() {
        for trials in [1, 4, 16, 64] {
            let result = run(Parameters {
                n: 512,
                trials,
                seed: 11,
                ..Parameters::default()
            })
            .unwrap();
            assert!(result.v_std.is_finite());
            // The bootstrap spread never diverges; per-trial scatter sits in
            // the few-percent range of the mean.
            assert!(result.v_std < result.v_mean);
            assert_eq!(result.n_trials_used, trials);
        }
    }

    #[test]
    fn partial_failure_is_surfaced_not_hidden() {
        // One site, kappa 0.5, cutoff 0.5: a trial survives only when its
        // site is active AND its amplitude clears the cutoff (p = 0.25), so
        // over 64 trials both outcomes occur.
        let result = run(Parameters {
            n: 1,
            kappa: 0.5,
            eps: 0.5,
            trials: 64,
            seed: 3,
            ..Parameters::default()
        })
        .unwrap();
        assert!(result.n_trials_failed > 0);
        assert!(result.n_trials_used > 0);
        assert!(result.n_trials_used < 64);
        assert_eq!(result.n_trials_used + result.n_trials_failed, 64);
    }

    #[test]
    fn all_trials_failing_fails_the_run() {
        // Cutoff just below 1.0: amplitudes live in [0, 1), so survival
        // requires the top 52-bit draw, which never happens in practice.
        let err = run(Parameters {
            n: 8,
            eps: 1.0 - f64::EPSILON,
            trials: 3,
            seed: 0,
            ..Parameters::default()
        })
        .unwrap_err();
        assert_eq!(err, Error::AggregationFailed { failed: 3 });
    }

    #[test]
    fn validation_errors_never_reach_the_trial_loop() {
        let base = Parameters::default();
        assert!(matches!(
            run(Parameters { n: 0, ..base }),
            Err(Error::InvalidLatticeParameters { .. })
        ));
        assert!(matches!(
            run(Parameters { kappa: 1.5, ..base }),
            Err(Error::InvalidLatticeParameters { .. })
        ));
        assert!(matches!(
            run(Parameters { chi: -0.1, ..base }),
            Err(Error::InvalidEntropyDensity { .. })
        ));
        assert!(matches!(
            run(Parameters { eps: 1.0, ..base }),
            Err(Error::InvalidCutoff { .. })
        ));
        assert!(matches!(
            run(Parameters { trials: 0, ..base }),
            Err(Error::InvalidTrials { .. })
        ));
    }

    #[test]
    fn sample_std_helpers() {
        assert_eq!(sample_std(&[3.0], 3.0), 0.0);
        let values = [1.0, 2.0, 3.0, 4.0];
        let m = mean(&values);
        assert_eq!(m, 2.5);
        // Sample variance of 1..4 is 5/3.
        assert!((sample_std(&values, m) - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }
}
