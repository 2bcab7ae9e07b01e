//! Self-test battery for the v_* estimation pipeline.
//!
//! Each check exercises one contract the core guarantees: full-run
//! determinism, agreement with the closed-form speed, seed sensitivity,
//! cutoff stability, parameter validation, and partial-failure surfacing.
//! Every check returns a [`TestResult`]; the CLI's `--test` mode prints one
//! line per check and exits nonzero unless all pass.
//!
//! The battery runs against small fixed parameters so it completes in
//! milliseconds.

use vstar_core::{Error, Parameters, bootstrap, estimator};

/// Result of a single self-test check.
#[derive(Debug, Clone)]
pub struct TestResult {
    pub name: String,
    pub passed: bool,
    pub details: String,
}

impl TestResult {
    fn pass(name: &str, details: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            details: details.into(),
        }
    }

    fn fail(name: &str, details: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            details: details.into(),
        }
    }
}

/// Fixed parameters the battery runs against: small enough to be fast,
/// large enough that the bootstrap band is tight.
pub fn reference_params() -> Parameters {
    Parameters {
        n: 1024,
        trials: 12,
        seed: 42,
        ..Parameters::default()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Checks
// ═══════════════════════════════════════════════════════════════════════════════

/// Two independent full runs with identical parameters must be bit-identical.
pub fn determinism() -> TestResult {
    let name = "determinism";
    let params = reference_params();
    let (a, b) = match (bootstrap::run(params), bootstrap::run(params)) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(err), _) | (_, Err(err)) => return TestResult::fail(name, err.to_string()),
    };
    if a.v_mean.to_bits() == b.v_mean.to_bits()
        && a.v_std.to_bits() == b.v_std.to_bits()
        && a.n_trials_used == b.n_trials_used
    {
        TestResult::pass(name, format!("two runs bit-identical at seed {}", params.seed))
    } else {
        TestResult::fail(
            name,
            format!("runs diverged: {} vs {}", a.v_mean, b.v_mean),
        )
    }
}

/// The bootstrap mean must sit inside a hand-verified band around the
/// closed form sqrt(chi/kappa)/ell_P.
pub fn reference_value() -> TestResult {
    let name = "reference_value";
    let params = reference_params();
    let result = match bootstrap::run(params) {
        Ok(r) => r,
        Err(err) => return TestResult::fail(name, err.to_string()),
    };
    let closed_form = (params.chi / params.kappa).sqrt() / estimator::ELL_P;
    let rel = (result.v_mean - closed_form).abs() / closed_form;
    // kappa_hat fluctuation at n=1024 over 12 trials stays well under 10%.
    if result.n_trials_used == params.trials && rel < 0.10 {
        TestResult::pass(name, format!("v_mean within {:.2}% of closed form", rel * 100.0))
    } else {
        TestResult::fail(
            name,
            format!(
                "v_mean {} vs closed form {closed_form} (rel {rel:.4}), used {}/{}",
                result.v_mean, result.n_trials_used, params.trials
            ),
        )
    }
}

/// Different seeds must produce different estimates.
pub fn seed_sensitivity() -> TestResult {
    let name = "seed_sensitivity";
    let base = Parameters {
        n: 1024,
        trials: 1,
        ..Parameters::default()
    };
    let a = bootstrap::run(Parameters { seed: 1, ..base });
    let b = bootstrap::run(Parameters { seed: 2, ..base });
    match (a, b) {
        (Ok(a), Ok(b)) if a.v_mean.to_bits() != b.v_mean.to_bits() => {
            TestResult::pass(name, "seeds 1 and 2 give distinct estimates")
        }
        (Ok(a), Ok(_)) => TestResult::fail(name, format!("seeds collided at v = {}", a.v_mean)),
        (Err(err), _) | (_, Err(err)) => TestResult::fail(name, err.to_string()),
    }
}

/// Lowering eps below the point where it truncates anything must not move
/// the estimate.
pub fn cutoff_stability() -> TestResult {
    let name = "cutoff_stability";
    let base = reference_params();
    let coarse = bootstrap::run(Parameters { eps: 1e-6, ..base });
    let fine = bootstrap::run(Parameters { eps: 1e-9, ..base });
    match (coarse, fine) {
        (Ok(coarse), Ok(fine)) => {
            let rel = (coarse.v_mean - fine.v_mean).abs() / fine.v_mean;
            if rel < 1e-9 {
                TestResult::pass(name, "eps 1e-6 and 1e-9 agree to within 1e-9 relative")
            } else {
                TestResult::fail(name, format!("cutoffs disagree: rel diff {rel:e}"))
            }
        }
        (Err(err), _) | (_, Err(err)) => TestResult::fail(name, err.to_string()),
    }
}

/// Every out-of-domain parameter must be rejected with its matching error
/// kind before the trial loop runs.
pub fn validation_rejection() -> TestResult {
    let name = "validation_rejection";
    let base = Parameters::default();

    let cases: Vec<(&str, vstar_core::Result<()>, fn(&Error) -> bool)> = vec![
        (
            "n=0",
            bootstrap::run(Parameters { n: 0, ..base }).map(|_| ()),
            |e| matches!(e, Error::InvalidLatticeParameters { .. }),
        ),
        (
            "kappa=1.5",
            bootstrap::run(Parameters { kappa: 1.5, ..base }).map(|_| ()),
            |e| matches!(e, Error::InvalidLatticeParameters { .. }),
        ),
        (
            "kappa=-0.1",
            bootstrap::run(Parameters { kappa: -0.1, ..base }).map(|_| ()),
            |e| matches!(e, Error::InvalidLatticeParameters { .. }),
        ),
        (
            "chi=0",
            bootstrap::run(Parameters { chi: 0.0, ..base }).map(|_| ()),
            |e| matches!(e, Error::InvalidEntropyDensity { .. }),
        ),
        (
            "eps=1",
            bootstrap::run(Parameters { eps: 1.0, ..base }).map(|_| ()),
            |e| matches!(e, Error::InvalidCutoff { .. }),
        ),
        (
            "trials=0",
            bootstrap::run(Parameters { trials: 0, ..base }).map(|_| ()),
            |e| matches!(e, Error::InvalidTrials { .. }),
        ),
        (
            "seed=-1",
            Parameters::from_raw_seed(base.n, base.kappa, base.chi, base.eps, base.trials, -1)
                .map(|_| ()),
            |e| matches!(e, Error::InvalidSeed { seed: -1 }),
        ),
    ];

    for (label, outcome, expected) in cases {
        match outcome {
            Err(err) if expected(&err) => {}
            Err(err) => {
                return TestResult::fail(name, format!("{label}: wrong error kind: {err}"));
            }
            Ok(_) => return TestResult::fail(name, format!("{label}: accepted")),
        }
    }
    TestResult::pass(name, "all out-of-domain inputs rejected with matching kinds")
}

/// A run where some trials fail must report the reduced trial count instead
/// of silently shrinking the sample.
pub fn partial_failure_surfacing() -> TestResult {
    let name = "partial_failure_surfacing";
    // One site with kappa 0.5 and a 0.5 cutoff survives with p = 0.25, so a
    // 64-trial run contains both outcomes.
    let result = bootstrap::run(Parameters {
        n: 1,
        kappa: 0.5,
        eps: 0.5,
        trials: 64,
        seed: 3,
        ..Parameters::default()
    });
    match result {
        Ok(r) if r.n_trials_failed > 0
            && r.n_trials_used > 0
            && r.n_trials_used + r.n_trials_failed == 64 =>
        {
            TestResult::pass(
                name,
                format!("{} of 64 trials dropped and reported", r.n_trials_failed),
            )
        }
        Ok(r) => TestResult::fail(
            name,
            format!(
                "expected a mixed outcome, got used={} failed={}",
                r.n_trials_used, r.n_trials_failed
            ),
        ),
        Err(err) => TestResult::fail(name, err.to_string()),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Battery runner
// ═══════════════════════════════════════════════════════════════════════════════

/// Run every check in the battery.
pub fn run_all() -> Vec<TestResult> {
    vec![
        determinism(),
        reference_value(),
        seed_sensitivity(),
        cutoff_stability(),
        validation_rejection(),
        partial_failure_surfacing(),
    ]
}

/// True when every check passed.
pub fn all_passed(results: &[TestResult]) -> bool {
    results.iter().all(|r| r.passed)
}
