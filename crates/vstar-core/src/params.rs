//! Simulation parameters and domain validation.
//!
//! A [`Parameters`] record is built once at program start from CLI
//! defaults/overrides, validated before any trial runs, and passed by value
//! to every component. It is never mutated.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Defaults used when no CLI overrides are supplied
// ---------------------------------------------------------------------------

/// Default lattice site count.
pub const DEFAULT_N: usize = 65_536;
/// Default code rate k/n.
pub const DEFAULT_KAPPA: f64 = 0.125;
/// Default entropy density.
pub const DEFAULT_CHI: f64 = 0.051;
/// Default LR tail cutoff.
pub const DEFAULT_EPS: f64 = 1e-6;
/// Default bootstrap sample count.
pub const DEFAULT_TRIALS: usize = 1;
/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 0;

/// Container for all simulation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Lattice site count.
    pub n: usize,
    /// Code rate k/n in (0, 1).
    pub kappa: f64,
    /// Entropy density, positive.
    pub chi: f64,
    /// LR tail cutoff in (0, 1).
    pub eps: f64,
    /// Bootstrap sample count.
    pub trials: usize,
    /// Master RNG seed.
    pub seed: u64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            n: DEFAULT_N,
            kappa: DEFAULT_KAPPA,
            chi: DEFAULT_CHI,
            eps: DEFAULT_EPS,
            trials: DEFAULT_TRIALS,
            seed: DEFAULT_SEED,
        }
    }
}

impl Parameters {
    /// Build parameters from raw CLI values.
    ///
    /// The seed arrives signed so that a negative literal is rejected with
    /// [`Error::InvalidSeed`] instead of a generic parse failure. The record
    /// is fully validated before it is returned.
    pub fn from_raw_seed(
        n: usize,
        kappa: f64,
        chi: f64,
        eps: f64,
        trials: usize,
        seed: i64,
    ) -> Result<Self> {
        if seed < 0 {
            return Err(Error::InvalidSeed { seed });
        }
        let params = Self {
            n,
            kappa,
            chi,
            eps,
            trials,
            seed: seed as u64,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check every domain bound. Runs before any trial; a violation here is
    /// fatal to the invocation.
    pub fn validate(&self) -> Result<()> {
        if self.n == 0 || !(self.kappa > 0.0 && self.kappa < 1.0) {
            return Err(Error::InvalidLatticeParameters {
                n: self.n,
                kappa: self.kappa,
            });
        }
        if !self.chi.is_finite() || self.chi <= 0.0 {
            return Err(Error::InvalidEntropyDensity { chi: self.chi });
        }
        if !self.eps.is_finite() || self.eps <= 0.0 || self.eps >= 1.0 {
            return Err(Error::InvalidCutoff { eps: self.eps });
        }
        if self.trials == 0 {
            return Err(Error::InvalidTrials {
                trials: self.trials,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(Parameters::default().validate().is_ok());
    }

    #[test]
    fn zero_sites_rejected() {
        let params = Parameters {
            n: 0,
            ..Parameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidLatticeParameters { n: 0, .. })
        ));
    }

    #[test]
    fn kappa_outside_unit_interval_rejected() {
        for kappa in [1.5, -0.1, 0.0, 1.0, f64::NAN] {
            let params = Parameters {
                kappa,
                ..Parameters::default()
            };
            assert!(
                matches!(
                    params.validate(),
                    Err(Error::InvalidLatticeParameters { .. })
                ),
                "kappa={kappa} should be rejected"
            );
        }
    }

    #[test]
    fn nonpositive_chi_rejected() {
        for chi in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let params = Parameters {
                chi,
                ..Parameters::default()
            };
            assert!(matches!(
                params.validate(),
                Err(Error::InvalidEntropyDensity { .. })
            ));
        }
    }

    #[test]
    fn eps_outside_unit_interval_rejected() {
        for eps in [0.0, 1.0, -1e-6, 2.0, f64::NAN] {
            let params = Parameters {
                eps,
                ..Parameters::default()
            };
            assert!(matches!(params.validate(), Err(Error::InvalidCutoff { .. })));
        }
    }

    #[test]
    fn zero_trials_rejected() {
        let params = Parameters {
            trials: 0,
            ..Parameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidTrials { trials: 0 })
        ));
    }

    #[test]
    fn negative_seed_rejected() {
        let err = Parameters::from_raw_seed(1024, 0.125, 0.051, 1e-6, 1, -1).unwrap_err();
        assert_eq!(err, Error::InvalidSeed { seed: -1 });
    }

    #[test]
    fn raw_seed_roundtrip() {
        let params = Parameters::from_raw_seed(1024, 0.125, 0.051, 1e-6, 12, 42).unwrap();
        assert_eq!(params.seed, 42);
        assert_eq!(params.trials, 12);
    }
}
