//! Entropy-rate signalling speed estimation with a long-range tail cutoff.
//!
//! For one lattice configuration the estimator discards sites whose coupling
//! amplitude falls below the LR tail cutoff `eps`, takes the amplitude-weighted
//! surviving fraction as the configuration's realized code rate, and converts
//! the assumed entropy density into a physical speed:
//!
//! ```text
//! v = sqrt(chi / kappa_hat) / ell_P   [m/s]
//! ```
//!
//! Amplitudes are uniform on `[0, 1)` with mean 1/2, so twice the mean
//! surviving amplitude recovers the encoding fraction: `E[kappa_hat] = kappa`
//! up to the negligible mass the cutoff removes. The amplitude sum is
//! accumulated in site order; no reduction here depends on platform-specific
//! ordering.

use crate::error::{Error, Result};

/// Planck length in meters (CODATA 2018).
pub const ELL_P: f64 = 1.616_255e-35;

/// Estimate the signalling speed for one configuration.
///
/// Monotonically increasing in `chi` for a fixed configuration and cutoff.
/// Lowering `eps` below the smallest surviving amplitude leaves the result
/// unchanged: the cutoff only ever removes tail terms, never reweights them.
pub fn estimate(config: &[f64], chi: f64, eps: f64) -> Result<f64> {
    let mut weight = 0.0;
    for &site in config {
        if site >= eps {
            weight += site;
        }
    }
    if weight <= 0.0 {
        return Err(Error::NumericInstability {
            detail: "no site survived the LR tail cutoff".to_string(),
        });
    }

    let kappa_hat = 2.0 * weight / config.len() as f64;
    let v = (chi / kappa_hat).sqrt() / ELL_P;
    if !v.is_finite() || v <= 0.0 {
        return Err(Error::NumericInstability {
            detail: format!("speed {v} is not a finite positive value"),
        });
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHI: f64 = 0.051;

    #[test]
    fn matches_closed_form_for_known_survivors() {
        // Surviving amplitudes sum to 1.55 over 4 sites: kappa_hat = 0.775.
        let config = [0.5, 0.0, 0.25, 0.8];
        let v = estimate(&config, CHI, 1e-6).unwrap();
        let expected = (CHI / 0.775).sqrt() / ELL_P;
        assert!((v - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn monotone_in_chi() {
        let config = [0.5, 0.0, 0.25, 0.8, 0.1, 0.0];
        let low = estimate(&config, 0.01, 1e-6).unwrap();
        let mid = estimate(&config, 0.051, 1e-6).unwrap();
        let high = estimate(&config, 0.5, 1e-6).unwrap();
        assert!(low < mid && mid < high);
    }

    #[test]
    fn cutoff_stable_below_smallest_survivor() {
        let config = [0.5, 0.0, 0.25, 0.8, 0.001];
        let coarse = estimate(&config, CHI, 1e-6).unwrap();
        let fine = estimate(&config, CHI, 1e-9).unwrap();
        assert_eq!(coarse, fine);
    }

    #[test]
    fn cutoff_removes_tail_terms() {
        // 0.001 survives eps=1e-6 but not eps=0.01, so kappa_hat drops and
        // the estimated speed rises.
        let config = [0.5, 0.0, 0.25, 0.8, 0.001];
        let with_tail = estimate(&config, CHI, 1e-6).unwrap();
        let truncated = estimate(&config, CHI, 0.01).unwrap();
        assert!(truncated > with_tail);
    }

    #[test]
    fn empty_survivor_set_is_unstable() {
        let config = [0.0, 0.0, 0.0];
        assert!(matches!(
            estimate(&config, CHI, 1e-6),
            Err(Error::NumericInstability { .. })
        ));
    }

    #[test]
    fn negative_chi_is_unstable_not_a_panic() {
        let config = [0.5, 0.25];
        assert!(matches!(
            estimate(&config, -1.0, 1e-6),
            Err(Error::NumericInstability { .. })
        ));
    }

    #[test]
    fn result_is_a_physical_speed() {
        let config = [0.5, 0.0, 0.25, 0.8];
        let v = estimate(&config, CHI, 1e-6).unwrap();
        // Order of magnitude: sqrt(chi/kappa) is O(1), so v ~ 1/ell_P.
        assert!(v > 1e33 && v < 1e36);
    }
}
