//! Synthetic lattice configuration sampling.
//!
//! One configuration is an ordered sequence of `n` site values. Each site is
//! independently active with probability `kappa` (the code-rate k/n encoding
//! fraction); an active site carries a coupling amplitude in `[0, 1)`, an
//! inactive site carries `0.0`.

use crate::error::{Error, Result};
use crate::rng::Substream;

/// Sample one lattice configuration of exactly `n` sites.
///
/// Consumes exactly `2n` draws from `stream` (one activity draw and one
/// amplitude draw per site, the amplitude drawn unconditionally), so repeated
/// calls with fresh substreams never interfere with each other's draw
/// positions.
pub fn sample(stream: &mut Substream, n: usize, kappa: f64) -> Result<Vec<f64>> {
    if n == 0 || !(kappa > 0.0 && kappa < 1.0) {
        return Err(Error::InvalidLatticeParameters { n, kappa });
    }

    let mut sites = Vec::with_capacity(n);
    for _ in 0..n {
        let activity = stream.next_unit();
        let amplitude = stream.next_unit();
        sites.push(if activity < kappa { amplitude } else { 0.0 });
    }
    Ok(sites)
}
