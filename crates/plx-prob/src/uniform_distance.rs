//! Uniform-distance prior.
//!
//! `p(d) = 1/rlim` for `0 <= d <= rlim`, `0` elsewhere. Only truncates the
//! distance range; no space-density assumption.

use plx_core::{Error, Result};

/// Density at `d` with truncation radius `rlim` (kpc).
pub fn pdf(d: f64, rlim: f64) -> Result<f64> {
    if !rlim.is_normal() || rlim < 0.0 {
        return Err(Error::InvalidParameter(format!(
            "rlim must be finite, > 0 and not subnormal, got {}",
            rlim
        )));
    }
    Ok(eval(d, rlim))
}

/// Density at every point of `grid`.
pub fn pdf_grid(grid: &[f64], rlim: f64) -> Result<Vec<f64>> {
    pdf(0.0, rlim)?;
    Ok(grid.iter().map(|&d| eval(d, rlim)).collect())
}

#[inline]
pub(crate) fn eval(d: f64, rlim: f64) -> f64 {
    if (0.0..=rlim).contains(&d) { 1.0 / rlim } else { 0.0 }
}
