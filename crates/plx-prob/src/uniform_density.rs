//! Uniform space-density prior.
//!
//! Constant stellar density inside a sphere of radius `rlim`; the volume
//! element makes the distance density grow as `d^2`:
//! `p(d) = d^2 / rlim^3` for `0 <= d <= rlim`, `0` elsewhere.

use plx_core::{Error, Result};

/// Density at `d` with sphere radius `rlim` (kpc).
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
    if d == 0.0 || !(0.0..=rlim).contains(&d) {
        return 0.0;
    }
    // Scaled form: `rlim^3` underflows for small accepted `rlim`.
    let x = d / rlim;
    x * x / rlim
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_basic_value() {
        assert_eq!(pdf(0.0, 30.0).unwrap(), 0.0);
        assert_relative_eq!(pdf(3.0, 30.0).unwrap(), 9.0 / 27_000.0, epsilon = 1e-15);
        assert_relative_eq!(pdf(30.0, 30.0).unwrap(), 1.0 / 30.0, epsilon = 1e-15);
    }

    #[test]
    fn test_out_of_support() {
        assert_eq!(pdf(-2.0, 30.0).unwrap(), 0.0);
        assert_eq!(pdf(31.0, 30.0).unwrap(), 0.0);
    }

    #[test]
    fn test_tiny_rlim_stays_finite() {
        let rlim = 1e-110;
        assert_eq!(pdf(0.0, rlim).unwrap(), 0.0);
        assert_relative_eq!(pdf(rlim, rlim).unwrap() * rlim, 1.0, max_relative = 1e-12);
        assert_relative_eq!(pdf(0.5 * rlim, rlim).unwrap() * rlim, 0.25, max_relative = 1e-12);
    }

    #[test]
    fn test_invalid_rlim() {
        assert!(pdf(1.0, 0.0).is_err());
        assert!(pdf(1.0, f64::INFINITY).is_err());
    }
}
