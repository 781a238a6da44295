//! Exponentially decreasing space density (EDSD) prior.
//!
//! `p(d) = d^2 exp(-d/L) / (2 L^3)` for `d >= 0`, `0` otherwise. This is a
//! Gamma(3, L) density, so it integrates to one over `[0, inf)`.

use plx_core::{Error, Result};

/// Density at `d` with scale length `length` (kpc).
pub fn pdf(d: f64, length: f64) -> Result<f64> {
    if !length.is_normal() || length < 0.0 {
        return Err(Error::InvalidParameter(format!(
            "length scale must be finite, > 0 and not subnormal, got {}",
            length
        )));
    }
    Ok(eval(d, length))
}

/// Density at every point of `grid`.
pub fn pdf_grid(grid: &[f64], length: f64) -> Result<Vec<f64>> {
    pdf(0.0, length)?;
    Ok(grid.iter().map(|&d| eval(d, length)).collect())
}

#[inline]
pub(crate) fn eval(d: f64, length: f64) -> f64 {
    if d <= 0.0 || !d.is_finite() {
        return 0.0;
    }
    // Scaled form: `L^3` underflows for small `L`, and `x^2` may overflow
    // where `exp(-x)` already vanishes.
    let x = d / length;
    let y = x * (-0.5 * x).exp();
    y * y / (2.0 * length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_basic_value() {
        let expected = 4.0 * (-2.0f64).exp() / 2.0;
        assert_relative_eq!(pdf(2.0, 1.0).unwrap(), expected, epsilon = 1e-15);
    }

    #[test]
    fn test_origin_and_tail_are_zero() {
        assert_eq!(pdf(0.0, 1.35).unwrap(), 0.0);
        assert_eq!(pdf(f64::INFINITY, 1.35).unwrap(), 0.0);
        assert_eq!(pdf(-0.5, 1.35).unwrap(), 0.0);
    }

    #[test]
    fn test_peak_at_two_lengths() {
        let l = 1.35;
        let peak = pdf(2.0 * l, l).unwrap();
        assert!(peak > pdf(2.0 * l - 0.01, l).unwrap());
        assert!(peak > pdf(2.0 * l + 0.01, l).unwrap());
    }

    #[test]
    fn test_tiny_length_stays_finite() {
        let l = 1e-110;
        assert_eq!(pdf(0.0, l).unwrap(), 0.0);
        let at_peak = pdf(2.0 * l, l).unwrap();
        assert!(at_peak.is_finite() && at_peak > 0.0);
        assert_relative_eq!(at_peak * l, 2.0 * (-2.0f64).exp(), max_relative = 1e-12);
        assert_eq!(pdf(1.0, l).unwrap(), 0.0);
        assert_eq!(pdf(30.0, 1e-300).unwrap(), 0.0);
    }

    #[test]
    fn test_invalid_length() {
        assert!(pdf(1.0, 0.0).is_err());
        assert!(pdf_grid(&[1.0], -1.0).is_err());
        assert!(pdf(1.0, 1e-320).is_err());
    }
}
