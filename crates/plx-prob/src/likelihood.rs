//! Gaussian parallax likelihood.
//!
//! `p(pi | d, sigma_pi) = N(pi; 1/d, sigma_pi)`, i.e.
//! `(1/sqrt(2π sigma_pi^2)) * exp(-(pi - 1/d)^2 / (2 sigma_pi^2))`.
//!
//! At `d == 0` the true parallax `1/d` diverges and the likelihood takes its
//! limit, `0`. Negative `d` is evaluated by the formula; priors vanish there.

use plx_core::{Error, GridMatrix, Result};

use crate::normal::Kernel;

/// Likelihood of a single parallax `pi` at distance `d`.
pub fn density(pi: f64, d: f64, sigma_pi: f64) -> Result<f64> {
    check_parallax(pi)?;
    let kernel = Kernel::new(sigma_pi)?;
    Ok(eval(&kernel, pi, d))
}

/// Log-likelihood of a single parallax `pi` at distance `d`.
///
/// `-inf` at `d == 0`.
pub fn log_density(pi: f64, d: f64, sigma_pi: f64) -> Result<f64> {
    check_parallax(pi)?;
    if d == 0.0 {
        Kernel::new(sigma_pi)?;
        return Ok(f64::NEG_INFINITY);
    }
    crate::normal::logpdf(pi, d.recip(), sigma_pi)
}

/// Likelihood of one parallax at every grid distance.
pub fn on_grid(pi: f64, grid: &[f64], sigma_pi: f64) -> Result<Vec<f64>> {
    check_parallax(pi)?;
    let kernel = Kernel::new(sigma_pi)?;
    Ok(grid.iter().map(|&d| eval(&kernel, pi, d)).collect())
}

/// Likelihood matrix for `M` sources over `N` grid distances.
///
/// Entry `(i, j)` is source `j` at grid point `i`.
pub fn matrix(pis: &[f64], grid: &[f64], sigmas: &[f64]) -> Result<GridMatrix> {
    validate_measurements(pis, sigmas)?;
    let columns = pis
        .iter()
        .zip(sigmas)
        .map(|(&pi, &sigma)| on_grid(pi, grid, sigma))
        .collect::<Result<Vec<_>>>()?;
    GridMatrix::from_columns(grid.len(), &columns)
}

/// Check a batch of `(pi, sigma_pi)` measurements before any evaluation.
///
/// Lengths must agree and be non-zero, every `pi` finite, every `sigma_pi`
/// finite, `> 0` and not subnormal.
pub fn validate_measurements(pis: &[f64], sigmas: &[f64]) -> Result<()> {
    if pis.len() != sigmas.len() || pis.is_empty() {
        return Err(Error::ShapeMismatch { parallax: pis.len(), uncertainty: sigmas.len() });
    }
    for (j, (&pi, &sigma)) in pis.iter().zip(sigmas).enumerate() {
        if !pi.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "parallax of source {} must be finite, got {}",
                j, pi
            )));
        }
        if !sigma.is_normal() || sigma < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "parallax uncertainty of source {} must be finite, > 0 and not subnormal, got {}",
                j, sigma
            )));
        }
    }
    Ok(())
}

#[inline]
fn eval(kernel: &Kernel, pi: f64, d: f64) -> f64 {
    if d == 0.0 { 0.0 } else { kernel.pdf(pi, d.recip()) }
}

fn check_parallax(pi: f64) -> Result<()> {
    if !pi.is_finite() {
        return Err(Error::InvalidParameter(format!("parallax must be finite, got {}", pi)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_peak_at_inverse_parallax() {
        let sigma = 0.5;
        let peak = density(2.0, 0.5, sigma).unwrap();
        assert_relative_eq!(
            peak,
            1.0 / (2.0 * std::f64::consts::PI * sigma * sigma).sqrt(),
            epsilon = 1e-14
        );
        assert!(peak > density(2.0, 0.45, sigma).unwrap());
        assert!(peak > density(2.0, 0.55, sigma).unwrap());
    }

    #[test]
    fn test_zero_distance_limit() {
        assert_eq!(density(0.5, 0.0, 0.1).unwrap(), 0.0);
        let ll = log_density(0.5, 0.0, 0.1).unwrap();
        assert!(ll.is_infinite() && ll.is_sign_negative());
    }

    #[test]
    fn test_log_density_consistent() {
        for d in [0.5, 0.8, 3.0, 25.0] {
            let p = density(1.2, d, 0.3).unwrap();
            let lp = log_density(1.2, d, 0.3).unwrap();
            assert_relative_eq!(p.ln(), lp, max_relative = 1e-10);
        }
    }

    #[test]
    fn test_grid_matches_scalar() {
        let grid = [0.0, 0.1, 0.5, 1.0, 4.0];
        let v = on_grid(1.1, &grid, 0.2).unwrap();
        for (&d, &l) in grid.iter().zip(&v) {
            assert_eq!(l, density(1.1, d, 0.2).unwrap());
        }
    }

    #[test]
    fn test_matrix_axis_order() {
        let grid = [0.5, 1.0, 2.0];
        let pis = [2.0, 0.5];
        let sigmas = [0.1, 0.3];
        let m = matrix(&pis, &grid, &sigmas).unwrap();
        assert_eq!(m.n_grid(), 3);
        assert_eq!(m.n_sources(), 2);
        for (i, &d) in grid.iter().enumerate() {
            for j in 0..2 {
                assert_eq!(m.get(i, j), density(pis[j], d, sigmas[j]).unwrap());
            }
        }
    }

    #[test]
    fn test_shape_mismatch() {
        let err = matrix(&[1.0, 2.0], &[1.0], &[0.1]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { parallax: 2, uncertainty: 1 }));
        assert!(matches!(matrix(&[], &[1.0], &[]), Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_invalid_uncertainty() {
        assert!(matches!(density(1.0, 1.0, 0.0), Err(Error::InvalidParameter(_))));
        assert!(matches!(on_grid(1.0, &[1.0], -0.2), Err(Error::InvalidParameter(_))));
        assert!(matches!(
            validate_measurements(&[1.0, 1.0], &[0.1, 0.0]),
            Err(Error::InvalidParameter(_))
        ));
        assert!(density(f64::NAN, 1.0, 0.1).is_err());
    }
}
