//! Normal distribution utilities.

use plx_core::{Error, Result};

/// Natural log of `sqrt(2π)`.
const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_7;

/// Log-PDF of a Normal distribution `N(mu, sigma)` at `x`.
///
/// `log p(x) = -0.5 * ((x-mu)/sigma)^2 - ln(sigma) - ln(sqrt(2π))`
pub fn logpdf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    check_sigma(sigma)?;
    let z = (x - mu) / sigma;
    Ok(-0.5 * z * z - sigma.ln() - LN_SQRT_2PI)
}

/// PDF of a Normal distribution `N(mu, sigma)` at `x`.
pub fn pdf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    Ok(Kernel::new(sigma)?.pdf(x, mu))
}

/// Normal PDF with a fixed `sigma`, constants hoisted out of the hot loop.
///
/// `p(x) = (1/(sigma sqrt(2π))) * exp(-0.5 * ((x-mu)/sigma)^2)`
///
/// Works on `z = (x-mu)/sigma` rather than `sigma^2`, which underflows for
/// `sigma` below ~1e-154.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    norm: f64,
    inv_sigma: f64,
}

impl Kernel {
    /// Kernel for standard deviation `sigma` (finite, > 0, not subnormal).
    pub fn new(sigma: f64) -> Result<Self> {
        check_sigma(sigma)?;
        Ok(Self {
            norm: 1.0 / (sigma * (2.0 * std::f64::consts::PI).sqrt()),
            inv_sigma: sigma.recip(),
        })
    }

    /// Density at `x` for mean `mu`.
    #[inline]
    pub fn pdf(&self, x: f64, mu: f64) -> f64 {
        let z = (x - mu) * self.inv_sigma;
        self.norm * (-0.5 * z * z).exp()
    }
}

fn check_sigma(sigma: f64) -> Result<()> {
    if !sigma.is_normal() || sigma < 0.0 {
        return Err(Error::InvalidParameter(format!(
            "sigma must be finite, > 0 and not subnormal, got {}",
            sigma
        )));
    }
    Ok(())
}
