//! Core traits for plxdist
//!
//! The posterior evaluator is written against [`DistanceDensity`] rather than
//! a concrete prior, so new space-density models plug in without touching
//! the inference code.

/// A density over true distance (kpc), normalized up to a constant.
pub trait DistanceDensity: Send + Sync {
    /// Density at distance `d`. Must be `0` for `d < 0`.
    fn density(&self, d: f64) -> f64;

    /// Density at every grid point.
    fn density_on_grid(&self, grid: &[f64]) -> Vec<f64> {
        grid.iter().map(|&d| self.density(d)).collect()
    }

    /// Short identifier (e.g. "exponential").
    fn name(&self) -> &str;
}
