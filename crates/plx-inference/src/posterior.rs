//! Unnormalized distance posterior.
//!
//! `posterior(d) = prior(d) * likelihood(pi | d, sigma_pi)` evaluated on a
//! [`DistanceGrid`]. The prior depends only on distance, so it is evaluated
//! once per grid and shared by every source.

use plx_core::{DistanceDensity, DistanceGrid, GridMatrix, Result};
use plx_prob::likelihood;
use plx_prob::{Prior, PriorKind};
use rayon::prelude::*;

/// Unnormalized posterior of a single source over `grid`.
pub fn posterior_on_grid<P>(
    grid: &DistanceGrid,
    pi: f64,
    sigma_pi: f64,
    prior: &P,
) -> Result<Vec<f64>>
where
    P: DistanceDensity + ?Sized,
{
    let prior_values = prior.density_on_grid(grid.points());
    source_column(grid, &prior_values, pi, sigma_pi)
}

/// Unnormalized posterior matrix for many sources.
///
/// Entry `(i, j)` is source `j` at grid point `i`.
pub fn posterior<P>(
    grid: &DistanceGrid,
    pis: &[f64],
    sigmas: &[f64],
    prior: &P,
) -> Result<GridMatrix>
where
    P: DistanceDensity + ?Sized,
{
    let columns = posterior_columns(grid, pis, sigmas, prior)?;
    GridMatrix::from_columns(grid.len(), &columns)
}

/// Like [`posterior`], with the prior selected by name.
///
/// The name (and scale, if given) are checked before any numeric work;
/// `None` uses the kind's default scale.
pub fn posterior_with_kind_name(
    grid: &DistanceGrid,
    pis: &[f64],
    sigmas: &[f64],
    prior_name: &str,
    prior_scale: Option<f64>,
) -> Result<GridMatrix> {
    let kind = PriorKind::parse_str(prior_name)?;
    let prior = match prior_scale {
        Some(scale) => Prior::new(kind, scale)?,
        None => Prior::with_default_scale(kind),
    };
    posterior(grid, pis, sigmas, &prior)
}

/// One unnormalized posterior column per source, sources evaluated in
/// parallel.
pub(crate) fn posterior_columns<P>(
    grid: &DistanceGrid,
    pis: &[f64],
    sigmas: &[f64],
    prior: &P,
) -> Result<Vec<Vec<f64>>>
where
    P: DistanceDensity + ?Sized,
{
    likelihood::validate_measurements(pis, sigmas)?;

    let prior_values = prior.density_on_grid(grid.points());
    log::debug!(
        "posterior: {} sources x {} grid points on [{}, {}], prior={}",
        pis.len(),
        grid.len(),
        grid.min(),
        grid.max(),
        prior.name()
    );

    pis.par_iter()
        .zip(sigmas.par_iter())
        .map(|(&pi, &sigma)| source_column(grid, &prior_values, pi, sigma))
        .collect()
}

fn source_column(
    grid: &DistanceGrid,
    prior_values: &[f64],
    pi: f64,
    sigma_pi: f64,
) -> Result<Vec<f64>> {
    let lik = likelihood::on_grid(pi, grid.points(), sigma_pi)?;
    Ok(prior_values.iter().zip(lik).map(|(&p, l)| p * l).collect())
}
