//! Normalized distance PDFs and their summary statistics.
//!
//! A [`DistancePdf`] is built once per call: grid, normalized posterior and
//! per-source statistics are computed together, so mean, standard deviation
//! and mode always describe the same posterior on the same grid.
//!
//! Scalar inputs are handled as length-1 sequences and only re-wrapped as
//! scalars on the way out, so `build_distance_pdf(0.5, 0.05, ..)` and
//! `build_distance_pdf(vec![0.5], vec![0.05], ..)` take identical code paths.

use plx_core::{DistanceGrid, DistanceStatistics, Error, GridMatrix, Result, Values};
use plx_prob::Prior;
use rayon::prelude::*;

use crate::config::DistancePdfConfig;
use crate::posterior::posterior_columns;

/// Grid, normalized posterior and statistics for one or many sources.
#[derive(Debug, Clone)]
pub struct DistancePdf {
    grid: DistanceGrid,
    pdf: GridMatrix,
    prior: Prior,
    scalar: bool,
    statistics: Vec<DistanceStatistics>,
}

impl DistancePdf {
    /// Evaluate and normalize the posterior for every `(pi, sigma_pi)` pair.
    ///
    /// Fails with [`Error::InvalidConfig`] before any numeric work if the
    /// configuration is invalid, and with [`Error::Degenerate`] if a source's
    /// posterior has no mass on the grid.
    pub fn build(pi: &Values, sigma_pi: &Values, config: &DistancePdfConfig) -> Result<Self> {
        let prior = config.prior_model()?;
        let grid = config.grid()?;
        log::debug!(
            "distance pdf: grid [{}, {}] x {}, prior={} (scale {})",
            grid.min(),
            grid.max(),
            grid.len(),
            prior.kind(),
            prior.scale()
        );

        let mut columns = posterior_columns(&grid, pi.as_slice(), sigma_pi.as_slice(), &prior)?;

        let sums: Vec<f64> = columns.par_iter().map(|c| c.iter().sum::<f64>()).collect();
        if let Some((index, &sum)) =
            sums.iter().enumerate().find(|&(_, &s)| !(s.is_finite() && s > 0.0))
        {
            log::warn!(
                "Degenerate distance posterior for source {} (pi={}, sigma_pi={}): \
                 unnormalized sum {} on grid [{}, {}]",
                index,
                pi.as_slice()[index],
                sigma_pi.as_slice()[index],
                sum,
                grid.min(),
                grid.max()
            );
            return Err(Error::Degenerate { index, sum });
        }

        let statistics: Vec<DistanceStatistics> = columns
            .par_iter_mut()
            .zip(sums.par_iter())
            .map(|(column, &sum)| {
                column.iter_mut().for_each(|w| *w /= sum);
                summarize(grid.points(), &column[..])
            })
            .collect();

        let pdf = GridMatrix::from_columns(grid.len(), &columns)?;

        Ok(Self { grid, pdf, prior, scalar: pi.is_scalar() && sigma_pi.is_scalar(), statistics })
    }

    /// The distance grid.
    pub fn grid(&self) -> &DistanceGrid {
        &self.grid
    }

    /// Normalized posterior, `n_grid x n_sources`; each column sums to 1.
    pub fn pdf(&self) -> &GridMatrix {
        &self.pdf
    }

    /// Normalized posterior of source `j`. `None` if `j >= n_sources()`.
    pub fn source_pdf(&self, j: usize) -> Option<Vec<f64>> {
        Some(self.pdf.column(j)?.collect())
    }

    /// Prior the posterior was built with.
    pub fn prior(&self) -> &Prior {
        &self.prior
    }

    /// Number of sources.
    pub fn n_sources(&self) -> usize {
        self.statistics.len()
    }

    /// `true` if built from a scalar `(pi, sigma_pi)` pair.
    pub fn is_scalar(&self) -> bool {
        self.scalar
    }

    /// Per-source mean, standard deviation and mode.
    pub fn statistics(&self) -> &[DistanceStatistics] {
        &self.statistics
    }

    /// Mean distance per source.
    pub fn mean(&self) -> Values {
        self.project(|s| s.mean)
    }

    /// Distance standard deviation per source.
    pub fn std_dev(&self) -> Values {
        self.project(|s| s.std_dev)
    }

    /// Modal distance per source (always a grid point).
    pub fn mode(&self) -> Values {
        self.project(|s| s.mode)
    }

    fn project(&self, f: impl Fn(&DistanceStatistics) -> f64) -> Values {
        let v: Vec<f64> = self.statistics.iter().map(f).collect();
        match (self.scalar, v.as_slice()) {
            (true, [x]) => Values::Scalar(*x),
            _ => Values::Array(v),
        }
    }
}

/// Grid-weighted mean, standard deviation and first-occurrence argmax of a
/// normalized column.
fn summarize(grid: &[f64], weights: &[f64]) -> DistanceStatistics {
    let mean: f64 = grid.iter().zip(weights).map(|(&d, &w)| w * d).sum();
    let var: f64 = grid
        .iter()
        .zip(weights)
        .map(|(&d, &w)| {
            let r = d - mean;
            w * r * r
        })
        .sum();

    let mut mode_idx = 0;
    let mut best = weights[0];
    for (i, &w) in weights.iter().enumerate().skip(1) {
        if w > best {
            best = w;
            mode_idx = i;
        }
    }

    DistanceStatistics { mean, std_dev: var.sqrt(), mode: grid[mode_idx] }
}

/// Build the normalized distance PDF for scalar or sequence inputs.
pub fn build_distance_pdf(
    pi: impl Into<Values>,
    sigma_pi: impl Into<Values>,
    config: &DistancePdfConfig,
) -> Result<DistancePdf> {
    DistancePdf::build(&pi.into(), &sigma_pi.into(), config)
}

/// Posterior mean distance (kpc), shaped like `pi`.
pub fn mean_distance(
    pi: impl Into<Values>,
    sigma_pi: impl Into<Values>,
    config: &DistancePdfConfig,
) -> Result<Values> {
    Ok(build_distance_pdf(pi, sigma_pi, config)?.mean())
}

/// Posterior distance standard deviation (kpc), shaped like `pi`.
pub fn distance_std_dev(
    pi: impl Into<Values>,
    sigma_pi: impl Into<Values>,
    config: &DistancePdfConfig,
) -> Result<Values> {
    Ok(build_distance_pdf(pi, sigma_pi, config)?.std_dev())
}

/// Posterior modal distance (kpc), shaped like `pi`.
///
/// Ties resolve to the first (lowest-distance) grid point.
pub fn mode_distance(
    pi: impl Into<Values>,
    sigma_pi: impl Into<Values>,
    config: &DistancePdfConfig,
) -> Result<Values> {
    Ok(build_distance_pdf(pi, sigma_pi, config)?.mode())
}
