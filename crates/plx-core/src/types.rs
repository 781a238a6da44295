//! Common data types for plxdist

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One value or an ordered sequence of values (one per source).
///
/// Every computation runs on the slice view; the scalar variant only records
/// that results should be handed back scalar-shaped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Values {
    /// Single source.
    Scalar(f64),
    /// Many sources, in caller order.
    Array(Vec<f64>),
}

impl Values {
    /// Slice view (length 1 for a scalar).
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Values::Scalar(x) => std::slice::from_ref(x),
            Values::Array(v) => v,
        }
    }

    /// Number of sources.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// `true` for an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// `true` if the caller passed a bare scalar.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Values::Scalar(_))
    }

    /// The scalar value, if scalar-shaped.
    pub fn scalar(&self) -> Option<f64> {
        match self {
            Values::Scalar(x) => Some(*x),
            Values::Array(_) => None,
        }
    }

    /// Owned sequence of values.
    pub fn into_vec(self) -> Vec<f64> {
        match self {
            Values::Scalar(x) => vec![x],
            Values::Array(v) => v,
        }
    }
}

impl From<f64> for Values {
    fn from(x: f64) -> Self {
        Values::Scalar(x)
    }
}

impl From<Vec<f64>> for Values {
    fn from(v: Vec<f64>) -> Self {
        Values::Array(v)
    }
}

impl From<&[f64]> for Values {
    fn from(v: &[f64]) -> Self {
        Values::Array(v.to_vec())
    }
}

impl From<&Vec<f64>> for Values {
    fn from(v: &Vec<f64>) -> Self {
        Values::Array(v.clone())
    }
}

impl<const N: usize> From<[f64; N]> for Values {
    fn from(v: [f64; N]) -> Self {
        Values::Array(v.to_vec())
    }
}

/// Equally spaced distances (kpc) spanning `[min, max]` inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceGrid {
    points: Vec<f64>,
}

impl DistanceGrid {
    /// `n` evenly spaced points from `min` to `max`, both endpoints included.
    ///
    /// Requires finite bounds, `min < max` and `n >= 2`.
    pub fn linspace(min: f64, max: f64, n: usize) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "grid bounds must be finite, got [{}, {}]",
                min, max
            )));
        }
        if min >= max {
            return Err(Error::InvalidConfig(format!(
                "min_dist must be < max_dist, got [{}, {}]",
                min, max
            )));
        }
        if n < 2 {
            return Err(Error::InvalidConfig(format!("resolution must be >= 2, got {}", n)));
        }

        let step = (max - min) / (n - 1) as f64;
        if !step.is_finite() || min + step <= min {
            return Err(Error::InvalidConfig(format!(
                "grid spacing not representable for [{}, {}] with {} points",
                min, max, n
            )));
        }
        let mut points: Vec<f64> = (0..n).map(|i| min + i as f64 * step).collect();
        // Pin the last point so the upper bound is hit exactly.
        points[n - 1] = max;

        if !points.windows(2).all(|w| w[1] > w[0]) {
            return Err(Error::InvalidConfig(format!(
                "grid points not strictly increasing for [{}, {}] with {} points",
                min, max, n
            )));
        }

        Ok(Self { points })
    }

    /// Grid distances in increasing order.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a grid holds at least two points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.points[0]
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    /// Spacing between neighbouring points.
    pub fn step(&self) -> f64 {
        (self.max() - self.min()) / (self.points.len() - 1) as f64
    }
}

/// Dense `n_grid x n_sources` matrix, row-major.
///
/// Entry `(i, j)` is source `j` evaluated at grid point `i`; the distance axis
/// is the row axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridMatrix {
    n_grid: usize,
    n_sources: usize,
    data: Vec<f64>,
}

impl GridMatrix {
    /// Assemble from per-source columns, each of length `n_grid`.
    pub fn from_columns(n_grid: usize, columns: &[Vec<f64>]) -> Result<Self> {
        if let Some((j, c)) = columns.iter().enumerate().find(|(_, c)| c.len() != n_grid) {
            return Err(Error::InvalidParameter(format!(
                "column {} has length {}, expected {}",
                j,
                c.len(),
                n_grid
            )));
        }
        let n_sources = columns.len();
        let mut data = vec![0.0; n_grid * n_sources];
        for (j, column) in columns.iter().enumerate() {
            for (i, &v) in column.iter().enumerate() {
                data[i * n_sources + j] = v;
            }
        }
        Ok(Self { n_grid, n_sources, data })
    }

    /// Number of grid points (rows).
    pub fn n_grid(&self) -> usize {
        self.n_grid
    }

    /// Number of sources (columns).
    pub fn n_sources(&self) -> usize {
        self.n_sources
    }

    /// Entry at grid point `i`, source `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n_sources + j]
    }

    /// All sources at grid point `i`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n_sources..(i + 1) * self.n_sources]
    }

    /// Source `j` along the distance axis. `None` if `j >= n_sources`.
    pub fn column(&self, j: usize) -> Option<impl Iterator<Item = f64> + '_> {
        if j >= self.n_sources {
            return None;
        }
        Some(self.data[j..].iter().step_by(self.n_sources).copied())
    }

    /// Raw row-major storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

/// Posterior summary for a single source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceStatistics {
    /// Grid-weighted mean distance (kpc).
    pub mean: f64,

    /// Grid-weighted standard deviation (kpc).
    pub std_dev: f64,

    /// Grid point of maximum posterior (kpc), first occurrence on ties.
    pub mode: f64,
}
