//! Error types for plxdist

use thiserror::Error;

/// plxdist error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration (unknown prior, bad grid bounds, bad scale)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Parallax and uncertainty inputs disagree in length
    #[error("Shape mismatch: {parallax} parallaxes vs {uncertainty} uncertainties")]
    ShapeMismatch {
        /// Number of parallax values supplied.
        parallax: usize,
        /// Number of uncertainty values supplied.
        uncertainty: usize,
    },

    /// Parameter outside its domain (e.g. `sigma_pi <= 0`)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Unnormalized posterior carries no usable mass on the grid
    #[error("Degenerate posterior for source {index}: unnormalized sum = {sum}")]
    Degenerate {
        /// Index of the offending source.
        index: usize,
        /// Sum of the unnormalized posterior over the grid.
        sum: f64,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
