//! # plx-core
//!
//! Shared building blocks for parallax-based distance inference: the error
//! type, value types (distance grids, per-source matrices, summary
//! statistics) and the density trait the posterior evaluator is written
//! against.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::DistanceDensity;
pub use types::{DistanceGrid, DistanceStatistics, GridMatrix, Values};
