//! # plx-inference
//!
//! Bayesian distance inference from parallaxes.
//!
//! This crate provides:
//! - the unnormalized posterior `prior(d) * likelihood(pi | d)` on a
//!   distance grid, for one or many sources
//! - normalized distance PDFs with mean, standard deviation and mode
//!   derived from a single evaluation
//!
//! ## Architecture
//!
//! The posterior is written against the `DistanceDensity` trait from
//! plx-core; the concrete priors live in plx-prob.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Grid and prior configuration.
pub mod config;
/// Normalized distance PDFs and summary statistics.
pub mod distance_pdf;
/// Unnormalized posterior over a distance grid.
pub mod posterior;

pub use config::DistancePdfConfig;
pub use distance_pdf::{
    DistancePdf, build_distance_pdf, distance_std_dev, mean_distance, mode_distance,
};
pub use plx_core::{DistanceGrid, DistanceStatistics, Error, GridMatrix, Result, Values};
pub use plx_prob::{Prior, PriorKind};
pub use posterior::{posterior, posterior_on_grid, posterior_with_kind_name};
