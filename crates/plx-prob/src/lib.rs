//! Probability building blocks for plxdist.
//!
//! This crate hosts the distance prior library and the parallax likelihood:
//! - isotropic distance priors (uniform distance, uniform space density,
//!   exponentially decreasing space density) and their [`prior::PriorKind`]
//!   dispatch
//! - the Gaussian parallax-given-distance likelihood, in scalar, grid and
//!   matrix shapes
//! - small Normal-distribution helpers

pub mod edsd;
pub mod likelihood;
pub mod normal;
pub mod prior;
pub mod uniform_density;
pub mod uniform_distance;

pub use prior::{DEFAULT_EDSD_LENGTH, DEFAULT_RLIM, Prior, PriorKind};
