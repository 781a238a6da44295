//! Grid and prior configuration for distance-PDF builds.

use plx_core::{DistanceGrid, Error, Result};
use plx_prob::{Prior, PriorKind};
use serde::{Deserialize, Serialize};

/// Configuration for [`crate::build_distance_pdf`] and the statistics helpers.
///
/// JSON form (all fields optional):
///
/// ```json
/// {"min_dist": 0.0, "max_dist": 30.0, "resolution": 10000,
///  "prior": "exponential", "prior_scale": 1.35}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DistancePdfConfig {
    /// Lower grid bound (kpc).
    pub min_dist: f64,
    /// Upper grid bound (kpc).
    pub max_dist: f64,
    /// Number of grid points, both bounds included.
    pub resolution: usize,
    /// Space-density prior.
    pub prior: PriorKind,
    /// `rlim` or `L` (kpc); `None` uses the prior's default.
    pub prior_scale: Option<f64>,
}

impl Default for DistancePdfConfig {
    fn default() -> Self {
        Self {
            min_dist: 0.0,
            max_dist: 30.0,
            resolution: 10_000,
            prior: PriorKind::Exponential,
            prior_scale: None,
        }
    }
}

impl DistancePdfConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::InvalidConfig(format!("config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the grid range.
    pub fn with_range(mut self, min_dist: f64, max_dist: f64) -> Self {
        self.min_dist = min_dist;
        self.max_dist = max_dist;
        self
    }

    /// Set the number of grid points.
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set the prior kind.
    pub fn with_prior(mut self, prior: PriorKind) -> Self {
        self.prior = prior;
        self
    }

    /// Select the prior by name ("uniform_distance", "uniform_density",
    /// "exponential").
    pub fn with_prior_name(self, name: &str) -> Result<Self> {
        Ok(self.with_prior(PriorKind::parse_str(name)?))
    }

    /// Override the prior scale parameter.
    pub fn with_prior_scale(mut self, scale: f64) -> Self {
        self.prior_scale = Some(scale);
        self
    }

    /// Check grid bounds, resolution and prior scale.
    pub fn validate(&self) -> Result<()> {
        self.prior_model()?;
        self.grid()?;
        Ok(())
    }

    /// The configured prior with its effective scale.
    pub fn prior_model(&self) -> Result<Prior> {
        match self.prior_scale {
            Some(scale) => Prior::new(self.prior, scale),
            None => Ok(Prior::with_default_scale(self.prior)),
        }
    }

    /// The configured distance grid.
    pub fn grid(&self) -> Result<DistanceGrid> {
        DistanceGrid::linspace(self.min_dist, self.max_dist, self.resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = DistancePdfConfig::default();
        assert_eq!(c.min_dist, 0.0);
        assert_eq!(c.max_dist, 30.0);
        assert_eq!(c.resolution, 10_000);
        assert_eq!(c.prior, PriorKind::Exponential);
        assert_eq!(c.prior_model().unwrap().scale(), plx_prob::DEFAULT_EDSD_LENGTH);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let c = DistancePdfConfig::from_json(r#"{"prior": "uniform_density", "max_dist": 10}"#)
            .unwrap();
        assert_eq!(c.prior, PriorKind::UniformDensity);
        assert_eq!(c.max_dist, 10.0);
        assert_eq!(c.resolution, 10_000);
        assert_eq!(c.prior_model().unwrap().scale(), plx_prob::DEFAULT_RLIM);
    }

    #[test]
    fn test_from_json_bogus_prior() {
        let err = DistancePdfConfig::from_json(r#"{"prior": "bogus"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_from_json_rejects_unknown_field() {
        assert!(DistancePdfConfig::from_json(r#"{"resolutoin": 10}"#).is_err());
    }

    #[test]
    fn test_from_json_validates() {
        let err = DistancePdfConfig::from_json(r#"{"min_dist": 5, "max_dist": 1}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        let err = DistancePdfConfig::from_json(r#"{"prior_scale": -1.0}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_builders() {
        let c = DistancePdfConfig::default()
            .with_range(0.01, 5.0)
            .with_resolution(500)
            .with_prior_name("uniform_distance")
            .unwrap()
            .with_prior_scale(5.0);
        let grid = c.grid().unwrap();
        assert_eq!(grid.len(), 500);
        assert_eq!(grid.min(), 0.01);
        let prior = c.prior_model().unwrap();
        assert_eq!(prior.kind(), PriorKind::UniformDistance);
        assert_eq!(prior.scale(), 5.0);

        assert!(DistancePdfConfig::default().with_prior_name("bogus").is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let c = DistancePdfConfig::default().with_prior_scale(1.0);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(DistancePdfConfig::from_json(&json).unwrap(), c);
    }
}
