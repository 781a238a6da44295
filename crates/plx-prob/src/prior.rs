//! Distance priors: the closed set of space-density models and their
//! dispatch.

use std::fmt;
use std::str::FromStr;

use plx_core::{DistanceDensity, Error, Result};
use serde::{Deserialize, Serialize};

/// Default truncation radius of the uniform priors (kpc).
pub const DEFAULT_RLIM: f64 = 30.0;

/// Default scale length of the exponentially decreasing density prior (kpc).
pub const DEFAULT_EDSD_LENGTH: f64 = 1.35;

/// Which space-density model to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorKind {
    /// Flat in distance up to `rlim`.
    UniformDistance,
    /// Constant space density inside a sphere of radius `rlim`.
    UniformDensity,
    /// Exponentially decreasing space density with scale length `L`.
    #[default]
    Exponential,
}

impl PriorKind {
    /// All variants, in declaration order.
    pub const ALL: [PriorKind; 3] =
        [PriorKind::UniformDistance, PriorKind::UniformDensity, PriorKind::Exponential];

    /// Parse from string ("uniform_distance", "uniform_density", "exponential").
    pub fn parse_str(s: &str) -> Result<Self> {
        match s {
            "uniform_distance" => Ok(PriorKind::UniformDistance),
            "uniform_density" => Ok(PriorKind::UniformDensity),
            "exponential" => Ok(PriorKind::Exponential),
            _ => Err(Error::InvalidConfig(format!(
                "unknown prior: '{s}' (expected uniform_distance, uniform_density or exponential)"
            ))),
        }
    }

    /// Canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorKind::UniformDistance => "uniform_distance",
            PriorKind::UniformDensity => "uniform_density",
            PriorKind::Exponential => "exponential",
        }
    }

    /// Scale used when none is given: `rlim` or `L`.
    pub fn default_scale(&self) -> f64 {
        match self {
            PriorKind::UniformDistance | PriorKind::UniformDensity => DEFAULT_RLIM,
            PriorKind::Exponential => DEFAULT_EDSD_LENGTH,
        }
    }

    /// Density at `d` with scale `scale`.
    pub fn pdf(&self, d: f64, scale: f64) -> Result<f64> {
        match self {
            PriorKind::UniformDistance => crate::uniform_distance::pdf(d, scale),
            PriorKind::UniformDensity => crate::uniform_density::pdf(d, scale),
            PriorKind::Exponential => crate::edsd::pdf(d, scale),
        }
    }
}

impl FromStr for PriorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl fmt::Display for PriorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A prior kind bound to a validated scale parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prior {
    kind: PriorKind,
    scale: f64,
}

impl Prior {
    /// Prior of `kind` with scale `scale` (finite, > 0).
    pub fn new(kind: PriorKind, scale: f64) -> Result<Self> {
        if !scale.is_normal() || scale < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "{} prior scale must be finite, > 0 and not subnormal, got {}",
                kind, scale
            )));
        }
        Ok(Self { kind, scale })
    }

    /// Prior of `kind` with its default scale.
    pub fn with_default_scale(kind: PriorKind) -> Self {
        Self { kind, scale: kind.default_scale() }
    }

    /// The model.
    pub fn kind(&self) -> PriorKind {
        self.kind
    }

    /// `rlim` or `L`, depending on the kind.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Default for Prior {
    fn default() -> Self {
        Self::with_default_scale(PriorKind::default())
    }
}

impl DistanceDensity for Prior {
    fn density(&self, d: f64) -> f64 {
        match self.kind {
            PriorKind::UniformDistance => crate::uniform_distance::eval(d, self.scale),
            PriorKind::UniformDensity => crate::uniform_density::eval(d, self.scale),
            PriorKind::Exponential => crate::edsd::eval(d, self.scale),
        }
    }

    fn name(&self) -> &str {
        self.kind.as_str()
    }
}
