use std::fmt;

use super::dimension::Unit;
use super::spec::{UnitBehavior, UnitSpec};
use crate::errors::UnitError;

/// A unit reduced to its dimension and mapping onto SI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedUnit {
    pub dim: Unit,
    pub scale: f64,
    pub offset: f64,
    pub behavior: UnitBehavior,
}

impl ResolvedUnit {
    /// Dimensionless, scale 1.
    pub const SCALAR: ResolvedUnit = ResolvedUnit {
        dim: Unit::ONE,
        scale: 1.0,
        offset: 0.0,
        behavior: UnitBehavior::Multiplicative,
    };

    pub fn multiplicative(dim: Unit, scale: f64) -> Self {
        Self {
            dim,
            scale,
            offset: 0.0,
            behavior: UnitBehavior::Multiplicative,
        }
    }

    pub fn is_affine(&self) -> bool {
        self.behavior == UnitBehavior::Affine
    }

    pub fn to_si(&self, value: f64) -> f64 {
        value * self.scale + self.offset
    }

    pub fn from_si(&self, value: f64) -> f64 {
        (value - self.offset) / self.scale
    }
}

impl From<&UnitSpec> for ResolvedUnit {
    fn from(spec: &UnitSpec) -> Self {
        Self {
            dim: spec.dim(),
            scale: spec.scale(),
            offset: spec.offset(),
            behavior: spec.behavior(),
        }
    }
}

impl fmt::Display for ResolvedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.scale, self.dim)?;
        if self.is_affine() {
            write!(f, " + {}", self.offset)?;
        }
        Ok(())
    }
}

/// Convert `value` expressed in `from` into `to`, through SI.
pub fn convert(value: f64, from: &ResolvedUnit, to: &ResolvedUnit) -> Result<f64, UnitError> {
    if !Unit::same_dimensions(from.dim, to.dim) {
        return Err(UnitError::IncompatibleDimensions {
            from: from.dim,
            to: to.dim,
        });
    }
    Ok(to.from_si(from.to_si(value)))
}
