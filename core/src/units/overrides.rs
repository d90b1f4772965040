//! Session overrides read from JSON.
//!
//! ```json
//! {
//!   "units": [
//!     { "symbol": "kip", "name": "kip", "quantity": "force", "standard": "US",
//!       "dimension": { "length": 1, "mass": 1, "time": -2 },
//!       "scale": 4448.2216152605, "aliases": ["kips"] }
//!   ],
//!   "aliases": { "klbf": "kip" }
//! }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use super::dimension::Unit;
use super::registry::UnitRegistry;
use super::spec::{UnitBehavior, UnitSpec, UnitStandard};
use crate::errors::UnitError;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverrideFile {
    pub units: Vec<UnitDefinition>,
    pub aliases: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitDefinition {
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub standard: UnitStandard,
    #[serde(default)]
    pub behavior: UnitBehavior,
    #[serde(default)]
    pub dimension: DimensionDef,
    pub scale: f64,
    #[serde(default)]
    pub offset: f64,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Base exponents by name; omitted ones are zero.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DimensionDef {
    pub length: i64,
    pub mass: i64,
    pub time: i64,
    pub current: i64,
    pub temperature: i64,
    pub substance: i64,
    pub luminosity: i64,
}

impl DimensionDef {
    pub fn to_unit(self) -> Result<Unit, UnitError> {
        Unit::try_new([
            self.length,
            self.mass,
            self.time,
            self.current,
            self.temperature,
            self.substance,
            self.luminosity,
        ])
    }
}

impl UnitDefinition {
    pub fn into_spec(self) -> Result<UnitSpec, UnitError> {
        let invalid = |reason| UnitError::InvalidDefinition {
            symbol: self.symbol.clone(),
            reason,
        };

        if self.symbol.trim().is_empty() {
            return Err(invalid("symbol is empty"));
        }
        if !self.scale.is_finite() || self.scale == 0.0 {
            return Err(invalid("scale must be finite and non-zero"));
        }
        if !self.offset.is_finite() {
            return Err(invalid("offset must be finite"));
        }
        if self.offset != 0.0 && self.behavior == UnitBehavior::Multiplicative {
            return Err(invalid("only affine units may have an offset"));
        }

        let dim = self.dimension.to_unit()?;
        let name = self.name.as_deref().unwrap_or(&self.symbol);
        let spec = match self.behavior {
            UnitBehavior::Multiplicative => UnitSpec::multiplicative(
                self.standard,
                &self.quantity,
                name,
                &self.symbol,
                dim,
                self.scale,
            ),
            UnitBehavior::Affine => UnitSpec::affine(
                self.standard,
                &self.quantity,
                name,
                &self.symbol,
                dim,
                self.scale,
                self.offset,
            ),
        };
        Ok(spec.with_aliases(self.aliases))
    }
}

impl UnitRegistry {
    /// Apply every definition and alias in `text` as session overrides and
    /// return how many entries were applied. Either the whole file applies or
    /// the overrides are left exactly as they were.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = text.len()))]
    pub fn load_overrides_json(&mut self, text: &str) -> Result<usize, UnitError> {
        let file: OverrideFile = serde_json::from_str(text)?;
        let snapshot = self.snapshot_overrides();

        match self.apply_overrides(file) {
            Ok(applied) => {
                tracing::debug!(applied, "override file applied");
                Ok(applied)
            }
            Err(err) => {
                tracing::debug!(error = %err, "override file rejected");
                self.restore_overrides(snapshot);
                Err(err)
            }
        }
    }

    fn apply_overrides(&mut self, file: OverrideFile) -> Result<usize, UnitError> {
        let mut applied = 0;
        for definition in file.units {
            self.override_unit(definition.into_spec()?, true)?;
            applied += 1;
        }
        for (alias, canonical) in &file.aliases {
            self.override_alias(alias, canonical)?;
            applied += 1;
        }
        Ok(applied)
    }
}
