use std::fmt;

use serde::Deserialize;

use super::dimension::Unit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum UnitStandard {
    #[default]
    #[serde(rename = "SI")]
    Si,
    #[serde(rename = "US")]
    Us,
    Imperial,
}

impl fmt::Display for UnitStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnitStandard::Si => "SI",
            UnitStandard::Us => "US",
            UnitStandard::Imperial => "Imperial",
        })
    }
}

/// How values map onto the SI scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitBehavior {
    /// `si = value * scale`
    #[default]
    Multiplicative,
    /// `si = value * scale + offset`, for non-ratio scales such as °C.
    Affine,
}

/// A decimal SI prefix such as kilo (`k`, 1e3).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prefix {
    pub name: &'static str,
    pub symbol: &'static str,
    pub factor: f64,
    pub exponent: i8,
}

impl Prefix {
    pub const fn new(name: &'static str, symbol: &'static str, factor: f64, exponent: i8) -> Self {
        Self {
            name,
            symbol,
            factor,
            exponent,
        }
    }

    /// The empty prefix (factor 1).
    pub fn is_identity(&self) -> bool {
        self.exponent == 0
    }
}

/// Declarative definition of one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitSpec {
    standard: UnitStandard,
    behavior: UnitBehavior,
    quantity: String,
    name: String,
    symbol: String,
    dim: Unit,
    scale: f64,
    offset: f64,
    prefixable: bool,
    aliases: Vec<String>,
}

impl UnitSpec {
    pub fn multiplicative(
        standard: UnitStandard,
        quantity: &str,
        name: &str,
        symbol: &str,
        dim: Unit,
        scale: f64,
    ) -> Self {
        Self {
            standard,
            behavior: UnitBehavior::Multiplicative,
            quantity: quantity.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            dim,
            scale,
            offset: 0.0,
            prefixable: false,
            aliases: Vec::new(),
        }
    }

    pub fn affine(
        standard: UnitStandard,
        quantity: &str,
        name: &str,
        symbol: &str,
        dim: Unit,
        scale: f64,
        offset: f64,
    ) -> Self {
        Self {
            behavior: UnitBehavior::Affine,
            offset,
            ..Self::multiplicative(standard, quantity, name, symbol, dim, scale)
        }
    }

    /// Allow SI prefixes to be synthesized for this unit. Ignored for affine
    /// units, which are never prefixed.
    pub fn prefixable(mut self) -> Self {
        self.prefixable = self.behavior == UnitBehavior::Multiplicative;
        self
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Copy of this spec under `prefix`: prefixed symbol and name, scaled
    /// factor, not prefixable again and without aliases.
    pub fn with_prefix(&self, prefix: &Prefix) -> Self {
        Self {
            name: format!("{}{}", prefix.name, self.name),
            symbol: format!("{}{}", prefix.symbol, self.symbol),
            scale: self.scale * prefix.factor,
            prefixable: false,
            aliases: Vec::new(),
            ..self.clone()
        }
    }

    pub fn standard(&self) -> UnitStandard {
        self.standard
    }

    pub fn behavior(&self) -> UnitBehavior {
        self.behavior
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn dim(&self) -> Unit {
        self.dim
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_prefixable(&self) -> bool {
        self.prefixable
    }

    pub fn is_affine(&self) -> bool {
        self.behavior == UnitBehavior::Affine
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn to_si(&self, value: f64) -> f64 {
        value * self.scale + self.offset
    }

    pub fn from_si(&self, value: f64) -> f64 {
        (value - self.offset) / self.scale
    }
}

impl fmt::Display for UnitSpec {
    /// `kPa = 1000 m^-1 kg s^-2 (kilopascal, pressure, stress)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.symbol, self.scale)?;
        if !self.dim.is_dimensionless() {
            write!(f, " {}", self.dim)?;
        }
        if self.is_affine() {
            write!(f, " + {}", self.offset)?;
        }
        write!(f, " ({}, {})", self.name, self.quantity)
    }
}
