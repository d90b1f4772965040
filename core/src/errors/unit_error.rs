use miette::Diagnostic;
use thiserror::Error;

use crate::units::dimension::{MAX_POWER, Unit};

#[derive(Debug, Error, Diagnostic)]
pub enum UnitError {
    #[error("unknown unit '{symbol}'")]
    UnknownSymbol { symbol: String },

    #[error("an override for '{symbol}' already exists")]
    #[diagnostic(help("pass overwrite = true to replace it"))]
    OverrideExists { symbol: String },

    #[error("dimension exponent {exponent} is outside [-{max}, {max}]", max = MAX_POWER)]
    ExponentOutOfRange { exponent: i64 },

    #[error("cannot convert [{from}] to [{to}]: dimensions differ")]
    IncompatibleDimensions { from: Unit, to: Unit },

    #[error("affine unit inside compound unit '{expr}'")]
    #[diagnostic(help("convert to an absolute scale such as K first"))]
    AffineInCompound { expr: String },

    #[error("invalid definition for '{symbol}': {reason}")]
    InvalidDefinition { symbol: String, reason: &'static str },

    #[error("malformed unit override file")]
    MalformedOverrides(#[from] serde_json::Error),
}
