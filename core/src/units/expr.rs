use std::fmt;

use super::conversion::ResolvedUnit;
use super::registry::UnitRegistry;
use crate::errors::UnitError;
use crate::lexer::SrcSpan;

/// A unit expression such as `kN/mm^2`, with unit names as leaves.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitExpr {
    Name { symbol: String, span: SrcSpan },
    Mul(Box<UnitExpr>, Box<UnitExpr>),
    Div(Box<UnitExpr>, Box<UnitExpr>),
    Pow(Box<UnitExpr>, i32),
    Group(Box<UnitExpr>),
}

impl UnitExpr {
    pub fn name(symbol: impl Into<String>, span: SrcSpan) -> Self {
        UnitExpr::Name {
            symbol: symbol.into(),
            span,
        }
    }

    pub fn mul(lhs: UnitExpr, rhs: UnitExpr) -> Self {
        UnitExpr::Mul(Box::new(lhs), Box::new(rhs))
    }

    pub fn div(lhs: UnitExpr, rhs: UnitExpr) -> Self {
        UnitExpr::Div(Box::new(lhs), Box::new(rhs))
    }

    pub fn pow(base: UnitExpr, exponent: i32) -> Self {
        UnitExpr::Pow(Box::new(base), exponent)
    }

    pub fn group(inner: UnitExpr) -> Self {
        UnitExpr::Group(Box::new(inner))
    }

    /// Span covering every leaf of the expression.
    pub fn span(&self) -> SrcSpan {
        match self {
            UnitExpr::Name { span, .. } => *span,
            UnitExpr::Mul(lhs, rhs) | UnitExpr::Div(lhs, rhs) => {
                let (l, r) = (lhs.span(), rhs.span());
                let start = l.start.min(r.start);
                SrcSpan::new(start, l.end().max(r.end()) - start)
            }
            UnitExpr::Pow(base, _) | UnitExpr::Group(base) => base.span(),
        }
    }

    /// Reduce to a single dimension and SI mapping.
    ///
    /// A bare affine unit (or one wrapped only in parentheses) keeps its
    /// offset. An affine unit under a product, quotient or power has no
    /// meaningful offset and fails with [`UnitError::AffineInCompound`].
    pub fn reduce(&self, registry: &UnitRegistry) -> Result<ResolvedUnit, UnitError> {
        match self {
            UnitExpr::Name { symbol, .. } => registry.get(symbol).map(ResolvedUnit::from),
            UnitExpr::Group(inner) => inner.reduce(registry),
            UnitExpr::Mul(lhs, rhs) => {
                let (l, r) = (self.operand(lhs, registry)?, self.operand(rhs, registry)?);
                Ok(ResolvedUnit::multiplicative(l.dim.multiply(r.dim)?, l.scale * r.scale))
            }
            UnitExpr::Div(lhs, rhs) => {
                let (l, r) = (self.operand(lhs, registry)?, self.operand(rhs, registry)?);
                Ok(ResolvedUnit::multiplicative(l.dim.divide(r.dim)?, l.scale / r.scale))
            }
            UnitExpr::Pow(base, exponent) => {
                let b = self.operand(base, registry)?;
                Ok(ResolvedUnit::multiplicative(b.dim.pow(*exponent)?, b.scale.powi(*exponent)))
            }
        }
    }

    fn operand(&self, child: &UnitExpr, registry: &UnitRegistry) -> Result<ResolvedUnit, UnitError> {
        let resolved = child.reduce(registry)?;
        if resolved.is_affine() {
            return Err(UnitError::AffineInCompound {
                expr: self.to_string(),
            });
        }
        Ok(resolved)
    }
}

impl fmt::Display for UnitExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitExpr::Name { symbol, .. } => f.write_str(symbol),
            UnitExpr::Mul(lhs, rhs) => write!(f, "{lhs}*{rhs}"),
            UnitExpr::Div(lhs, rhs) => write!(f, "{lhs}/{rhs}"),
            UnitExpr::Pow(base, exponent) => write!(f, "{base}^{exponent}"),
            UnitExpr::Group(inner) => write!(f, "({inner})"),
        }
    }
}
