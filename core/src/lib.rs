pub mod diagnostics;
pub mod errors;
pub mod lexer;
pub mod units;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use errors::{LexicalError, ScriptError, TokenError, UnitError};
pub use lexer::token::{Keyword, OperatorKind, ScanError, Token, TokenKind};
pub use lexer::{ScanOptions, Scanner, SourceBuffer, SrcPos, SrcSpan, TokenReader};
pub use units::{ResolvedUnit, Unit, UnitExpr, UnitRegistry, UnitSpec};

/// Tokenize `src`, failing on the first lexical error.
pub fn tokenize(src: &SourceBuffer, options: ScanOptions) -> Result<Vec<Token<'_>>, LexicalError> {
    let tokens = lexer::lex_with(src, options);
    match tokens.iter().find_map(LexicalError::from_token) {
        Some(err) => Err(err),
        None => Ok(tokens),
    }
}

/// Convert `value` between two registered symbols or aliases.
pub fn convert_symbols(
    registry: &UnitRegistry,
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, UnitError> {
    let from = ResolvedUnit::from(registry.get(from)?);
    let to = ResolvedUnit::from(registry.get(to)?);
    units::convert(value, &from, &to)
}
