//! Quantity lines for the command line and REPL:
//!
//! ```text
//! line  := '-'? NUMBER unit? ('as' unit)?
//! unit  := term (('*' | '/')? term)*
//! term  := atom ('^' '-'? NUMBER)?
//! atom  := NAME | '(' unit ')'
//! ```
//!
//! Adjacent terms multiply (`N m`). A NAME is a run of touching identifier
//! and non-ASCII unknown-character tokens, so `°C`, `kΩ` and `µF` are single
//! names. A stray ASCII character such as `?` is an unknown character.
//!
//! A line continues past its line break while a parenthesis is open, or when
//! the break is preceded by a `\`.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;
use unitscript::lexer::token::{Keyword, OperatorKind, ScanError, Token, TokenKind};
use unitscript::units::{ResolvedUnit, UnitExpr, UnitRegistry, convert};
use unitscript::{LexicalError, ScanOptions, Scanner, SourceBuffer, SrcSpan, TokenError, UnitError};

#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    #[error("expected a number, found '{found}'")]
    #[diagnostic(code(unitscript::parse))]
    ExpectedNumber {
        found: String,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("expected a unit, found '{found}'")]
    #[diagnostic(code(unitscript::parse))]
    ExpectedUnit {
        found: String,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("unexpected '{found}'")]
    #[diagnostic(code(unitscript::parse))]
    Unexpected {
        found: String,
        #[label("not expected here")]
        span: SourceSpan,
    },

    #[error("'{text}' is not a valid number")]
    #[diagnostic(code(unitscript::parse))]
    InvalidNumber {
        text: String,
        #[label("here")]
        span: SourceSpan,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Lexical(#[from] LexicalError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Token(#[from] TokenError),
}

#[derive(Debug, Error, Diagnostic)]
pub enum EvalError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Unit(#[from] UnitError),
}

/// One parsed line: a value with optional unit and conversion target.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: Option<UnitExpr>,
    pub target: Option<UnitExpr>,
}

/// Result of evaluating a [`Quantity`].
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluated {
    pub value: f64,
    /// Target unit text, or `None` when the value is in SI base units.
    pub unit: Option<String>,
    pub resolved: ResolvedUnit,
}

impl std::fmt::Display for Evaluated {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.unit {
            Some(unit) => write!(f, "{} {unit}", self.value),
            None if self.resolved.dim.is_dimensionless() => write!(f, "{}", self.value),
            None => write!(f, "{} {}", self.value, self.resolved.dim),
        }
    }
}

impl Quantity {
    /// Convert into the target unit, or into SI base units without one.
    pub fn evaluate(&self, registry: &UnitRegistry) -> Result<Evaluated, UnitError> {
        let from = match &self.unit {
            Some(expr) => expr.reduce(registry)?,
            None => ResolvedUnit::SCALAR,
        };

        match &self.target {
            Some(target) => {
                let to = target.reduce(registry)?;
                Ok(Evaluated {
                    value: convert(self.value, &from, &to)?,
                    unit: Some(target.to_string()),
                    resolved: to,
                })
            }
            None => Ok(Evaluated {
                value: from.to_si(self.value),
                unit: None,
                resolved: ResolvedUnit::multiplicative(from.dim, 1.0),
            }),
        }
    }
}

/// Parse every non-blank line of `src`.
pub fn parse_lines(src: &SourceBuffer, options: ScanOptions) -> Result<Vec<Quantity>, ParseError> {
    let mut parser = Parser::new(src, options);
    let mut lines = Vec::new();
    loop {
        parser.skip_blank_lines()?;
        if parser.at_eof()? {
            return Ok(lines);
        }
        lines.push(parser.line()?);
    }
}

/// Parse and evaluate a single line.
pub fn evaluate_line(
    line: &str,
    options: ScanOptions,
    registry: &UnitRegistry,
) -> Result<Vec<Evaluated>, EvalError> {
    let src = SourceBuffer::new(line);
    let quantities = parse_lines(&src, options)?;
    quantities
        .iter()
        .map(|q| q.evaluate(registry).map_err(EvalError::from))
        .collect()
}

struct Parser<'src> {
    scanner: Scanner<'src>,
    /// Open parentheses in the current unit.
    depth: usize,
}

impl<'src> Parser<'src> {
    fn new(src: &'src SourceBuffer, options: ScanOptions) -> Self {
        Self {
            scanner: Scanner::with_options(src, options),
            depth: 0,
        }
    }

    /// Next significant token. Tabs and continued line breaks are skipped;
    /// scan errors surface here.
    fn peek(&mut self) -> Result<Token<'src>, ParseError> {
        loop {
            let token = self.scanner.peek(0)?;
            match token.kind {
                TokenKind::TabBreak => {}
                TokenKind::LineBreak if self.depth > 0 => {}
                TokenKind::Undefined
                    if token.text() == "\\"
                        && self.scanner.peek(1)?.kind == TokenKind::LineBreak =>
                {
                    self.scanner.consume();
                }
                _ => break,
            }
            self.scanner.consume();
        }
        let token = self.scanner.peek(0)?;
        if let Some(err) = LexicalError::from_token(&token) {
            return Err(err.into());
        }
        Ok(token)
    }

    fn at_eof(&mut self) -> Result<bool, ParseError> {
        Ok(self.peek()?.is_eof())
    }

    fn skip_blank_lines(&mut self) -> Result<(), ParseError> {
        while self.peek()?.kind == TokenKind::LineBreak {
            self.scanner.consume();
        }
        Ok(())
    }

    fn line(&mut self) -> Result<Quantity, ParseError> {
        let value = self.number()?;
        let unit = if self.starts_atom()? {
            Some(self.unit()?)
        } else {
            None
        };

        let target = if self.peek()?.keyword() == Some(Keyword::As) {
            self.scanner.consume();
            Some(self.unit()?)
        } else {
            None
        };

        let end = self.peek()?;
        match end.kind {
            TokenKind::LineBreak | TokenKind::EndOfFile => Ok(Quantity {
                value,
                unit,
                target,
            }),
            _ => Err(unexpected(&end)),
        }
    }

    fn number(&mut self) -> Result<f64, ParseError> {
        let negative = self.peek()?.operator() == Some(OperatorKind::Minus);
        if negative {
            self.scanner.consume();
        }

        let token = self.peek()?;
        if token.kind != TokenKind::LiteralNumeric {
            return Err(ParseError::ExpectedNumber {
                found: found(&token),
                span: token.span.into(),
            });
        }
        self.scanner.consume();

        let value: f64 = token.text().parse().map_err(|_| ParseError::InvalidNumber {
            text: token.text().to_string(),
            span: token.span.into(),
        })?;
        Ok(if negative { -value } else { value })
    }

    fn unit(&mut self) -> Result<UnitExpr, ParseError> {
        let mut expr = self.term()?;
        loop {
            let token = self.peek()?;
            match token.operator() {
                Some(OperatorKind::Multiply) => {
                    self.scanner.consume();
                    expr = UnitExpr::mul(expr, self.term()?);
                }
                Some(OperatorKind::Divide) => {
                    self.scanner.consume();
                    expr = UnitExpr::div(expr, self.term()?);
                }
                _ if self.starts_atom()? => {
                    expr = UnitExpr::mul(expr, self.term()?);
                }
                _ => return Ok(expr),
            }
        }
    }

    fn term(&mut self) -> Result<UnitExpr, ParseError> {
        let atom = self.atom()?;
        if self.peek()?.operator() != Some(OperatorKind::Pow) {
            return Ok(atom);
        }
        self.scanner.consume();

        let exponent = self.number()?;
        if exponent.fract() != 0.0 || exponent.abs() > f64::from(i32::MAX) {
            let span = self.scanner.previous().map_or(SrcSpan::default(), |t| t.span);
            return Err(ParseError::InvalidNumber {
                text: exponent.to_string(),
                span: span.into(),
            });
        }
        Ok(UnitExpr::pow(atom, exponent as i32))
    }

    fn atom(&mut self) -> Result<UnitExpr, ParseError> {
        let token = self.peek()?;
        match token.kind {
            TokenKind::OpenParen => {
                self.scanner.consume();
                self.depth += 1;
                let inner = self.unit()?;
                let close = self.peek()?;
                if close.kind != TokenKind::CloseParen {
                    return Err(unexpected(&close));
                }
                self.scanner.consume();
                self.depth -= 1;
                Ok(UnitExpr::group(inner))
            }
            _ if is_name_piece(&token) => Ok(self.name()),
            TokenKind::Undefined => Err(unexpected(&token)),
            _ => Err(ParseError::ExpectedUnit {
                found: found(&token),
                span: token.span.into(),
            }),
        }
    }

    /// Glue touching name pieces into one symbol.
    fn name(&mut self) -> UnitExpr {
        let first = self.scanner.consume();
        let mut span = first.span;
        while let Ok(next) = self.scanner.peek(0) {
            if !is_name_piece(&next) || next.span.start != span.end() {
                break;
            }
            self.scanner.consume();
            span = SrcSpan::new(span.start, next.span.end() - span.start);
        }
        UnitExpr::name(first.source().slice(span), span)
    }

    fn starts_atom(&mut self) -> Result<bool, ParseError> {
        let token = self.peek()?;
        Ok(token.kind == TokenKind::OpenParen || is_name_piece(&token))
    }
}

/// Identifiers, plus unknown characters outside ASCII (`°`, `µ`, `Ω`).
fn is_name_piece(token: &Token<'_>) -> bool {
    match token.kind {
        TokenKind::LiteralIdentifier => true,
        TokenKind::Undefined => !token.text().is_ascii(),
        _ => false,
    }
}

fn found(token: &Token<'_>) -> String {
    if token.is_eof() {
        "end of input".to_string()
    } else {
        token.text().to_string()
    }
}

fn unexpected(token: &Token<'_>) -> ParseError {
    if token.kind == TokenKind::Undefined {
        return LexicalError::new(
            ScanError::UnknownCharacter,
            token.pos,
            token.span.start,
            token.span.len,
        )
        .into();
    }
    ParseError::Unexpected {
        found: found(token),
        span: token.span.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(line: &str) -> Evaluated {
        let registry = UnitRegistry::create_default();
        let mut results = evaluate_line(line, ScanOptions::default(), &registry).unwrap();
        assert_eq!(results.len(), 1);
        results.remove(0)
    }

    #[test]
    fn converts_pressure() {
        let out = eval("1 MPa as kPa");
        assert!((out.value - 1000.0).abs() < 1e-9);
        assert_eq!(out.unit.as_deref(), Some("kPa"));
    }

    #[test]
    fn juxtaposed_units_multiply() {
        let out = eval("2 kN m as J");
        assert!((out.value - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn compound_unit_with_power() {
        let out = eval("1 kN/mm^2 as MPa");
        assert!((out.value - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn glues_non_ascii_symbols() {
        let out = eval("0 °C as K");
        assert!((out.value - 273.15).abs() < 1e-9);
        let out = eval("4.7 kΩ as Ω");
        assert!((out.value - 4700.0).abs() < 1e-9);
    }

    #[test]
    fn bare_number_is_dimensionless() {
        let out = eval("-2.5");
        assert_eq!(out.value, -2.5);
        assert_eq!(out.to_string(), "-2.5");
    }

    #[test]
    fn without_target_reports_si() {
        let out = eval("3 km");
        assert!((out.value - 3000.0).abs() < 1e-9);
        assert_eq!(out.to_string(), "3000 m");
    }

    #[test]
    fn rejects_mismatched_dimensions() {
        let registry = UnitRegistry::create_default();
        let err = evaluate_line("1 m as s", ScanOptions::default(), &registry).unwrap_err();
        assert!(matches!(
            err,
            EvalError::Unit(UnitError::IncompatibleDimensions { .. })
        ));
    }

    #[test]
    fn rejects_affine_in_compound() {
        let registry = UnitRegistry::create_default();
        let err = evaluate_line("1 °C/s as K/s", ScanOptions::default(), &registry).unwrap_err();
        assert!(matches!(
            err,
            EvalError::Unit(UnitError::AffineInCompound { .. })
        ));
    }

    #[test]
    fn missing_number_is_reported() {
        let src = SourceBuffer::new("m as ft");
        let err = parse_lines(&src, ScanOptions::default()).unwrap_err();
        assert!(matches!(err, ParseError::ExpectedNumber { .. }));
    }

    #[test]
    fn one_quantity_per_line() {
        let src = SourceBuffer::new("1 m\n\n2 ft as in\n");
        let lines = parse_lines(&src, ScanOptions::default()).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].target.is_some());
    }

    #[test]
    fn line_continues_inside_parentheses() {
        let out = eval("1 kN/(m\n^2) as MPa");
        assert!((out.value - 1e-3).abs() < 1e-12);
        assert_eq!(out.unit.as_deref(), Some("MPa"));
    }

    #[test]
    fn line_continues_after_backslash() {
        let out = eval("1 m \\\nas ft");
        assert!((out.value - 3.280839895013123).abs() < 1e-9);

        let out = eval("1 m\\\r\nas ft");
        assert!((out.value - 3.280839895013123).abs() < 1e-9);
    }

    #[test]
    fn closed_parentheses_end_the_line() {
        let src = SourceBuffer::new("1 (m)\n2 s");
        let lines = parse_lines(&src, ScanOptions::default()).unwrap();
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn stray_ascii_character_is_unknown() {
        let src = SourceBuffer::new("1 m ?");
        let err = parse_lines(&src, ScanOptions::default()).unwrap_err();
        match err {
            ParseError::Lexical(err) => assert_eq!(err.kind, ScanError::UnknownCharacter),
            other => panic!("expected a lexical error, got {other:?}"),
        }

        let src = SourceBuffer::new("1 $");
        let err = parse_lines(&src, ScanOptions::default()).unwrap_err();
        assert!(matches!(err, ParseError::Lexical(_)));
    }

    #[test]
    fn comments_are_skipped_when_enabled() {
        let src = SourceBuffer::new("1 m as ft // note\n/* block */ 2 s");
        let lines = parse_lines(&src, ScanOptions::new().with_comments(true)).unwrap();
        assert_eq!(lines.len(), 2);
    }
}
