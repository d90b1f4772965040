use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use super::source::{SourceBuffer, SrcPos, SrcSpan};
use crate::errors::TokenError;

/// A single token: its kind, where it starts, and the span of its lexeme in
/// the borrowed source.
#[derive(Clone, Copy)]
pub struct Token<'src> {
    src: &'src SourceBuffer,
    pub kind: TokenKind,
    pub pos: SrcPos,
    pub span: SrcSpan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Undefined,

    EndOfFile,
    LineBreak,
    TabBreak,

    Error(ScanError),
    Keyword(Keyword),
    Operator(OperatorKind),

    LiteralNumeric,
    LiteralIdentifier,
    LiteralString,

    OpenParen,
    CloseParen,
    OpenSquare,
    CloseSquare,
    OpenCurly,
    CloseCurly,
}

impl TokenKind {
    /// Name of the kind tag, without its payload.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Undefined => "Undefined",
            TokenKind::EndOfFile => "EndOfFile",
            TokenKind::LineBreak => "LineBreak",
            TokenKind::TabBreak => "TabBreak",
            TokenKind::Error(_) => "Error",
            TokenKind::Keyword(_) => "Keyword",
            TokenKind::Operator(_) => "Operator",
            TokenKind::LiteralNumeric => "LiteralNumeric",
            TokenKind::LiteralIdentifier => "LiteralIdentifier",
            TokenKind::LiteralString => "LiteralString",
            TokenKind::OpenParen => "OpenParen",
            TokenKind::CloseParen => "CloseParen",
            TokenKind::OpenSquare => "OpenSquare",
            TokenKind::CloseSquare => "CloseSquare",
            TokenKind::OpenCurly => "OpenCurly",
            TokenKind::CloseCurly => "CloseCurly",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Error(err) => write!(f, "Error({err:?})"),
            TokenKind::Keyword(kw) => write!(f, "Keyword({kw:?})"),
            TokenKind::Operator(op) => write!(f, "Operator({op:?})"),
            other => f.write_str(other.name()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    True,
    False,
    Let,
    As,
}

impl Keyword {
    pub const ALL: [Keyword; 4] = [Keyword::True, Keyword::False, Keyword::Let, Keyword::As];

    /// Case-sensitive keyword lookup.
    pub fn from_lexeme(text: &str) -> Option<Self> {
        match text {
            "true" => Some(Keyword::True),
            "false" => Some(Keyword::False),
            "let" => Some(Keyword::Let),
            "as" => Some(Keyword::As),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::Let => "let",
            Keyword::As => "as",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Plus,
    Minus,
    Multiply,
    Divide,
    Pow,

    Assign,

    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    And,
    Or,
    Not,
}

impl OperatorKind {
    pub fn symbol(self) -> &'static str {
        match self {
            OperatorKind::Plus => "+",
            OperatorKind::Minus => "-",
            OperatorKind::Multiply => "*",
            OperatorKind::Divide => "/",
            OperatorKind::Pow => "^",
            OperatorKind::Assign => "=",
            OperatorKind::Equal => "==",
            OperatorKind::NotEqual => "!=",
            OperatorKind::Less => "<",
            OperatorKind::LessEqual => "<=",
            OperatorKind::Greater => ">",
            OperatorKind::GreaterEqual => ">=",
            OperatorKind::And => "&&",
            OperatorKind::Or => "||",
            OperatorKind::Not => "!",
        }
    }
}

/// Lexical failure carried as data by an `Error` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ScanError {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("invalid escape sequence")]
    InvalidEscape,
    #[error("unknown character")]
    UnknownCharacter,
    #[error("unterminated block comment")]
    UnterminatedComment,
}

impl<'src> Token<'src> {
    pub fn new(src: &'src SourceBuffer, kind: TokenKind, pos: SrcPos, span: SrcSpan) -> Self {
        Self {
            src,
            kind,
            pos,
            span,
        }
    }

    pub fn source(&self) -> &'src SourceBuffer {
        self.src
    }

    /// The lexeme, borrowed straight from the source.
    pub fn text(&self) -> &'src str {
        self.src.slice(self.span)
    }

    /// The lexeme, materialized through the source's span cache.
    pub fn lexeme(&self) -> Arc<str> {
        self.src.get_string(self.span)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }

    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    pub fn operator(&self) -> Option<OperatorKind> {
        match self.kind {
            TokenKind::Operator(op) => Some(op),
            _ => None,
        }
    }

    pub fn scan_error(&self) -> Option<ScanError> {
        match self.kind {
            TokenKind::Error(err) => Some(err),
            _ => None,
        }
    }

    /// `Ln: 1 Ch: 5 'let' [Keyword(Let)]`
    pub fn describe(&self) -> String {
        format!("{} '{}' [{}]", self.pos, self.text(), self.kind)
    }
}

impl PartialEq for Token<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.src, other.src)
            && self.kind == other.kind
            && self.pos == other.pos
            && self.span == other.span
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("kind", &self.kind)
            .field("pos", &self.pos)
            .field("span", &self.span)
            .field("text", &self.text())
            .finish()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl TryFrom<Token<'_>> for Keyword {
    type Error = TokenError;

    fn try_from(token: Token<'_>) -> Result<Self, Self::Error> {
        token.keyword().ok_or(TokenError::InvalidCast {
            expected: "Keyword",
            found: token.kind.name(),
        })
    }
}

impl TryFrom<Token<'_>> for OperatorKind {
    type Error = TokenError;

    fn try_from(token: Token<'_>) -> Result<Self, Self::Error> {
        token.operator().ok_or(TokenError::InvalidCast {
            expected: "Operator",
            found: token.kind.name(),
        })
    }
}

impl TryFrom<Token<'_>> for ScanError {
    type Error = TokenError;

    fn try_from(token: Token<'_>) -> Result<Self, Self::Error> {
        token.scan_error().ok_or(TokenError::InvalidCast {
            expected: "Error",
            found: token.kind.name(),
        })
    }
}
