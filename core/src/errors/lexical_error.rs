use miette::Diagnostic;
use thiserror::Error;

use crate::lexer::source::SrcPos;
use crate::lexer::token::{ScanError, Token};

/// A lexical failure lifted out of an `Error` token so it can be rendered.
#[derive(Debug, Error, Diagnostic)]
#[error("{kind} at {pos}")]
#[diagnostic(code(unitscript::lex))]
pub struct LexicalError {
    pub kind: ScanError,
    pub pos: SrcPos,

    #[label("here")]
    pub span: miette::SourceSpan,

    #[help]
    pub help: Option<String>,
}

impl LexicalError {
    pub fn new(kind: ScanError, pos: SrcPos, offset: usize, length: usize) -> Self {
        let help = match kind {
            ScanError::UnterminatedString => Some("add the closing quote".to_string()),
            ScanError::InvalidEscape => {
                Some(r#"valid escapes are \n \r \t \\ \" \' \xHH and \uHHHH"#.to_string())
            }
            ScanError::UnterminatedComment => Some("close the comment with */".to_string()),
            ScanError::UnknownCharacter => None,
        };
        Self {
            kind,
            pos,
            span: (offset, length).into(),
            help,
        }
    }

    /// `None` unless `token` is an `Error` token.
    pub fn from_token(token: &Token<'_>) -> Option<Self> {
        let kind = token.scan_error()?;
        Some(Self::new(kind, token.pos, token.span.start, token.span.len))
    }
}
