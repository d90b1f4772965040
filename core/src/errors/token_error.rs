use miette::Diagnostic;
use thiserror::Error;

/// Misuse of the token reader or scanner by the calling code.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum TokenError {
    #[error("cannot decode a {expected} payload from a {found} token")]
    InvalidCast {
        expected: &'static str,
        found: &'static str,
    },

    #[error("lookahead {requested} exceeds the {capacity}-token buffer")]
    #[diagnostic(help("the grammar must not look further ahead than the scanner buffers"))]
    LookaheadExceeded { requested: usize, capacity: usize },

    #[error("cursor offset {offset} is past the end of the source ({len} bytes)")]
    CursorOutOfRange { offset: usize, len: usize },

    #[error("cursor offset {offset} splits a character or line break")]
    #[diagnostic(help("reposition to the start of a character"))]
    NotCharBoundary { offset: usize },

    #[error("no identifier starts at offset {offset}")]
    NotAtIdentifier { offset: usize },

    #[error("no quote starts at offset {offset}")]
    NotAtQuote { offset: usize },
}
