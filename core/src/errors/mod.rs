mod lexical_error;
mod token_error;
mod unit_error;

pub use lexical_error::LexicalError;
pub use token_error::TokenError;
pub use unit_error::UnitError;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type wrapping all unitscript errors.
#[derive(Debug, Error, Diagnostic)]
pub enum ScriptError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lexical(#[from] LexicalError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Unit(#[from] UnitError),
}
