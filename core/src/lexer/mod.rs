pub mod cursor;
mod number_ident_scanner;
pub mod options;
pub mod reader;
pub mod scanner;
pub mod source;
mod string_scanner;
pub mod token;

pub use options::ScanOptions;
pub use reader::TokenReader;
pub use scanner::{LOOKAHEAD_SIZE, Scanner};
pub use source::{SourceBuffer, SrcPos, SrcSpan};
use token::Token;

/// Tokenize the whole source, ending with `EndOfFile`.
pub fn lex(src: &SourceBuffer) -> Vec<Token<'_>> {
    lex_with(src, ScanOptions::default())
}

pub fn lex_with(src: &SourceBuffer, options: ScanOptions) -> Vec<Token<'_>> {
    let mut reader = TokenReader::with_options(src, options);
    let mut tokens: Vec<Token<'_>> = reader.by_ref().collect();
    tokens.push(reader.read());
    tokens
}
