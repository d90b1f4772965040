use super::reader::TokenReader;
use super::token::{Keyword, Token, TokenKind};
use crate::errors::TokenError;

impl<'src> TokenReader<'src> {
    /// `(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?`. Only the lexeme is kept; the
    /// value is parsed by whoever consumes the token.
    pub(super) fn scan_number(&mut self) -> Token<'src> {
        let pos = self.cursor.position();
        let start = self.cursor.pos();

        if self.cursor.peek() == Some(b'.') {
            self.cursor.advance();
        } else {
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }

        if self.cursor.peek() == Some(b'.') {
            self.cursor.advance();
        }
        self.cursor.eat_while(|c| c.is_ascii_digit());

        if matches!(self.cursor.peek(), Some(b'e' | b'E')) {
            let exponent_digits = match self.cursor.peek_at(1) {
                Some(b'+' | b'-') => self.cursor.peek_at(2),
                other => other,
            };
            if exponent_digits.is_some_and(|c| c.is_ascii_digit()) {
                self.cursor.advance();
                if matches!(self.cursor.peek(), Some(b'+' | b'-')) {
                    self.cursor.advance();
                }
                self.cursor.eat_while(|c| c.is_ascii_digit());
            }
        }

        self.token_from(TokenKind::LiteralNumeric, pos, start)
    }

    /// Lex an identifier or keyword at the cursor. Fails when the cursor is
    /// not at an identifier start.
    pub fn read_identifier(&mut self) -> Result<Token<'src>, TokenError> {
        match self.cursor.peek() {
            Some(c) if is_ident_start(c) => Ok(self.scan_identifier()),
            _ => Err(TokenError::NotAtIdentifier {
                offset: self.cursor.pos(),
            }),
        }
    }

    /// Maximal munch over `[A-Za-z_][A-Za-z0-9_]*`, then a case-sensitive
    /// keyword lookup.
    pub(super) fn scan_identifier(&mut self) -> Token<'src> {
        let pos = self.cursor.position();
        let start = self.cursor.pos();
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);

        let kind = Keyword::from_lexeme(self.cursor.slice_from(start))
            .map_or(TokenKind::LiteralIdentifier, TokenKind::Keyword);
        self.token_from(kind, pos, start)
    }
}

pub(super) fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn is_ident_continue(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}
