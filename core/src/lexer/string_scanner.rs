use super::reader::TokenReader;
use super::token::{ScanError, Token, TokenKind};
use crate::errors::TokenError;

impl<'src> TokenReader<'src> {
    /// Lex a quoted literal at the cursor, whether or not quoted-literal mode
    /// is enabled. Fails when the cursor is not at `"` or `'`.
    pub fn read_string(&mut self, allow_escape: bool) -> Result<Token<'src>, TokenError> {
        match self.cursor.peek() {
            Some(quote @ (b'"' | b'\'')) => Ok(self.scan_string(quote, allow_escape)),
            _ => Err(TokenError::NotAtQuote {
                offset: self.cursor.pos(),
            }),
        }
    }

    /// The token's span covers the text between the quotes. On failure an
    /// `Error` token spans from the opening quote's successor to the point of
    /// failure, and the cursor stays just past that point.
    pub(super) fn scan_string(&mut self, quote: u8, allow_escape: bool) -> Token<'src> {
        self.cursor.advance();
        let pos = self.cursor.position();
        let start = self.cursor.pos();

        loop {
            let Some(ch) = self.cursor.peek() else {
                return self.token_from(TokenKind::Error(ScanError::UnterminatedString), pos, start);
            };

            if !allow_escape && (ch == b'\r' || ch == b'\n') {
                return self.token_from(TokenKind::Error(ScanError::UnterminatedString), pos, start);
            }

            if ch == quote {
                let token = self.token_from(TokenKind::LiteralString, pos, start);
                self.cursor.advance();
                return token;
            }

            self.cursor.advance();
            if !allow_escape || ch != b'\\' {
                continue;
            }

            match self.cursor.peek() {
                None => {
                    return self.token_from(
                        TokenKind::Error(ScanError::UnterminatedString),
                        pos,
                        start,
                    );
                }
                Some(b'n' | b'r' | b't' | b'\\' | b'"' | b'\'') => {
                    self.cursor.advance();
                }
                Some(b'x') => {
                    self.cursor.advance();
                    self.skip_hex(2);
                }
                Some(b'u') => {
                    self.cursor.advance();
                    self.skip_hex(4);
                }
                Some(_) => {
                    self.cursor.advance();
                    return self.token_from(TokenKind::Error(ScanError::InvalidEscape), pos, start);
                }
            }
        }
    }

    /// Consume up to `max` hex digits, stopping at the first non-hex byte.
    fn skip_hex(&mut self, max: usize) {
        for _ in 0..max {
            if !self.cursor.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                break;
            }
            self.cursor.advance();
        }
    }
}
