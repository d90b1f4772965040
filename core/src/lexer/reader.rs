use super::cursor::Cursor;
use super::number_ident_scanner::is_ident_start;
use super::options::ScanOptions;
use super::source::{SourceBuffer, SrcPos, SrcSpan};
use super::token::{OperatorKind, ScanError, Token, TokenKind};
use crate::errors::TokenError;

/// Produces one token per [`read`](TokenReader::read) call from a borrowed
/// [`SourceBuffer`].
///
/// Malformed input never fails: it comes back as `Error` or `Undefined`
/// tokens and the reader keeps going. Every call either advances the cursor
/// or returns `EndOfFile`.
pub struct TokenReader<'src> {
    pub(super) src: &'src SourceBuffer,
    pub(super) cursor: Cursor<'src>,
    options: ScanOptions,
}

impl<'src> TokenReader<'src> {
    pub fn new(src: &'src SourceBuffer) -> Self {
        Self::with_options(src, ScanOptions::default())
    }

    pub fn with_options(src: &'src SourceBuffer, options: ScanOptions) -> Self {
        Self {
            src,
            cursor: Cursor::new(src.content()),
            options,
        }
    }

    pub fn source(&self) -> &'src SourceBuffer {
        self.src
    }

    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// Byte offset of the next unread character.
    pub fn cursor(&self) -> usize {
        self.cursor.pos()
    }

    pub fn position(&self) -> SrcPos {
        self.cursor.position()
    }

    pub fn reset(&mut self) {
        self.cursor.reset();
    }

    /// Move to byte offset `pos`. Line and column are recomputed by scanning
    /// from the start of the source, so this is O(n). `pos` must fall on a
    /// character boundary and never inside a `\r\n` or `\n\r` pair.
    pub fn set_cursor(&mut self, pos: usize) -> Result<(), TokenError> {
        if pos > self.cursor.len() {
            return Err(TokenError::CursorOutOfRange {
                offset: pos,
                len: self.cursor.len(),
            });
        }
        if !self.cursor.seek(pos) {
            return Err(TokenError::NotCharBoundary { offset: pos });
        }
        Ok(())
    }

    /// Move to `pos`, clamped to the end of its line or of the source. Also
    /// a linear rescan from the start.
    pub fn set_position(&mut self, pos: SrcPos) {
        self.cursor.seek_position(pos);
    }

    pub fn read(&mut self) -> Token<'src> {
        if let Some(error) = self.skip_trivia() {
            return error;
        }

        let Some(ch) = self.cursor.peek() else {
            return self.end_of_file();
        };

        match ch {
            b'\r' | b'\n' => self.line_break(),
            b'\t' => self.tab_break(),
            b'"' | b'\'' if self.options.quoted_strings => {
                self.scan_string(ch, self.options.escapes)
            }
            c if is_ident_start(c) => self.scan_identifier(),
            c if c.is_ascii_digit() => self.scan_number(),
            b'.' if self.cursor.peek_at(1).is_some_and(|c| c.is_ascii_digit()) => {
                self.scan_number()
            }
            _ => self.operator_or_punct(),
        }
    }

    /// Token of `kind` from `start` to the current cursor.
    pub(super) fn token_from(&self, kind: TokenKind, pos: SrcPos, start: usize) -> Token<'src> {
        Token::new(
            self.src,
            kind,
            pos,
            SrcSpan::new(start, self.cursor.pos() - start),
        )
    }

    /// Skip plain spaces, and comments when enabled. Tabs are tokens.
    fn skip_trivia(&mut self) -> Option<Token<'src>> {
        loop {
            self.cursor.eat_while(|c| c == b' ');

            if !self.options.comments || self.cursor.peek() != Some(b'/') {
                return None;
            }
            match self.cursor.peek_at(1) {
                Some(b'/') => {
                    self.cursor.eat_while(|c| c != b'\r' && c != b'\n');
                }
                Some(b'*') => {
                    let pos = self.cursor.position();
                    let start = self.cursor.pos();
                    self.cursor.advance();
                    self.cursor.advance();
                    if !self.skip_block_comment() {
                        return Some(self.token_from(
                            TokenKind::Error(ScanError::UnterminatedComment),
                            pos,
                            start,
                        ));
                    }
                }
                _ => return None,
            }
        }
    }

    fn skip_block_comment(&mut self) -> bool {
        loop {
            match self.cursor.advance() {
                Some(b'*') if self.cursor.peek() == Some(b'/') => {
                    self.cursor.advance();
                    return true;
                }
                Some(_) => {}
                None => return false,
            }
        }
    }

    fn end_of_file(&self) -> Token<'src> {
        let start = self.cursor.pos();
        Token::new(
            self.src,
            TokenKind::EndOfFile,
            self.cursor.position(),
            SrcSpan::new(start, 0),
        )
    }

    /// `\r\n` and `\n\r` are one break of length 2.
    fn line_break(&mut self) -> Token<'src> {
        let pos = self.cursor.position();
        let start = self.cursor.pos();
        self.cursor.advance();
        self.token_from(TokenKind::LineBreak, pos, start)
    }

    /// One token, one column; tabs are not expanded.
    fn tab_break(&mut self) -> Token<'src> {
        let pos = self.cursor.position();
        let start = self.cursor.pos();
        self.cursor.advance();
        self.token_from(TokenKind::TabBreak, pos, start)
    }

    fn operator_or_punct(&mut self) -> Token<'src> {
        let pos = self.cursor.position();
        let start = self.cursor.pos();
        let Some(ch) = self.cursor.advance() else {
            return self.end_of_file();
        };

        let kind = match ch {
            b'(' => TokenKind::OpenParen,
            b')' => TokenKind::CloseParen,
            b'[' => TokenKind::OpenSquare,
            b']' => TokenKind::CloseSquare,
            b'{' => TokenKind::OpenCurly,
            b'}' => TokenKind::CloseCurly,
            b'+' => TokenKind::Operator(OperatorKind::Plus),
            b'-' => TokenKind::Operator(OperatorKind::Minus),
            b'*' => TokenKind::Operator(OperatorKind::Multiply),
            b'/' => TokenKind::Operator(OperatorKind::Divide),
            b'^' => TokenKind::Operator(OperatorKind::Pow),
            b'=' => self.pair(b'=', OperatorKind::Equal, Some(OperatorKind::Assign)),
            b'!' => self.pair(b'=', OperatorKind::NotEqual, Some(OperatorKind::Not)),
            b'<' => self.pair(b'=', OperatorKind::LessEqual, Some(OperatorKind::Less)),
            b'>' => self.pair(b'=', OperatorKind::GreaterEqual, Some(OperatorKind::Greater)),
            b'|' => self.pair(b'|', OperatorKind::Or, None),
            b'&' => self.pair(b'&', OperatorKind::And, None),
            _ => TokenKind::Undefined,
        };

        self.token_from(kind, pos, start)
    }

    /// Longest match for a two-character operator whose first character was
    /// just consumed. Without the partner, `single` is used; a missing
    /// `single` means the lone character is not an operator.
    fn pair(&mut self, second: u8, double: OperatorKind, single: Option<OperatorKind>) -> TokenKind {
        if self.cursor.match_char(second) {
            return TokenKind::Operator(double);
        }
        single.map_or(TokenKind::Undefined, TokenKind::Operator)
    }
}

impl<'src> Iterator for TokenReader<'src> {
    type Item = Token<'src>;

    /// Yields tokens up to, but not including, `EndOfFile`.
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.read();
        (!token.is_eof()).then_some(token)
    }
}
