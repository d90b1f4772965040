use super::options::ScanOptions;
use super::reader::TokenReader;
use super::source::{SourceBuffer, SrcPos, SrcSpan};
use super::token::{Token, TokenKind};
use crate::errors::TokenError;

/// Maximum number of tokens [`Scanner::peek`] can look ahead.
pub const LOOKAHEAD_SIZE: usize = 10;

/// Bounded-lookahead façade over a [`TokenReader`].
///
/// Peeked tokens live in a fixed ring buffer and are handed out by
/// [`consume`](Scanner::consume) before anything new is read. Grammars built
/// on top can never look further than [`LOOKAHEAD_SIZE`] tokens ahead.
pub struct Scanner<'src> {
    reader: TokenReader<'src>,
    buffer: [Token<'src>; LOOKAHEAD_SIZE],
    start: usize,
    count: usize,
    previous: Option<Token<'src>>,
}

impl<'src> Scanner<'src> {
    pub fn new(src: &'src SourceBuffer) -> Self {
        Self::with_options(src, ScanOptions::default())
    }

    pub fn with_options(src: &'src SourceBuffer, options: ScanOptions) -> Self {
        let placeholder = Token::new(src, TokenKind::EndOfFile, SrcPos::default(), SrcSpan::default());
        Self {
            reader: TokenReader::with_options(src, options),
            buffer: [placeholder; LOOKAHEAD_SIZE],
            start: 0,
            count: 0,
            previous: None,
        }
    }

    pub fn source(&self) -> &'src SourceBuffer {
        self.reader.source()
    }

    pub fn reader(&self) -> &TokenReader<'src> {
        &self.reader
    }

    /// The most recently consumed token.
    pub fn previous(&self) -> Option<Token<'src>> {
        self.previous
    }

    /// Number of tokens currently held in the lookahead buffer.
    pub fn buffered(&self) -> usize {
        self.count
    }

    pub fn reset(&mut self) {
        self.reader.reset();
        self.start = 0;
        self.count = 0;
        self.previous = None;
    }

    /// Take the next token, from the buffer if anything was peeked.
    pub fn consume(&mut self) -> Token<'src> {
        let token = if self.count > 0 {
            let token = self.buffer[self.start];
            self.start = (self.start + 1) % LOOKAHEAD_SIZE;
            self.count -= 1;
            token
        } else {
            self.reader.read()
        };
        self.previous = Some(token);
        token
    }

    /// Look `offset` tokens ahead without consuming anything.
    ///
    /// Once `EndOfFile` is buffered the reader is not touched again and
    /// every further offset sees that `EndOfFile`.
    pub fn peek(&mut self, offset: usize) -> Result<Token<'src>, TokenError> {
        if offset >= LOOKAHEAD_SIZE {
            return Err(TokenError::LookaheadExceeded {
                requested: offset,
                capacity: LOOKAHEAD_SIZE,
            });
        }

        while self.count <= offset && !self.eof_buffered() {
            let token = self.reader.read();
            let slot = (self.start + self.count) % LOOKAHEAD_SIZE;
            self.buffer[slot] = token;
            self.count += 1;
            tracing::trace!(slot, kind = %token.kind, "buffered lookahead token");
        }

        let index = offset.min(self.count - 1);
        Ok(self.buffer[(self.start + index) % LOOKAHEAD_SIZE])
    }

    /// Consume every remaining token, ending with (and including)
    /// `EndOfFile`.
    pub fn read_all(&mut self) -> impl Iterator<Item = Token<'src>> + '_ {
        let mut done = false;
        std::iter::from_fn(move || {
            if done {
                return None;
            }
            let token = self.consume();
            done = token.is_eof();
            Some(token)
        })
    }

    fn eof_buffered(&self) -> bool {
        self.count > 0 && self.buffer[(self.start + self.count - 1) % LOOKAHEAD_SIZE].is_eof()
    }
}
