use super::source::SrcPos;

/// Character-level reader over the source string that keeps the
/// zero-based line and column of its position up to date.
///
/// `\r\n`, `\n\r`, `\r` and `\n` each end exactly one line.
pub struct Cursor<'src> {
    source: &'src str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            line: 0,
            column: 0,
        }
    }

    /// Current byte position in the source.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn position(&self) -> SrcPos {
        SrcPos::new(self.line, self.column)
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.line = 0;
        self.column = 0;
    }

    /// Peek at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// Peek `offset` bytes ahead of the current position.
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.pos + offset).copied()
    }

    /// Advance past one character (or one whole line break) and return its
    /// first byte.
    pub fn advance(&mut self) -> Option<u8> {
        let bytes = self.source.as_bytes();
        let first = *bytes.get(self.pos)?;
        match line_break_len(bytes, self.pos) {
            Some(len) => {
                self.pos += len;
                self.line += 1;
                self.column = 0;
            }
            None => {
                self.pos = (self.pos + utf8_width(first)).min(bytes.len());
                self.column += 1;
            }
        }
        Some(first)
    }

    /// Advance if the current byte matches `expected`. Never used for line
    /// breaks.
    pub fn match_char(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Advance while `pred` holds for the current byte.
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    /// Return a slice of the source from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'src str {
        self.source.get(start..self.pos).unwrap_or_default()
    }

    /// Whether the cursor has reached the end.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Jump to byte offset `target`, recomputing line and column by
    /// rescanning from the start of the source. O(n).
    ///
    /// Returns `false` and leaves the cursor alone when `target` is past the
    /// end, inside a multi-byte character, or between the two bytes of a
    /// line-break pair.
    pub fn seek(&mut self, target: usize) -> bool {
        let bytes = self.source.as_bytes();
        let (mut i, mut line, mut column) = (0, 0, 0);
        while i < target && i < bytes.len() {
            match line_break_len(bytes, i) {
                Some(len) => {
                    line += 1;
                    column = 0;
                    i += len;
                }
                None => {
                    column += 1;
                    i += utf8_width(bytes[i]);
                }
            }
        }
        if i != target {
            return false;
        }
        self.pos = target;
        self.line = line;
        self.column = column;
        true
    }

    /// Move to `(line, column)`, clamping to the end of that line or to the
    /// end of the source. O(n).
    pub fn seek_position(&mut self, target: SrcPos) {
        self.reset();
        while self.line < target.line && !self.is_at_end() {
            self.advance();
        }
        while self.column < target.column
            && !self.is_at_end()
            && line_break_len(self.source.as_bytes(), self.pos).is_none()
        {
            self.advance();
        }
    }
}

/// Length of the line break starting at `i`, if any. Two-byte pairs in
/// either order count as one break.
pub(crate) fn line_break_len(bytes: &[u8], i: usize) -> Option<usize> {
    match (bytes.get(i)?, bytes.get(i + 1)) {
        (b'\r', Some(b'\n')) | (b'\n', Some(b'\r')) => Some(2),
        (b'\r' | b'\n', _) => Some(1),
        _ => None,
    }
}

fn utf8_width(first: u8) -> usize {
    match first {
        0xF0..=0xFF => 4,
        0xE0..=0xEF => 3,
        0xC0..=0xDF => 2,
        _ => 1,
    }
}
