use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

/// Zero-based line and column. Displayed one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SrcPos {
    pub line: usize,
    pub column: usize,
}

impl SrcPos {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SrcPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ln: {} Ch: {}", self.line + 1, self.column + 1)
    }
}

/// Byte range in a [`SourceBuffer`], stored as start offset and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SrcSpan {
    pub start: usize,
    pub len: usize,
}

impl SrcSpan {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    pub fn end(&self) -> usize {
        self.start.saturating_add(self.len)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for SrcSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

impl From<SrcSpan> for miette::SourceSpan {
    fn from(span: SrcSpan) -> Self {
        (span.start, span.len).into()
    }
}

/// Immutable script text plus a memo of every span materialized from it.
///
/// Tokens borrow the buffer instead of copying text, so the buffer must
/// outlive every token read from it. The memo is never evicted and sits
/// behind a lock, so a shared `&SourceBuffer` (and the tokens borrowing it)
/// may be read from several threads.
pub struct SourceBuffer {
    content: String,
    cache: RwLock<HashMap<SrcSpan, Arc<str>>>,
}

impl SourceBuffer {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Borrow the text under `span`, clamped to the buffer.
    ///
    /// Never fails: a start past the end, or a span that would split a
    /// UTF-8 character, yields `""`.
    pub fn slice(&self, span: SrcSpan) -> &str {
        let max = self.content.len();
        if span.start >= max {
            return "";
        }
        let end = span.end().min(max);
        self.content.get(span.start..end).unwrap_or_default()
    }

    /// Materialize the text under `span`, reusing the cached copy when the
    /// same span was requested before.
    pub fn get_string(&self, span: SrcSpan) -> Arc<str> {
        if let Some(cached) = self.cache.read().get(&span) {
            return Arc::clone(cached);
        }

        let slice = self.slice(span);
        if slice.is_empty() {
            return Arc::from("");
        }

        let mut cache = self.cache.write();
        Arc::clone(cache.entry(span).or_insert_with(|| Arc::from(slice)))
    }

    /// Number of distinct spans materialized so far.
    pub fn cached_spans(&self) -> usize {
        self.cache.read().len()
    }
}

impl fmt::Debug for SourceBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceBuffer")
            .field("len", &self.content.len())
            .field("cached_spans", &self.cached_spans())
            .finish()
    }
}

impl fmt::Display for SourceBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}
