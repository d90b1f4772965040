use serde::Deserialize;

/// Optional lexer modes. Everything is off by default, which gives the
/// plain engineering-script token set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanOptions {
    /// `"` and `'` open string literals.
    pub quoted_strings: bool,
    /// Backslash escapes are recognised inside string literals.
    pub escapes: bool,
    /// `//` line comments and `/* */` block comments are skipped.
    pub comments: bool,
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quoted_strings(mut self, escapes: bool) -> Self {
        self.quoted_strings = true;
        self.escapes = escapes;
        self
    }

    pub fn with_comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }
}
