use std::fmt;

use crate::lexer::source::{SrcPos, SrcSpan};
use crate::lexer::token::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub pos: SrcPos,
    pub span: SrcSpan,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.severity, self.message, self.pos)
    }
}

/// Append-only list of located messages gathered during one compilation.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, severity: Severity, message: impl Into<String>, pos: SrcPos, span: SrcSpan) {
        let message = message.into();
        tracing::trace!(%severity, %pos, message = message.as_str(), "diagnostic");
        self.items.push(Diagnostic {
            severity,
            message,
            pos,
            span,
        });
    }

    /// Report at the location of `token`.
    pub fn report_token(&mut self, severity: Severity, message: impl Into<String>, token: &Token<'_>) {
        self.report(severity, message, token.pos, token.span);
    }

    /// One error per `Error` token in `tokens`. Returns how many were added.
    pub fn collect_scan_errors<'a, 'src: 'a>(
        &mut self,
        tokens: impl IntoIterator<Item = &'a Token<'src>>,
    ) -> usize {
        let before = self.items.len();
        for token in tokens {
            if let Some(kind) = token.scan_error() {
                self.report_token(Severity::Error, kind.to_string(), token);
            }
        }
        self.items.len() - before
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn error_count(&self) -> usize {
        self.items.iter().filter(|d| d.severity == Severity::Error).count()
    }

    pub fn items(&self) -> &[Diagnostic] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
