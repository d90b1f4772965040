use std::borrow::Cow;

use owo_colors::OwoColorize;
use unitscript::lexer::{self, token::TokenKind};
use unitscript::{ScanOptions, SourceBuffer, UnitRegistry};

/// Colour each token of `line`; text between tokens is copied as is.
pub fn highlight_line<'l>(registry: &UnitRegistry, options: ScanOptions, line: &'l str) -> Cow<'l, str> {
    if line.starts_with('.') {
        return Cow::Owned(line.bright_blue().to_string());
    }

    let src = SourceBuffer::new(line);
    let mut out = String::with_capacity(line.len() * 2);
    let mut last = 0;

    for token in lexer::lex_with(&src, options) {
        out.push_str(line.get(last..token.span.start).unwrap_or_default());
        let text = token.text();
        match token.kind {
            TokenKind::LiteralNumeric => out.push_str(&text.yellow().to_string()),
            TokenKind::Keyword(_) => out.push_str(&text.blue().bold().to_string()),
            TokenKind::Operator(_) => out.push_str(&text.bright_black().to_string()),
            TokenKind::LiteralString => out.push_str(&text.green().to_string()),
            TokenKind::Error(_) => out.push_str(&text.red().underline().to_string()),
            TokenKind::LiteralIdentifier if registry.contains(text) => {
                out.push_str(&text.cyan().to_string());
            }
            _ => out.push_str(text),
        }
        last = last.max(token.span.end());
    }
    out.push_str(line.get(last..).unwrap_or_default());
    Cow::Owned(out)
}

pub fn highlight_prompt(prompt: &str) -> Cow<'_, str> {
    if prompt == "> " {
        return Cow::Owned(format!("{} ", ">".bright_green().bold()));
    }
    if prompt == "... " {
        return Cow::Owned(format!("{} ", "...".yellow().bold()));
    }
    Cow::Borrowed(prompt)
}

pub fn highlight_hint(hint: &str) -> Cow<'_, str> {
    Cow::Owned(hint.bright_black().to_string())
}
