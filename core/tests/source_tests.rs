use std::sync::Arc;
use std::thread;

use unitscript::errors::TokenError;
use unitscript::lexer::token::TokenKind;
use unitscript::lexer::{SourceBuffer, SrcPos, SrcSpan, TokenReader, lex};

#[test]
fn get_string_is_memoized() {
    let src = SourceBuffer::new("kilopascal");
    let span = SrcSpan::new(4, 6);
    let first = src.get_string(span);
    let second = src.get_string(span);
    assert_eq!(&*first, "pascal");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(src.cached_spans(), 1);
}

#[test]
fn out_of_range_spans_are_empty() {
    let src = SourceBuffer::new("hello");
    assert_eq!(&*src.get_string(SrcSpan::new(10, 2)), "");
    assert_eq!(src.cached_spans(), 0);
    assert_eq!(src.slice(SrcSpan::new(2, 100)), "llo");
}

#[test]
fn spans_splitting_a_character_are_empty() {
    let src = SourceBuffer::new("µm");
    assert_eq!(src.slice(SrcSpan::new(1, 1)), "");
    assert_eq!(src.slice(SrcSpan::new(0, 2)), "µ");
}

#[test]
fn token_lexeme_matches_text() {
    let src = SourceBuffer::new("speed = 3");
    let tokens = lex(&src);
    assert_eq!(&*tokens[0].lexeme(), tokens[0].text());
    assert_eq!(tokens[0].to_string(), "speed");
}

#[test]
fn pos_and_span_display() {
    assert_eq!(SrcPos::new(2, 6).to_string(), "Ln: 3 Ch: 7");
    let span = SrcSpan::new(2, 3);
    assert_eq!(span.end(), 5);
    assert_eq!(span.to_string(), "2..5");
    assert!(SrcSpan::default().is_empty());
}

#[test]
fn set_cursor_recomputes_position() {
    let src = SourceBuffer::new("ab\ncd");
    let mut reader = TokenReader::new(&src);
    reader.set_cursor(4).unwrap();
    assert_eq!(reader.position(), SrcPos::new(1, 1));
    assert_eq!(reader.read().text(), "d");
}

#[test]
fn set_cursor_rejects_offsets_past_end() {
    let src = SourceBuffer::new("ab\ncd");
    let mut reader = TokenReader::new(&src);
    assert_eq!(
        reader.set_cursor(99),
        Err(TokenError::CursorOutOfRange { offset: 99, len: 5 })
    );
    assert_eq!(reader.cursor(), 0);
}

#[test]
fn set_cursor_rejects_offset_inside_line_break_pair() {
    let src = SourceBuffer::new("a\r\nb");
    let mut reader = TokenReader::new(&src);
    assert_eq!(
        reader.set_cursor(2),
        Err(TokenError::NotCharBoundary { offset: 2 })
    );
    assert_eq!(reader.cursor(), 0);

    reader.set_cursor(3).unwrap();
    assert_eq!(reader.position(), SrcPos::new(1, 0));
    let token = reader.read();
    assert_eq!(token.text(), "b");
    assert_eq!(token.pos, SrcPos::new(1, 0));
}

#[test]
fn set_cursor_rejects_offset_inside_character() {
    let src = SourceBuffer::new("µm");
    let mut reader = TokenReader::new(&src);
    assert_eq!(
        reader.set_cursor(1),
        Err(TokenError::NotCharBoundary { offset: 1 })
    );

    reader.set_cursor(2).unwrap();
    assert_eq!(reader.position(), SrcPos::new(0, 1));
    let token = reader.read();
    assert_eq!(token.kind, TokenKind::LiteralIdentifier);
    assert_eq!(token.text(), "m");
}

#[test]
fn set_cursor_after_rejection_keeps_reading_in_place() {
    let src = SourceBuffer::new("x\n\ry");
    let mut reader = TokenReader::new(&src);
    assert_eq!(reader.read().text(), "x");
    assert!(reader.set_cursor(2).is_err());
    assert_eq!(reader.cursor(), 1);
    assert_eq!(reader.read().kind, TokenKind::LineBreak);
    assert_eq!(reader.read().pos, SrcPos::new(1, 0));
}

fn assert_shareable<T: Send + Sync>() {}

#[test]
fn source_buffer_is_shareable_across_threads() {
    assert_shareable::<SourceBuffer>();

    let src = SourceBuffer::new("12 kPa as psi");
    let tokens = lex(&src);
    let texts: Vec<String> = thread::scope(|s| {
        let handles: Vec<_> = tokens
            .iter()
            .map(|token| s.spawn(move || token.lexeme().to_string()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(texts[..4], ["12", "kPa", "as", "psi"]);
    assert_eq!(src.cached_spans(), 4);
}

#[test]
fn set_position_moves_to_line_and_column() {
    let src = SourceBuffer::new("ab\r\ncd");
    let mut reader = TokenReader::new(&src);
    reader.set_position(SrcPos::new(1, 0));
    assert_eq!(reader.cursor(), 4);
    assert_eq!(reader.read().text(), "cd");
}

#[test]
fn set_position_clamps_to_line_end() {
    let src = SourceBuffer::new("ab\ncd");
    let mut reader = TokenReader::new(&src);
    reader.set_position(SrcPos::new(0, 50));
    assert_eq!(reader.position(), SrcPos::new(0, 2));
    assert_eq!(reader.read().kind, TokenKind::LineBreak);

    reader.set_position(SrcPos::new(9, 0));
    assert_eq!(reader.position(), SrcPos::new(1, 2));
    assert!(reader.read().is_eof());
}
