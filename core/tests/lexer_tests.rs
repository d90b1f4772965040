use pretty_assertions::assert_eq;
use unitscript::lexer::token::{Keyword, OperatorKind, TokenKind};
use unitscript::lexer::{ScanOptions, SourceBuffer, SrcPos, SrcSpan, TokenReader, lex, lex_with};

fn token_kinds(source: &str) -> Vec<TokenKind> {
    let src = SourceBuffer::new(source);
    lex(&src).into_iter().map(|t| t.kind).collect()
}

fn token_texts(source: &str, options: ScanOptions) -> Vec<String> {
    let src = SourceBuffer::new(source);
    lex_with(&src, options)
        .into_iter()
        .map(|t| t.text().to_string())
        .collect()
}

fn op(kind: OperatorKind) -> TokenKind {
    TokenKind::Operator(kind)
}

#[test]
fn lex_let_binding() {
    let kinds = token_kinds("let x = 42");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Keyword(Keyword::Let),
            TokenKind::LiteralIdentifier,
            op(OperatorKind::Assign),
            TokenKind::LiteralNumeric,
            TokenKind::EndOfFile,
        ]
    );
}

#[test]
fn lex_keywords_are_case_sensitive_and_whole_words() {
    let kinds = token_kinds("true false as letx Let");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Keyword(Keyword::True),
            TokenKind::Keyword(Keyword::False),
            TokenKind::Keyword(Keyword::As),
            TokenKind::LiteralIdentifier,
            TokenKind::LiteralIdentifier,
            TokenKind::EndOfFile,
        ]
    );
}

#[test]
fn lex_numbers() {
    let texts = token_texts("12.5e-3 .5 7 5. 1E+6", ScanOptions::default());
    assert_eq!(texts, vec!["12.5e-3", ".5", "7", "5.", "1E+6", ""]);
    assert!(
        token_kinds("12.5e-3 .5 7 5. 1E+6")
            .iter()
            .take(5)
            .all(|k| *k == TokenKind::LiteralNumeric)
    );
}

#[test]
fn lex_exponent_needs_digits() {
    let src = SourceBuffer::new("1e m");
    let tokens = lex(&src);
    assert_eq!(tokens[0].text(), "1");
    assert_eq!(tokens[0].kind, TokenKind::LiteralNumeric);
    assert_eq!(tokens[1].text(), "e");
    assert_eq!(tokens[1].kind, TokenKind::LiteralIdentifier);
}

#[test]
fn lex_arithmetic_operators() {
    let kinds = token_kinds("a + b - c * d / e ^ 2");
    assert_eq!(
        kinds,
        vec![
            TokenKind::LiteralIdentifier,
            op(OperatorKind::Plus),
            TokenKind::LiteralIdentifier,
            op(OperatorKind::Minus),
            TokenKind::LiteralIdentifier,
            op(OperatorKind::Multiply),
            TokenKind::LiteralIdentifier,
            op(OperatorKind::Divide),
            TokenKind::LiteralIdentifier,
            op(OperatorKind::Pow),
            TokenKind::LiteralNumeric,
            TokenKind::EndOfFile,
        ]
    );
}

#[test]
fn lex_comparison_operators_longest_match() {
    let kinds = token_kinds("== != <= >= < > = ! || &&");
    assert_eq!(
        kinds,
        vec![
            op(OperatorKind::Equal),
            op(OperatorKind::NotEqual),
            op(OperatorKind::LessEqual),
            op(OperatorKind::GreaterEqual),
            op(OperatorKind::Less),
            op(OperatorKind::Greater),
            op(OperatorKind::Assign),
            op(OperatorKind::Not),
            op(OperatorKind::Or),
            op(OperatorKind::And),
            TokenKind::EndOfFile,
        ]
    );
}

#[test]
fn lex_double_equal_is_one_token() {
    let src = SourceBuffer::new("==");
    let tokens = lex(&src);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, op(OperatorKind::Equal));
    assert_eq!(tokens[0].span, SrcSpan::new(0, 2));
}

#[test]
fn lex_lone_pipe_and_ampersand_are_undefined() {
    let src = SourceBuffer::new("a|b&");
    let tokens = lex(&src);
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::LiteralIdentifier,
            TokenKind::Undefined,
            TokenKind::LiteralIdentifier,
            TokenKind::Undefined,
            TokenKind::EndOfFile,
        ]
    );
    assert_eq!(tokens[1].span.len, 1);
    assert_eq!(tokens[3].span.len, 1);
}

#[test]
fn lex_brackets() {
    let kinds = token_kinds("([{}])");
    assert_eq!(
        kinds,
        vec![
            TokenKind::OpenParen,
            TokenKind::OpenSquare,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::CloseSquare,
            TokenKind::CloseParen,
            TokenKind::EndOfFile,
        ]
    );
}

#[test]
fn lex_line_break_pairs_count_once() {
    for text in ["a\r\nb", "a\n\rb"] {
        let src = SourceBuffer::new(text);
        let tokens = lex(&src);
        assert_eq!(tokens[1].kind, TokenKind::LineBreak);
        assert_eq!(tokens[1].span.len, 2);
        assert_eq!(tokens[1].pos, SrcPos::new(0, 1));
        assert_eq!(tokens[2].pos, SrcPos::new(1, 0));
    }
}

#[test]
fn lex_repeated_carriage_returns_are_separate_breaks() {
    let kinds = token_kinds("a\r\rb");
    assert_eq!(
        kinds,
        vec![
            TokenKind::LiteralIdentifier,
            TokenKind::LineBreak,
            TokenKind::LineBreak,
            TokenKind::LiteralIdentifier,
            TokenKind::EndOfFile,
        ]
    );
}

#[test]
fn lex_tabs_are_tokens() {
    let src = SourceBuffer::new("a\tb");
    let tokens = lex(&src);
    assert_eq!(tokens[1].kind, TokenKind::TabBreak);
    assert_eq!(tokens[2].pos, SrcPos::new(0, 2));
}

#[test]
fn lex_positions_track_lines_and_columns() {
    let src = SourceBuffer::new("x = 1\n  speed");
    let tokens = lex(&src);
    let speed = tokens
        .iter()
        .find(|t| t.text() == "speed")
        .expect("identifier present");
    assert_eq!(speed.pos, SrcPos::new(1, 2));
    assert_eq!(speed.pos.to_string(), "Ln: 2 Ch: 3");
}

#[test]
fn lex_columns_count_characters() {
    let src = SourceBuffer::new("µF");
    let tokens = lex(&src);
    assert_eq!(tokens[0].kind, TokenKind::Undefined);
    assert_eq!(tokens[0].text(), "µ");
    assert_eq!(tokens[1].text(), "F");
    assert_eq!(tokens[1].pos, SrcPos::new(0, 1));
    assert_eq!(tokens[1].span.start, 2);
}

#[test]
fn lex_quotes_are_undefined_without_string_mode() {
    let kinds = token_kinds("\"a\"");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Undefined,
            TokenKind::LiteralIdentifier,
            TokenKind::Undefined,
            TokenKind::EndOfFile,
        ]
    );
}

#[test]
fn lex_quoted_strings() {
    let src = SourceBuffer::new("\"abc\" 'd'");
    let tokens = lex_with(&src, ScanOptions::new().with_quoted_strings(false));
    assert_eq!(tokens[0].kind, TokenKind::LiteralString);
    assert_eq!(tokens[0].text(), "abc");
    assert_eq!(tokens[0].span, SrcSpan::new(1, 3));
    assert_eq!(tokens[0].pos, SrcPos::new(0, 1));
    assert_eq!(tokens[1].kind, TokenKind::LiteralString);
    assert_eq!(tokens[1].text(), "d");
    assert_eq!(tokens[2].kind, TokenKind::EndOfFile);
}

#[test]
fn lex_string_escapes() {
    let texts = token_texts(
        r#""a\"b" "\x41µ\n""#,
        ScanOptions::new().with_quoted_strings(true),
    );
    assert_eq!(texts, vec![r#"a\"b"#, r"\x41µ\n", ""]);
}

#[test]
fn lex_comments_when_enabled() {
    let options = ScanOptions::new().with_comments(true);
    let src = SourceBuffer::new("1 // note\n/* a\n b */ x");
    let tokens = lex_with(&src, options);
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::LiteralNumeric,
            TokenKind::LineBreak,
            TokenKind::LiteralIdentifier,
            TokenKind::EndOfFile,
        ]
    );
    assert_eq!(tokens[2].pos, SrcPos::new(2, 6));
}

#[test]
fn lex_slashes_without_comment_mode() {
    let kinds = token_kinds("1 // x");
    assert_eq!(
        kinds,
        vec![
            TokenKind::LiteralNumeric,
            op(OperatorKind::Divide),
            op(OperatorKind::Divide),
            TokenKind::LiteralIdentifier,
            TokenKind::EndOfFile,
        ]
    );
}

#[test]
fn reader_iterator_stops_before_eof() {
    let src = SourceBuffer::new("a b c");
    assert_eq!(TokenReader::new(&src).count(), 3);
}

#[test]
fn reader_keeps_returning_eof() {
    let src = SourceBuffer::new("a");
    let mut reader = TokenReader::new(&src);
    reader.read();
    assert!(reader.read().is_eof());
    assert!(reader.read().is_eof());
}

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(token_kinds(""), vec![TokenKind::EndOfFile]);
    assert_eq!(token_kinds("   "), vec![TokenKind::EndOfFile]);
}

#[test]
fn scan_options_deserialize() {
    let options: ScanOptions = serde_json::from_str(r#"{ "comments": true }"#).unwrap();
    assert_eq!(options, ScanOptions::new().with_comments(true));
    assert!(serde_json::from_str::<ScanOptions>(r#"{ "colour": true }"#).is_err());
}
