#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use astgen_lexer::tokenize;
use pretty_assertions::assert_eq;

#[test]
fn advance_stops_at_eof() {
    let tokens = tokenize("A").unwrap();
    let mut cursor = Cursor::new(&tokens);
    assert!(cursor.check_ident());
    cursor.advance();
    assert!(cursor.is_at_end());
    cursor.advance();
    assert!(cursor.is_at_end());
}

#[test]
fn eat_and_peek() {
    let tokens = tokenize("A | B").unwrap();
    let mut cursor = Cursor::new(&tokens);
    assert_eq!(cursor.peek_next_kind(), &TokenKind::VerticalLine);
    assert!(!cursor.eat(&TokenKind::Comma));
    assert_eq!(cursor.expect_ident("a type name").unwrap(), "A");
    assert!(cursor.eat(&TokenKind::VerticalLine));
    assert_eq!(cursor.previous_span(), Span::new(2, 3));
}

#[test]
fn expect_reports_found_token() {
    let tokens = tokenize("A").unwrap();
    let mut cursor = Cursor::new(&tokens);
    let err = cursor.expect(&TokenKind::Comma).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: "`,`".to_string(),
            found: "identifier `A`".to_string(),
        }
    );
    assert_eq!(err.span, Span::new(0, 1));
}

#[test]
fn empty_list_reads_as_eof() {
    let tokens = TokenList::new();
    let mut cursor = Cursor::new(&tokens);
    assert!(cursor.is_at_end());
    assert_eq!(cursor.advance().kind, TokenKind::Eof);
    assert_eq!(cursor.peek_next_kind(), &TokenKind::Eof);
    assert_eq!(cursor.previous_span(), Span::DUMMY);
}
