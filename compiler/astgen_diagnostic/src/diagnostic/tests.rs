use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E1003, Component::Parser)
        .with_message("only one list descriptor is allowed")
        .with_line(4)
        .with_span(Span::new(10, 21))
        .with_note("a list descriptor must be the only child");

    assert_eq!(diag.code, ErrorCode::E1003);
    assert_eq!(diag.component, Component::Parser);
    assert_eq!(diag.line, Some(4));
    assert_eq!(diag.span, Some(Span::new(10, 21)));
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn test_headline() {
    let diag = Diagnostic::error(ErrorCode::E2002, Component::Analyzer)
        .with_message("cyclic hierarchy involving `A`");
    assert_eq!(
        diag.headline(),
        "error[E2002] analyzer: cyclic hierarchy involving `A`"
    );
}

#[test]
fn test_display_with_location_and_notes() {
    let diag = Diagnostic::error(ErrorCode::E0001, Component::Scanner)
        .with_message("unterminated string literal")
        .with_line(2)
        .with_span(Span::new(2, 7))
        .with_note("add a closing `\"`");
    assert_eq!(
        diag.to_string(),
        "error[E0001] scanner: unterminated string literal\n  --> line 2, 2..7\n  = note: add a closing `\"`"
    );
}

#[test]
fn test_display_without_location() {
    let diag = Diagnostic::error(ErrorCode::E3002, Component::Generator).with_message("hole #3");
    assert_eq!(diag.to_string(), "error[E3002] generator: hole #3");
}
