//! Parse error types.
//!
//! Scanner failures are wrapped so a single error type flows out of the
//! parser, but they keep reporting the scanner as their origin.

use astgen_diagnostic::{Component, Diagnostic, ErrorCode};
use astgen_ir::Span;
use astgen_lexer::LexError;
use thiserror::Error;

/// A parse error tied to a DSL line.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Location inside the line.
    pub span: Span,
    /// 1-based line number.
    pub line: u32,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum ParseErrorKind {
    #[error(transparent)]
    Lex(LexError),
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    #[error("expected at least one descriptor: `{rule} <- ?`")]
    ExpectedDescriptor { rule: String },
    #[error("`{rule}` has a list descriptor, which must be its only child")]
    OnlyOneListDescriptor { rule: String },
    #[error("node name `{name}` must start with a capital letter")]
    NodeNameCapitalLetter { name: String },
    #[error("decorated descriptor `{descriptor}` is not allowed in a children list")]
    ExpectedTaggedName { descriptor: String },
    #[error("`0` must be the only child of `{rule}`")]
    EmptyNotAlone { rule: String },
    #[error("expected `<-`")]
    MissingArrow,
    #[error("literal `{rule}` is missing its {part}")]
    ExpectedLiteralPart { rule: String, part: &'static str },
    #[error("literal `{rule}` has more than four parts")]
    TooManyLiteralParts { rule: String },
    #[error("`{name}` appears twice in the alternatives of `{rule}`")]
    DuplicateAlternative { rule: String, name: String },
    #[error("expected a type name before `<-`, found {found}")]
    ExpectedTypeName { found: String },
    #[error("invalid language name `{name}`")]
    InvalidLanguageName { name: String },
}

impl ParseError {
    /// Create an error on line 1. [`ParseError::with_line`] moves it.
    #[cold]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError {
            kind,
            span,
            line: 1,
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    pub fn component(&self) -> Component {
        match &self.kind {
            ParseErrorKind::Lex(error) => error.component(),
            _ => Component::Parser,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match &self.kind {
            ParseErrorKind::Lex(error) => error.code(),
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedDescriptor { .. } => ErrorCode::E1002,
            ParseErrorKind::OnlyOneListDescriptor { .. } => ErrorCode::E1003,
            ParseErrorKind::NodeNameCapitalLetter { .. } => ErrorCode::E1004,
            ParseErrorKind::ExpectedTaggedName { .. } => ErrorCode::E1005,
            ParseErrorKind::EmptyNotAlone { .. } => ErrorCode::E1006,
            ParseErrorKind::MissingArrow => ErrorCode::E1007,
            ParseErrorKind::ExpectedLiteralPart { .. } => ErrorCode::E1008,
            ParseErrorKind::TooManyLiteralParts { .. } => ErrorCode::E1009,
            ParseErrorKind::DuplicateAlternative { .. } => ErrorCode::E1010,
            ParseErrorKind::ExpectedTypeName { .. } => ErrorCode::E1011,
            ParseErrorKind::InvalidLanguageName { .. } => ErrorCode::E1012,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = match &self.kind {
            ParseErrorKind::Lex(error) => error.to_diagnostic(),
            kind => Diagnostic::error(self.code(), self.component())
                .with_message(kind.to_string())
                .with_span(self.span),
        };
        let diagnostic = diagnostic.with_line(self.line);
        match &self.kind {
            ParseErrorKind::ExpectedTaggedName { .. } => {
                diagnostic.with_note("tags, parameters and data belong to composition rules")
            }
            ParseErrorKind::MissingArrow => {
                diagnostic.with_note("rules have the form `Type <- ...`")
            }
            _ => diagnostic,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(error: LexError) -> Self {
        let span = error.span;
        ParseError::new(ParseErrorKind::Lex(error), span)
    }
}
