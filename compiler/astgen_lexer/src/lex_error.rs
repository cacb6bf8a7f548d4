//! Scanner error types.

use astgen_diagnostic::{Component, Diagnostic, ErrorCode};
use astgen_ir::Span;
use thiserror::Error;

/// A scanner error with the location of the offending input.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind}")]
pub struct LexError {
    /// Location inside the scanned line.
    pub span: Span,
    pub kind: LexErrorKind,
}

/// What kind of scanner error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// A character that starts no token.
    #[error("unknown symbol `{symbol}` at offset {offset}")]
    UnknownSymbol { symbol: char, offset: u32 },
    /// Missing closing `"`.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// Missing closing `$`.
    #[error("unterminated native code block")]
    UnterminatedNativeCode,
    /// `#` not followed by digits.
    #[error("expected a number after `#`")]
    ExpectedHoleNumber,
    /// `#0`.
    #[error("holes are numbered from 1")]
    InvalidHole,
    /// Digits that do not fit in 32 bits.
    #[error("number `{text}` is too large")]
    NumberOverflow { text: String },
}

impl LexError {
    #[cold]
    pub fn unknown_symbol(span: Span, symbol: char) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnknownSymbol {
                symbol,
                offset: span.start,
            },
        }
    }

    #[cold]
    pub fn unterminated_string(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnterminatedString,
        }
    }

    #[cold]
    pub fn unterminated_native_code(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnterminatedNativeCode,
        }
    }

    #[cold]
    pub fn expected_hole_number(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::ExpectedHoleNumber,
        }
    }

    #[cold]
    pub fn invalid_hole(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::InvalidHole,
        }
    }

    #[cold]
    pub fn number_overflow(span: Span, text: impl Into<String>) -> Self {
        Self {
            span,
            kind: LexErrorKind::NumberOverflow { text: text.into() },
        }
    }

    pub fn component(&self) -> Component {
        Component::Scanner
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnknownSymbol { .. } => ErrorCode::E0002,
            LexErrorKind::ExpectedHoleNumber => ErrorCode::E0003,
            LexErrorKind::InvalidHole => ErrorCode::E0004,
            LexErrorKind::UnterminatedNativeCode => ErrorCode::E0005,
            LexErrorKind::NumberOverflow { .. } => ErrorCode::E0006,
        }
    }

    /// Convert to a diagnostic without a line number.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.code(), self.component())
            .with_message(self.to_string())
            .with_span(self.span);
        match self.kind {
            LexErrorKind::UnterminatedString => diagnostic.with_note("add a closing `\"`"),
            LexErrorKind::UnterminatedNativeCode => diagnostic.with_note("add a closing `$`"),
            _ => diagnostic,
        }
    }
}
