//! Token cursor for navigating the token stream of one line.

use astgen_ir::{Span, Token, TokenKind, TokenList};
use tracing::trace;

use crate::{ParseError, ParseErrorKind};

/// Stands in for the trailing `Eof` of lists built without one.
static END: Token = Token {
    kind: TokenKind::Eof,
    span: Span::DUMMY,
};

/// Cursor over a token list; reads past the end see [`TokenKind::Eof`].
pub(crate) struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Get the current token.
    #[inline]
    pub(crate) fn current(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&END)
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub(crate) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Get the previous token's span.
    #[inline]
    pub(crate) fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    /// Kind of the token after the current one.
    pub(crate) fn peek_next_kind(&self) -> &'a TokenKind {
        &self.tokens.get(self.pos + 1).unwrap_or(&END).kind
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    #[inline]
    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub(crate) fn check_ident(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Identifier(_))
    }

    /// Advance to the next token and return the consumed token.
    pub(crate) fn advance(&mut self) -> &'a Token {
        let token = self.current();
        trace!(
            pos = self.pos,
            kind = %token.kind.describe(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it is `kind`.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: &TokenKind) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(&format!("`{kind}`")))
        }
    }

    /// Consume an identifier and return its text.
    pub(crate) fn expect_ident(&mut self, expected: &str) -> Result<&'a str, ParseError> {
        match self.current_kind() {
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    /// Require that the whole line has been consumed.
    pub(crate) fn expect_end(&self) -> Result<(), ParseError> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(self.unexpected("`,` or end of line"))
        }
    }

    /// Build an "expected X, found Y" error at the current token.
    #[cold]
    #[inline(never)]
    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected: expected.to_string(),
                found: self.current_kind().describe(),
            },
            self.current_span(),
        )
    }
}

#[cfg(test)]
mod tests;
