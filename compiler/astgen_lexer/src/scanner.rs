//! Lazy scanner over one line of DSL text.

use astgen_ir::{Span, Token, TokenKind, TokenList};
use logos::Logos;

use crate::raw_token::{RawError, RawToken};
use crate::LexError;

/// Produces tokens one at a time.
///
/// The scan position inside the underlying logos lexer is the only mutable
/// state. Spans are reported relative to the start of the line, shifted by
/// the offset given at construction.
pub struct Scanner<'src> {
    source: &'src str,
    offset: u32,
    lexer: logos::Lexer<'src, RawToken>,
    finished: bool,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_offset(source, 0)
    }

    /// Scan `source`, which starts `offset` bytes into its line.
    pub fn with_offset(source: &'src str, offset: u32) -> Self {
        Scanner {
            source,
            offset,
            lexer: RawToken::lexer(source),
            finished: false,
        }
    }

    /// The next token, or [`TokenKind::Eof`] once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let Some(result) = self.lexer.next() else {
            let end = Span::from_range(self.source.len()..self.source.len()).shifted(self.offset);
            return Ok(Token::new(TokenKind::Eof, end));
        };

        let range = self.lexer.span();
        let span = Span::from_range(range.clone()).shifted(self.offset);
        match result {
            Ok(raw) => Ok(Token::new(self.convert(raw), span)),
            Err(error) => Err(self.lex_error(error, range.start, span)),
        }
    }

    fn convert(&self, raw: RawToken) -> TokenKind {
        match raw {
            RawToken::Comma => TokenKind::Comma,
            RawToken::At => TokenKind::AtSign,
            RawToken::Question => TokenKind::Question,
            RawToken::Star => TokenKind::Star,
            RawToken::Pipe => TokenKind::VerticalLine,
            RawToken::LParen => TokenKind::LeftParen,
            RawToken::RParen => TokenKind::RightParen,
            RawToken::Lt => TokenKind::LeftAngle,
            RawToken::Gt => TokenKind::RightAngle,
            RawToken::Hole(hole) => TokenKind::HoleMarker(hole),
            RawToken::Number(value) => TokenKind::Number(value),
            RawToken::String(text) => TokenKind::StringLiteral(text),
            RawToken::NativeCode(code) => TokenKind::NativeCode(code),
            RawToken::Ident => TokenKind::Identifier(self.lexer.slice().to_string()),
        }
    }

    #[cold]
    fn lex_error(&self, error: RawError, start: usize, span: Span) -> LexError {
        match error {
            RawError::UnknownSymbol => {
                let symbol = self.source[start..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                let width = u32::try_from(symbol.len_utf8()).unwrap_or(1);
                LexError::unknown_symbol(Span::new(span.start, span.start + width), symbol)
            }
            RawError::UnterminatedString => LexError::unterminated_string(span),
            RawError::UnterminatedNativeCode => LexError::unterminated_native_code(span),
            RawError::ExpectedHoleNumber => LexError::expected_hole_number(span),
            RawError::InvalidHole => LexError::invalid_hole(span),
            RawError::NumberOverflow => {
                LexError::number_overflow(span, self.lexer.slice().trim_start_matches('#'))
            }
        }
    }
}

/// Yields every token before [`TokenKind::Eof`]. Stops after the first error.
impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::Eof => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(error) => {
                self.finished = true;
                Some(Err(error))
            }
        }
    }
}

/// Scan a whole line into a token list ending in [`TokenKind::Eof`].
pub fn tokenize(source: &str) -> Result<TokenList, LexError> {
    tokenize_at(source, 0)
}

/// Like [`tokenize`], for text that starts `offset` bytes into its line.
pub fn tokenize_at(source: &str, offset: u32) -> Result<TokenList, LexError> {
    let mut scanner = Scanner::with_offset(source, offset);
    let mut tokens = TokenList::new();
    loop {
        let token = scanner.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
