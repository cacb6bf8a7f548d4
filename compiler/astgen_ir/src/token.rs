//! Tokens produced by the scanner.
//!
//! A token renders back to the DSL text it stands for, so error messages and
//! rule dumps can quote the source without keeping the scanned line around.

use std::fmt;
use std::ops::Index;

use crate::{Hole, Span};

/// Token kinds of the rule DSL.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// `[A-Za-z][A-Za-z0-9]*`
    Identifier(String),
    /// Unsigned decimal number; only `0` (the Empty child) is meaningful.
    Number(u32),
    /// `#n`
    HoleMarker(Hole),
    /// `"..."`, already unescaped.
    StringLiteral(String),
    /// `$...$`, raw text between the dollar signs.
    NativeCode(String),
    /// `,`
    Comma,
    /// `@`
    AtSign,
    /// `?`
    Question,
    /// `*`
    Star,
    /// `|`
    VerticalLine,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `<`
    LeftAngle,
    /// `>`
    RightAngle,
    /// End of the scanned line. Returned repeatedly once reached.
    Eof,
}

impl TokenKind {
    /// Human-readable description for "expected X, found Y" messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Eof => "end of line".to_string(),
            TokenKind::Identifier(name) => format!("identifier `{name}`"),
            TokenKind::StringLiteral(_) => "string literal".to_string(),
            TokenKind::NativeCode(_) => "native code block".to_string(),
            other => format!("`{other}`"),
        }
    }

    /// Whether this token may start a literal rule's right-hand side.
    #[inline]
    pub fn is_template(&self) -> bool {
        matches!(self, TokenKind::StringLiteral(_) | TokenKind::NativeCode(_))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier(name) => f.write_str(name),
            TokenKind::Number(value) => write!(f, "{value}"),
            TokenKind::HoleMarker(hole) => write!(f, "{hole}"),
            TokenKind::StringLiteral(text) => write_quoted(f, text),
            TokenKind::NativeCode(code) => write!(f, "${code}$"),
            TokenKind::Comma => f.write_str(","),
            TokenKind::AtSign => f.write_str("@"),
            TokenKind::Question => f.write_str("?"),
            TokenKind::Star => f.write_str("*"),
            TokenKind::VerticalLine => f.write_str("|"),
            TokenKind::LeftParen => f.write_str("("),
            TokenKind::RightParen => f.write_str(")"),
            TokenKind::LeftAngle => f.write_str("<"),
            TokenKind::RightAngle => f.write_str(">"),
            TokenKind::Eof => Ok(()),
        }
    }
}

/// Write `text` as a DSL string literal, re-escaping what the scanner unescaped.
pub(crate) fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in text.chars() {
        match c {
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            other => write!(f, "{other}")?,
        }
    }
    f.write_str("\"")
}

/// A token with its location inside the scanned line.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

/// The tokens of one line, always terminated by a single [`TokenKind::Eof`].
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    /// Append a token.
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Number of tokens, including the trailing EOF.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get a token by index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Iterate over the tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Get the tokens as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenList {
            tokens: iter.into_iter().collect(),
        }
    }
}
