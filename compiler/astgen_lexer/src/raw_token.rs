//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! conversion into [`astgen_ir::TokenKind`]. Single-character tokens live
//! here once, as a static table generated by the derive.

use astgen_ir::Hole;
use logos::{Lexer, Logos};

use crate::escape::resolve_escape;

/// Failure reported by a raw token callback.
///
/// `UnknownSymbol` is the default: logos produces it for input matching no
/// token at all.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(crate) enum RawError {
    #[default]
    UnknownSymbol,
    UnterminatedString,
    UnterminatedNativeCode,
    ExpectedHoleNumber,
    InvalidHole,
    NumberOverflow,
}

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = RawError)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[token(",")]
    Comma,
    #[token("@")]
    At,
    #[token("?")]
    Question,
    #[token("*")]
    Star,
    #[token("|")]
    Pipe,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    #[regex(r"#[0-9]*", lex_hole)]
    Hole(Hole),

    #[regex(r"[0-9]+", |lex| lex.slice().parse::<u32>().map_err(|_| RawError::NumberOverflow))]
    Number(u32),

    #[token("\"", lex_string)]
    String(String),

    #[token("$", lex_native_code)]
    NativeCode(String),

    #[regex(r"[A-Za-z][A-Za-z0-9]*")]
    Ident,
}

fn lex_hole(lex: &mut Lexer<'_, RawToken>) -> Result<Hole, RawError> {
    let digits = &lex.slice()[1..];
    if digits.is_empty() {
        return Err(RawError::ExpectedHoleNumber);
    }
    let number = digits
        .parse::<u32>()
        .map_err(|_| RawError::NumberOverflow)?;
    Hole::new(number).ok_or(RawError::InvalidHole)
}

/// Consume a string literal after its opening quote, unescaping as it goes.
fn lex_string(lex: &mut Lexer<'_, RawToken>) -> Result<String, RawError> {
    let rest = lex.remainder();
    let mut text = String::new();
    let mut chars = rest.char_indices();

    while let Some((index, c)) = chars.next() {
        match c {
            '"' => {
                lex.bump(index + 1);
                return Ok(text);
            }
            '\\' => match chars.next() {
                Some((_, escaped)) => text.push(resolve_escape(escaped)),
                None => break,
            },
            other => text.push(other),
        }
    }

    lex.bump(rest.len());
    Err(RawError::UnterminatedString)
}

/// Capture everything up to the closing `$` verbatim.
fn lex_native_code(lex: &mut Lexer<'_, RawToken>) -> Result<String, RawError> {
    let rest = lex.remainder();
    match rest.find('$') {
        Some(end) => {
            lex.bump(end + 1);
            Ok(rest[..end].to_string())
        }
        None => {
            lex.bump(rest.len());
            Err(RawError::UnterminatedNativeCode)
        }
    }
}
