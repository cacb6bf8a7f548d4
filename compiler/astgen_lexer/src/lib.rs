//! Scanner for the astgen rule DSL using logos.
//!
//! The scanner works on one line (or one right-hand side) at a time and
//! produces tokens on demand. Reaching the end yields [`TokenKind::Eof`]
//! repeatedly rather than an error, so callers can loop until termination.
//!
//! [`TokenKind::Eof`]: astgen_ir::TokenKind::Eof

mod escape;
mod lex_error;
mod raw_token;
mod scanner;

pub use lex_error::{LexError, LexErrorKind};
pub use scanner::{tokenize, tokenize_at, Scanner};
