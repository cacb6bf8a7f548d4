//! Literal rules: `$native$, $serializer$, $parser$[, $exception$]`.

use astgen_ir::{Literal, Span, TokenKind, TokenList};

use super::check_type_name;
use crate::cursor::Cursor;
use crate::{ParseError, ParseErrorKind};

const PARTS: [&str; 4] = ["native type", "serializer", "parser", "exception"];

/// Parse the right-hand side of `name <- ...` as a literal rule.
///
/// Each part is a native code block or a string literal.
pub fn parse_literal_rule(
    name: &str,
    name_span: Span,
    tokens: &TokenList,
) -> Result<Literal, ParseError> {
    check_type_name(name, name_span)?;
    let mut cursor = Cursor::new(tokens);
    let mut parts: Vec<String> = Vec::with_capacity(PARTS.len());

    loop {
        match cursor.current_kind() {
            TokenKind::NativeCode(text) | TokenKind::StringLiteral(text) => {
                parts.push(text.clone());
                cursor.advance();
            }
            TokenKind::Eof => return Err(missing_part(name, parts.len(), cursor.current_span())),
            _ => {
                let part = PARTS[parts.len().min(PARTS.len() - 1)];
                return Err(cursor.unexpected(&format!(
                    "the {part} of `{name}` as a native code block or a string literal"
                )));
            }
        }
        if !cursor.eat(&TokenKind::Comma) {
            break;
        }
        if parts.len() == PARTS.len() {
            return Err(ParseError::new(
                ParseErrorKind::TooManyLiteralParts {
                    rule: name.to_string(),
                },
                cursor.previous_span(),
            ));
        }
    }
    cursor.expect_end()?;

    let mut parts = parts.into_iter();
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(native_type), Some(serializer), Some(parser), exception) => Ok(Literal {
            type_name: name.to_string(),
            native_type,
            serializer,
            parser,
            exception,
        }),
        (_, None, _, _) => Err(missing_part(name, 1, cursor.current_span())),
        _ => Err(missing_part(name, 2, cursor.current_span())),
    }
}

#[cold]
fn missing_part(rule: &str, index: usize, span: Span) -> ParseError {
    ParseError::new(
        ParseErrorKind::ExpectedLiteralPart {
            rule: rule.to_string(),
            part: PARTS[index.min(PARTS.len() - 1)],
        },
        span,
    )
}
