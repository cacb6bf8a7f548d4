//! Descriptor lists: `0` or `[tag@]Type[(params)][<data>][?|*]`, comma separated.

use astgen_ir::{Child, Data, Descriptor, DescriptorAttribute, Span, TokenKind, TokenList};

use crate::cursor::Cursor;
use crate::ParseError;

/// A child together with the tokens it was parsed from.
pub(crate) struct SpannedChild {
    pub(crate) child: Child,
    pub(crate) span: Span,
}

/// Parse a whole token list as a descriptor list.
///
/// No rule-level checks are made here; an empty list is valid.
pub fn parse_descriptor_list(tokens: &TokenList) -> Result<Vec<Child>, ParseError> {
    let mut cursor = Cursor::new(tokens);
    let children = descriptor_list(&mut cursor)?;
    cursor.expect_end()?;
    Ok(children.into_iter().map(|spanned| spanned.child).collect())
}

pub(crate) fn descriptor_list(cursor: &mut Cursor<'_>) -> Result<Vec<SpannedChild>, ParseError> {
    let mut children = Vec::new();
    if cursor.is_at_end() {
        return Ok(children);
    }
    loop {
        let start = cursor.current_span();
        let child = child(cursor)?;
        children.push(SpannedChild {
            child,
            span: start.merge(cursor.previous_span()),
        });
        if !cursor.eat(&TokenKind::Comma) {
            return Ok(children);
        }
    }
}

fn child(cursor: &mut Cursor<'_>) -> Result<Child, ParseError> {
    if cursor.check(&TokenKind::Number(0)) {
        cursor.advance();
        return Ok(Child::Empty);
    }
    descriptor(cursor).map(Child::Descriptor)
}

fn descriptor(cursor: &mut Cursor<'_>) -> Result<Descriptor, ParseError> {
    let first = cursor.expect_ident("a descriptor")?;
    let (tag, type_name) = if cursor.eat(&TokenKind::AtSign) {
        let type_name = cursor.expect_ident("a type name after `@`")?;
        (Some(first.to_string()), type_name.to_string())
    } else {
        (None, first.to_string())
    };

    let mut parameters = Vec::new();
    if cursor.eat(&TokenKind::LeftParen) {
        loop {
            parameters.push(descriptor(cursor)?);
            if !cursor.eat(&TokenKind::Comma) {
                break;
            }
        }
        cursor.expect(&TokenKind::RightParen)?;
    }

    let data = if cursor.eat(&TokenKind::LeftAngle) {
        let data = match cursor.current_kind() {
            TokenKind::HoleMarker(hole) => Data::Hole(*hole),
            TokenKind::StringLiteral(text) => Data::Text(text.clone()),
            _ => return Err(cursor.unexpected("a hole or a string literal")),
        };
        cursor.advance();
        cursor.expect(&TokenKind::RightAngle)?;
        Some(data)
    } else {
        None
    };

    let attribute = if cursor.eat(&TokenKind::Question) {
        DescriptorAttribute::Optional
    } else if cursor.eat(&TokenKind::Star) {
        DescriptorAttribute::List
    } else {
        DescriptorAttribute::Ordinary
    };

    Ok(Descriptor {
        tag,
        type_name,
        attribute,
        parameters,
        data,
    })
}
