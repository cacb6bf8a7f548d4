//! Node rules: a children list or, for abstract nodes, `A | B | ...`.

use astgen_ir::{Child, Node, Span, TokenKind, TokenList};
use rustc_hash::FxHashSet;

use super::check_type_name;
use super::descriptor::{descriptor_list, SpannedChild};
use crate::cursor::Cursor;
use crate::{ParseError, ParseErrorKind};

/// Parse the right-hand side of `name <- ...` as a node rule.
///
/// An identifier followed by `|` selects the abstract form.
pub fn parse_node_rule(name: &str, name_span: Span, tokens: &TokenList) -> Result<Node, ParseError> {
    check_type_name(name, name_span)?;
    let mut cursor = Cursor::new(tokens);
    if cursor.check_ident() && cursor.peek_next_kind() == &TokenKind::VerticalLine {
        let subtypes = alternatives(&mut cursor, name)?;
        return Ok(Node::abstract_node(name, subtypes));
    }

    let children = descriptor_list(&mut cursor)?;
    cursor.expect_end()?;
    check_children(name, &children, cursor.current_span())?;
    Ok(Node::ordinary(
        name,
        children.into_iter().map(|spanned| spanned.child).collect(),
    ))
}

fn alternatives(cursor: &mut Cursor<'_>, rule: &str) -> Result<Vec<String>, ParseError> {
    let mut seen = FxHashSet::default();
    let mut subtypes = Vec::new();
    loop {
        let span = cursor.current_span();
        let subtype = cursor.expect_ident("a type name")?;
        check_type_name(subtype, span)?;
        if !seen.insert(subtype) {
            return Err(ParseError::new(
                ParseErrorKind::DuplicateAlternative {
                    rule: rule.to_string(),
                    name: subtype.to_string(),
                },
                span,
            ));
        }
        subtypes.push(subtype.to_string());
        if !cursor.eat(&TokenKind::VerticalLine) {
            break;
        }
    }
    cursor.expect_end()?;
    Ok(subtypes)
}

/// Rule-level checks for a plain children list.
fn check_children(rule: &str, children: &[SpannedChild], end: Span) -> Result<(), ParseError> {
    if children.is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::ExpectedDescriptor {
                rule: rule.to_string(),
            },
            end,
        ));
    }

    if children.len() > 1 {
        let list = children
            .iter()
            .find(|spanned| spanned.child.descriptor().is_some_and(|d| d.is_list()));
        if let Some(list) = list {
            return Err(ParseError::new(
                ParseErrorKind::OnlyOneListDescriptor {
                    rule: rule.to_string(),
                },
                list.span,
            ));
        }
    }

    for spanned in children {
        match &spanned.child {
            Child::Empty if children.len() > 1 => {
                return Err(ParseError::new(
                    ParseErrorKind::EmptyNotAlone {
                        rule: rule.to_string(),
                    },
                    spanned.span,
                ));
            }
            Child::Empty => {}
            Child::Descriptor(descriptor) => {
                if descriptor.is_decorated() {
                    return Err(ParseError::new(
                        ParseErrorKind::ExpectedTaggedName {
                            descriptor: descriptor.to_string(),
                        },
                        spanned.span,
                    ));
                }
                check_type_name(&descriptor.type_name, spanned.span)?;
            }
        }
    }
    Ok(())
}
