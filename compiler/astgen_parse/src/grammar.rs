//! Grammar rules for the right-hand side of a DSL line.

mod descriptor;
mod literal;
mod node;

pub use descriptor::parse_descriptor_list;
pub use literal::parse_literal_rule;
pub use node::parse_node_rule;

use astgen_ir::Span;

use crate::{ParseError, ParseErrorKind};

/// Node and literal type names start with an upper-case letter.
pub(crate) fn check_type_name(name: &str, span: Span) -> Result<(), ParseError> {
    if name.starts_with(|c: char| c.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(ParseError::new(
            ParseErrorKind::NodeNameCapitalLetter {
                name: name.to_string(),
            },
            span,
        ))
    }
}
