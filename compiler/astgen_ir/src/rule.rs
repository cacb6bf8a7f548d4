//! Parsed DSL rules.
//!
//! A rule is one `Left <- Right` line. Node rules describe the shape of a
//! node type; literal rules describe how a leaf node's value is encoded.

use std::fmt;

use crate::Child;

/// A node rule.
///
/// Ordinary nodes list their children. Abstract nodes list their subtypes
/// (`Expression <- Addition | Subtraction`) and declare no children: they only
/// anchor a hierarchy. Each subtype gets the abstract node as a base type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Node {
    pub type_name: String,
    pub children: Vec<Child>,
    pub subtypes: Vec<String>,
}

impl Node {
    /// An ordinary node with the given children.
    pub fn ordinary(type_name: impl Into<String>, children: Vec<Child>) -> Self {
        Node {
            type_name: type_name.into(),
            children,
            subtypes: Vec::new(),
        }
    }

    /// An abstract node grouping the given subtypes.
    pub fn abstract_node(type_name: impl Into<String>, subtypes: Vec<String>) -> Self {
        Node {
            type_name: type_name.into(),
            children: Vec::new(),
            subtypes,
        }
    }

    #[inline]
    pub fn is_abstract(&self) -> bool {
        !self.subtypes.is_empty()
    }

    /// Whether the rule is `Name <- 0`.
    pub fn is_empty(&self) -> bool {
        matches!(self.children.as_slice(), [Child::Empty])
    }

    /// Whether the only child is a list descriptor.
    pub fn has_list_child(&self) -> bool {
        self.children
            .iter()
            .filter_map(Child::descriptor)
            .any(crate::Descriptor::is_list)
    }

    /// Type names this rule refers to: child types, then subtypes.
    pub fn referenced_types(&self) -> impl Iterator<Item = &str> {
        self.children
            .iter()
            .filter_map(Child::descriptor)
            .map(|descriptor| descriptor.type_name.as_str())
            .chain(self.subtypes.iter().map(String::as_str))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <- ", self.type_name)?;
        if self.is_abstract() {
            return f.write_str(&self.subtypes.join(" | "));
        }
        for (index, child) in self.children.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{child}")?;
        }
        Ok(())
    }
}

/// A literal rule: a leaf node storing a native value.
///
/// `IntegerLiteral <- $int$, $String.valueOf(#)$, $Integer.parseInt(#)$, $NumberFormatException$`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Literal {
    pub type_name: String,
    /// Native type of the stored value.
    pub native_type: String,
    /// Template converting the stored value to a string.
    pub serializer: String,
    /// Template converting a string to the stored value.
    pub parser: String,
    /// Exception thrown by the parser template on invalid input.
    pub exception: Option<String>,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} <- ${}$, ${}$, ${}$",
            self.type_name, self.native_type, self.serializer, self.parser
        )?;
        if let Some(exception) = &self.exception {
            write!(f, ", ${exception}$")?;
        }
        Ok(())
    }
}

/// Any parsed rule.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Rule {
    Node(Node),
    Literal(Literal),
}

impl Rule {
    /// The type the rule declares.
    pub fn type_name(&self) -> &str {
        match self {
            Rule::Node(node) => &node.type_name,
            Rule::Literal(literal) => &literal.type_name,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Rule::Node(node) => Some(node),
            Rule::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Rule::Literal(literal) => Some(literal),
            Rule::Node(_) => None,
        }
    }
}

impl From<Node> for Rule {
    fn from(node: Node) -> Self {
        Rule::Node(node)
    }
}

impl From<Literal> for Rule {
    fn from(literal: Literal) -> Self {
        Rule::Literal(literal)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Node(node) => write!(f, "{node}"),
            Rule::Literal(literal) => write!(f, "{literal}"),
        }
    }
}
