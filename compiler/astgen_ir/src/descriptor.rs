//! Descriptors: child references on the right-hand side of a node rule.

use std::fmt;

use crate::token::write_quoted;
use crate::Hole;

/// How many times a child may occur.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum DescriptorAttribute {
    /// Exactly once.
    #[default]
    Ordinary,
    /// Zero or one time (`Type?`).
    Optional,
    /// Any number of times (`Type*`).
    List,
}

/// Data associated with a descriptor (`Type<#1>` or `Type<"text">`).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Data {
    Hole(Hole),
    Text(String),
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Data::Hole(hole) => write!(f, "{hole}"),
            Data::Text(text) => write_quoted(f, text),
        }
    }
}

/// A single child reference: `[tag@]Type[(parameters)][<data>][?|*]`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Descriptor {
    pub tag: Option<String>,
    pub type_name: String,
    pub attribute: DescriptorAttribute,
    pub parameters: Vec<Descriptor>,
    pub data: Option<Data>,
}

impl Descriptor {
    /// A plain descriptor: no tag, no parameters, no data.
    pub fn new(type_name: impl Into<String>, attribute: DescriptorAttribute) -> Self {
        Descriptor {
            tag: None,
            type_name: type_name.into(),
            attribute,
            parameters: Vec::new(),
            data: None,
        }
    }

    /// Whether the descriptor carries anything beyond type and attribute.
    ///
    /// Such descriptors belong to composition forms and are rejected in
    /// plain children lists.
    pub fn is_decorated(&self) -> bool {
        self.tag.is_some() || !self.parameters.is_empty() || self.data.is_some()
    }

    #[inline]
    pub fn is_optional(&self) -> bool {
        self.attribute == DescriptorAttribute::Optional
    }

    #[inline]
    pub fn is_list(&self) -> bool {
        self.attribute == DescriptorAttribute::List
    }

    /// A child that has to be present for a builder to be valid.
    #[inline]
    pub fn is_required(&self) -> bool {
        self.attribute == DescriptorAttribute::Ordinary
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = &self.tag {
            write!(f, "{tag}@")?;
        }
        f.write_str(&self.type_name)?;
        if !self.parameters.is_empty() {
            f.write_str("(")?;
            for (index, parameter) in self.parameters.iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{parameter}")?;
            }
            f.write_str(")")?;
        }
        if let Some(data) = &self.data {
            write!(f, "<{data}>")?;
        }
        match self.attribute {
            DescriptorAttribute::Ordinary => Ok(()),
            DescriptorAttribute::Optional => f.write_str("?"),
            DescriptorAttribute::List => f.write_str("*"),
        }
    }
}

/// One entry of a node rule's children list.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Child {
    Descriptor(Descriptor),
    /// `0`: the node has no children. Always the sole entry.
    Empty,
}

impl Child {
    /// The descriptor, unless this is the Empty sentinel.
    pub fn descriptor(&self) -> Option<&Descriptor> {
        match self {
            Child::Descriptor(descriptor) => Some(descriptor),
            Child::Empty => None,
        }
    }
}

impl fmt::Display for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Child::Descriptor(descriptor) => write!(f, "{descriptor}"),
            Child::Empty => f.write_str("0"),
        }
    }
}
