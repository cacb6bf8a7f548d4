//! The node and builder contract, split into capabilities.

use std::fmt;
use std::rc::Rc;

use astgen_ir::{Descriptor, Span};

use crate::BuildError;

/// Where a node came from in the analyzed source.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Fragment {
    /// No source location.
    #[default]
    Empty,
    Range(Span),
}

/// What a node is.
pub trait Identity {
    fn node_type(&self) -> Rc<dyn NodeType>;

    fn type_name(&self) -> String {
        self.node_type().name().to_string()
    }

    fn fragment(&self) -> Fragment;

    /// Whether the node's type is `group` or has `group` as an ancestor.
    fn belongs_to_group(&self, group: &str) -> bool {
        self.node_type().belongs_to_group(group)
    }
}

/// Ordered child nodes.
pub trait ChildrenAccess {
    fn child_count(&self) -> usize;

    fn child(&self, index: usize) -> Option<&Rc<dyn Node>>;
}

/// Associated data as text.
pub trait DataAccess {
    fn data(&self) -> &str;
}

/// A complete node.
pub trait Node: Identity + ChildrenAccess + DataAccess {}

impl<T: Identity + ChildrenAccess + DataAccess> Node for T {}

/// `Name<"data">(Child, Child)`, omitting empty parts.
impl fmt::Display for dyn Node + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name())?;
        if !self.data().is_empty() {
            write!(f, "<\"{}\">", self.data())?;
        }
        if self.child_count() > 0 {
            f.write_str("(")?;
            for index in 0..self.child_count() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                if let Some(child) = self.child(index) {
                    write!(f, "{child}")?;
                }
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// Description of a node type.
pub trait NodeType {
    fn name(&self) -> &str;

    fn child_types(&self) -> &[Descriptor];

    /// The type itself followed by its ancestors, nearest first.
    fn hierarchy(&self) -> &[String];

    fn belongs_to_group(&self, group: &str) -> bool {
        self.hierarchy().iter().any(|name| name == group)
    }

    fn create_builder(self: Rc<Self>) -> Box<dyn Builder>;
}

/// Mutable staging area for one node.
pub trait Builder {
    fn set_fragment(&mut self, fragment: Fragment);

    /// Returns false if the data is not acceptable; the builder is unchanged then.
    fn set_data(&mut self, data: &str) -> bool;

    /// Returns false if the children do not fit; the builder is unchanged then.
    fn set_children(&mut self, children: &[Rc<dyn Node>]) -> bool;

    fn is_valid(&self) -> bool;

    fn create_node(&self) -> Result<Rc<dyn Node>, BuildError>;
}
