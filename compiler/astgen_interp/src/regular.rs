//! Node types interpreted directly from ordinary node rules.

use std::rc::Rc;

use astgen_ir::Descriptor;
use tracing::trace;

use crate::allocator::allocate;
use crate::{BuildError, Builder, ChildrenAccess, DataAccess, Fragment, Identity, Node, NodeType};

/// A node type described by an ordinary rule.
#[derive(Debug)]
pub struct RegularNodeType {
    name: String,
    children: Vec<Descriptor>,
    hierarchy: Vec<String>,
}

impl RegularNodeType {
    /// `hierarchy` starts with `name`, followed by its ancestors nearest first.
    pub fn new(name: impl Into<String>, children: Vec<Descriptor>, hierarchy: Vec<String>) -> Self {
        RegularNodeType {
            name: name.into(),
            children,
            hierarchy,
        }
    }

    fn has_required_children(&self) -> bool {
        self.children.iter().any(Descriptor::is_required)
    }
}

impl NodeType for RegularNodeType {
    fn name(&self) -> &str {
        &self.name
    }

    fn child_types(&self) -> &[Descriptor] {
        &self.children
    }

    fn hierarchy(&self) -> &[String] {
        &self.hierarchy
    }

    fn create_builder(self: Rc<Self>) -> Box<dyn Builder> {
        Box::new(RegularBuilder {
            node_type: self,
            fragment: Fragment::Empty,
            children: None,
        })
    }
}

/// Builder of a [`RegularNodeType`].
///
/// Regular nodes carry no data, so only empty data is accepted. The builder
/// is valid once the children fit the type, or right away when the type has
/// no required children.
pub struct RegularBuilder {
    node_type: Rc<RegularNodeType>,
    fragment: Fragment,
    children: Option<Vec<Rc<dyn Node>>>,
}

impl Builder for RegularBuilder {
    fn set_fragment(&mut self, fragment: Fragment) {
        self.fragment = fragment;
    }

    fn set_data(&mut self, data: &str) -> bool {
        data.is_empty()
    }

    fn set_children(&mut self, children: &[Rc<dyn Node>]) -> bool {
        let fits = allocate(&self.node_type.children, children);
        trace!(node_type = %self.node_type.name, count = children.len(), fits, "set children");
        if fits {
            self.children = Some(children.to_vec());
        }
        fits
    }

    fn is_valid(&self) -> bool {
        self.children.is_some() || !self.node_type.has_required_children()
    }

    fn create_node(&self) -> Result<Rc<dyn Node>, BuildError> {
        if !self.is_valid() {
            return Err(BuildError::Invalid {
                type_name: self.node_type.name.clone(),
            });
        }
        Ok(Rc::new(RegularNode {
            node_type: Rc::clone(&self.node_type),
            fragment: self.fragment,
            children: self.children.clone().unwrap_or_default(),
        }))
    }
}

/// A node created by a [`RegularBuilder`].
pub struct RegularNode {
    node_type: Rc<RegularNodeType>,
    fragment: Fragment,
    children: Vec<Rc<dyn Node>>,
}

impl Identity for RegularNode {
    fn node_type(&self) -> Rc<dyn NodeType> {
        self.node_type.clone()
    }

    fn type_name(&self) -> String {
        self.node_type.name.clone()
    }

    fn fragment(&self) -> Fragment {
        self.fragment
    }
}

impl ChildrenAccess for RegularNode {
    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child(&self, index: usize) -> Option<&Rc<dyn Node>> {
        self.children.get(index)
    }
}

impl DataAccess for RegularNode {
    fn data(&self) -> &str {
        ""
    }
}

#[cfg(test)]
mod tests;
