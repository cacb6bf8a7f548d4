#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use astgen_ir::{DescriptorAttribute, Span};
use pretty_assertions::assert_eq;

/// A node whose type belongs to no group but its own.
struct DummyNode;

struct DummyType;

impl NodeType for DummyType {
    fn name(&self) -> &str {
        "Dummy"
    }

    fn child_types(&self) -> &[Descriptor] {
        &[]
    }

    fn hierarchy(&self) -> &[String] {
        &[]
    }

    fn create_builder(self: Rc<Self>) -> Box<dyn Builder> {
        unreachable!("dummy nodes are never built")
    }
}

impl Identity for DummyNode {
    fn node_type(&self) -> Rc<dyn NodeType> {
        Rc::new(DummyType)
    }

    fn fragment(&self) -> Fragment {
        Fragment::Empty
    }
}

impl ChildrenAccess for DummyNode {
    fn child_count(&self) -> usize {
        0
    }

    fn child(&self, _index: usize) -> Option<&Rc<dyn Node>> {
        None
    }
}

impl DataAccess for DummyNode {
    fn data(&self) -> &str {
        ""
    }
}

fn dummy() -> Rc<dyn Node> {
    Rc::new(DummyNode)
}

fn chain(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

#[test]
fn node_without_children() {
    let node_type = Rc::new(RegularNodeType::new("This", Vec::new(), chain(&["This"])));
    let mut builder = Rc::clone(&node_type).create_builder();
    assert!(builder.is_valid());
    builder.set_fragment(Fragment::Empty);
    assert!(builder.set_data(""));
    assert!(!builder.set_data("test"));
    assert!(builder.set_children(&[]));
    assert!(!builder.set_children(&[dummy()]));
    let node = builder.create_node().unwrap();
    assert!(Rc::ptr_eq(
        &node.node_type(),
        &(Rc::clone(&node_type) as Rc<dyn NodeType>)
    ));
    assert_eq!(node.type_name(), "This");
    assert_eq!(node.data(), "");
    assert_eq!(node.child_count(), 0);
}

#[test]
fn node_with_one_required_child() {
    let constant = Rc::new(RegularNodeType::new(
        "True",
        Vec::new(),
        chain(&["True", "BooleanExpression", "Expression"]),
    ));
    let child = constant.create_builder().create_node().unwrap();
    let statement = Rc::new(RegularNodeType::new(
        "StatementExpression",
        vec![Descriptor::new("Expression", DescriptorAttribute::Ordinary)],
        chain(&["StatementExpression"]),
    ));
    let mut builder = statement.create_builder();
    assert!(!builder.is_valid());
    assert_eq!(
        builder.create_node().err(),
        Some(BuildError::Invalid {
            type_name: "StatementExpression".to_string()
        })
    );
    builder.set_fragment(Fragment::Empty);
    assert!(builder.set_data(""));
    assert!(!builder.set_data("abc"));
    assert!(!builder.set_children(&[]));
    assert!(!builder.is_valid());
    assert!(!builder.set_children(&[dummy()]));
    assert!(!builder.is_valid());
    assert!(builder.set_children(&[Rc::clone(&child)]));
    assert!(builder.is_valid());
    let node = builder.create_node().unwrap();
    assert_eq!(node.child_count(), 1);
    assert_eq!(node.child(0).unwrap().type_name(), "True");
    assert_eq!(node.to_string(), "StatementExpression(True)");
}

#[test]
fn fragment_is_kept() {
    let node_type = Rc::new(RegularNodeType::new("Leaf", Vec::new(), chain(&["Leaf"])));
    let mut builder = node_type.create_builder();
    builder.set_fragment(Fragment::Range(Span::new(3, 9)));
    let node = builder.create_node().unwrap();
    assert_eq!(node.fragment(), Fragment::Range(Span::new(3, 9)));
}

#[test]
fn failed_children_keep_previous_ones() {
    let leaf = Rc::new(RegularNodeType::new("Name", Vec::new(), chain(&["Name", "Expression"])));
    let first = Rc::clone(&leaf).create_builder().create_node().unwrap();
    let holder = Rc::new(RegularNodeType::new(
        "Holder",
        vec![Descriptor::new("Expression", DescriptorAttribute::Ordinary)],
        chain(&["Holder"]),
    ));
    let mut builder = holder.create_builder();
    assert!(builder.set_children(&[first]));
    assert!(!builder.set_children(&[dummy()]));
    let node = builder.create_node().unwrap();
    assert_eq!(node.to_string(), "Holder(Name)");
}

#[test]
fn group_membership_follows_hierarchy() {
    let node_type = RegularNodeType::new("True", Vec::new(), chain(&["True", "BooleanExpression", "Expression"]));
    assert!(node_type.belongs_to_group("True"));
    assert!(node_type.belongs_to_group("Expression"));
    assert!(!node_type.belongs_to_group("Statement"));
}
