//! Distributes a list of nodes over the child descriptors of a type.

use std::rc::Rc;

use astgen_ir::{Descriptor, DescriptorAttribute};

use crate::Node;

/// Whether `nodes`, in order, can fill `descriptors`.
///
/// Every ordinary descriptor takes exactly one node, an optional one takes
/// zero or one, a list takes any number. A node fits a descriptor when it
/// belongs to the descriptor's type group. Optional and list descriptors
/// try the longest match first and back off when the rest does not fit.
pub fn allocate(descriptors: &[Descriptor], nodes: &[Rc<dyn Node>]) -> bool {
    let Some((descriptor, rest)) = descriptors.split_first() else {
        return nodes.is_empty();
    };
    let fitting = nodes
        .iter()
        .take_while(|node| node.belongs_to_group(&descriptor.type_name))
        .count();
    let (min, max) = match descriptor.attribute {
        DescriptorAttribute::Ordinary => (1, fitting.min(1)),
        DescriptorAttribute::Optional => (0, fitting.min(1)),
        DescriptorAttribute::List => (0, fitting),
    };
    (min..=max)
        .rev()
        .any(|taken| allocate(rest, &nodes[taken..]))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::{Builder, Fragment, NodeType, RegularNodeType};

    fn leaf(name: &str, bases: &[&str]) -> Rc<dyn Node> {
        let mut hierarchy = vec![name.to_string()];
        hierarchy.extend(bases.iter().map(ToString::to_string));
        let node_type = Rc::new(RegularNodeType::new(name, Vec::new(), hierarchy));
        let mut builder = node_type.create_builder();
        builder.set_fragment(Fragment::Empty);
        builder.create_node().unwrap()
    }

    fn descriptor(name: &str, attribute: DescriptorAttribute) -> Descriptor {
        Descriptor::new(name, attribute)
    }

    #[test]
    fn ordinary_needs_exact_count() {
        let descriptors = [descriptor("Expression", DescriptorAttribute::Ordinary)];
        assert!(!allocate(&descriptors, &[]));
        assert!(allocate(&descriptors, &[leaf("True", &["Expression"])]));
        assert!(!allocate(
            &descriptors,
            &[leaf("True", &["Expression"]), leaf("False", &["Expression"])]
        ));
    }

    #[test]
    fn optional_backs_off() {
        let descriptors = [
            descriptor("Expression", DescriptorAttribute::Optional),
            descriptor("Expression", DescriptorAttribute::Ordinary),
        ];
        assert!(allocate(&descriptors, &[leaf("True", &["Expression"])]));
        assert!(allocate(
            &descriptors,
            &[leaf("True", &["Expression"]), leaf("False", &["Expression"])]
        ));
    }

    #[test]
    fn list_takes_every_fitting_node() {
        let descriptors = [descriptor("Statement", DescriptorAttribute::List)];
        let statements = [leaf("Return", &["Statement"]), leaf("Break", &["Statement"])];
        assert!(allocate(&descriptors, &statements));
        assert!(allocate(&descriptors, &[]));
        assert!(!allocate(
            &descriptors,
            &[leaf("Return", &["Statement"]), leaf("True", &["Expression"])]
        ));
    }

    #[test]
    fn unrelated_type_never_fits() {
        let descriptors = [descriptor("Expression", DescriptorAttribute::Optional)];
        assert!(!allocate(&descriptors, &[leaf("Return", &["Statement"])]));
    }
}
