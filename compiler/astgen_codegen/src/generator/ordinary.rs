//! Final classes for ordinary node rules.

use astgen_analyzer::Environment;
use astgen_ir::{Child, Descriptor, Node};

use super::{
    add_contract_imports, add_environment_imports, add_node_fields, add_node_methods, builder,
    create_node_prologue, node_brief, supertypes, type_hierarchy, type_impl,
};
use crate::java::{Field, Klass, Method};
use crate::naming::{capitalize, field_names};
use crate::{CompilationUnit, GenerationError};

/// A child descriptor together with the Java field that stores it.
struct Slot<'a> {
    descriptor: &'a Descriptor,
    field: String,
}

impl Slot<'_> {
    fn type_name(&self) -> &str {
        &self.descriptor.type_name
    }
}

pub(super) fn generate<E: Environment + ?Sized>(
    env: &E,
    language: &str,
    node: &Node,
) -> Result<CompilationUnit, GenerationError> {
    let name = node.type_name.as_str();
    let descriptors: Vec<&Descriptor> = node.children.iter().filter_map(Child::descriptor).collect();
    if let Some(unknown) = descriptors
        .iter()
        .find(|descriptor| !env.is_declared(&descriptor.type_name))
    {
        return Err(GenerationError::unknown_child_type(
            &unknown.type_name,
            name,
            env.language(),
        ));
    }
    let slots: Vec<Slot<'_>> = descriptors
        .iter()
        .copied()
        .zip(field_names(descriptors.iter().copied()))
        .map(|(descriptor, field)| Slot { descriptor, field })
        .collect();
    let hierarchy = type_hierarchy(env, name);
    let version = env.version();

    let mut klass = Klass::class(node_brief(name), name, version).with_modifiers("public final");
    klass.set_supertypes(supertypes(env, name));
    add_node_fields(&mut klass);
    klass.add_field(Field::new("List of child nodes.", "private List<Node> children"));
    for slot in slots.iter().filter(|slot| !slot.descriptor.is_list()) {
        klass.add_field(Field::new(
            format!("Child with the '{}' type.", slot.type_name()),
            format!("private {} {}", slot.type_name(), slot.field),
        ));
    }
    add_node_methods(&mut klass, name);
    klass.add_method(
        Method::overriding("public String getData()").with_body(vec!["return \"\";".to_string()]),
    );
    klass.add_method(
        Method::overriding("public int getChildCount()")
            .with_body(vec!["return this.children.size();".to_string()]),
    );
    klass.add_method(
        Method::overriding("public Node getChild(final int index)")
            .with_body(vec!["return this.children.get(index);".to_string()]),
    );
    for slot in &slots {
        klass.add_method(getter(slot));
    }
    klass.add_nested(type_impl(version, language, name, &hierarchy, children_types(&slots)));
    klass.add_nested(node_builder(version, name, &slots));

    let mut unit = CompilationUnit::new(env.license().clone(), env.package_name(language), klass);
    add_contract_imports(&mut unit, env, &hierarchy);
    if !slots.is_empty() {
        unit.add_import(format!("{}.utils.ListUtils", env.core_package()));
        if !node.has_list_child() {
            unit.add_import(format!("{}.algorithms.NodeAllocator", env.core_package()));
        }
    }
    add_environment_imports(&mut unit, env, env.imports(name).iter());
    Ok(unit)
}

fn getter(slot: &Slot<'_>) -> Method {
    let type_name = slot.type_name();
    let accessor = format!("get{}", capitalize(&slot.field));
    if slot.descriptor.is_list() {
        return Method::documented(
            format!("Returns a child with the '{type_name}' type by its index."),
            format!("public {type_name} {accessor}(final int index)"),
        )
        .with_doc("@param index The index")
        .with_doc("@return The node")
        .with_body(vec![format!("return ({type_name}) this.children.get(index);")]);
    }
    let note = if slot.descriptor.is_optional() {
        "@return The node or {@code null}"
    } else {
        "@return The node"
    };
    Method::documented(
        format!("Returns the child with the '{type_name}' type."),
        format!("public {type_name} {accessor}()"),
    )
    .with_doc(note)
    .with_body(vec![format!("return this.{};", slot.field)])
}

/// Initializer of `TypeImpl.CHILDREN`.
fn children_types(slots: &[Slot<'_>]) -> Vec<String> {
    if slots.is_empty() {
        return vec!["Collections.emptyList()".to_string()];
    }
    let mut lines = vec!["new ListUtils<ChildDescriptor>()".to_string()];
    for slot in slots {
        lines.push(format!(
            ".add(new ChildDescriptor(\"{}\", {}))",
            slot.type_name(),
            !slot.descriptor.is_required()
        ));
    }
    lines.push(".make()".to_string());
    lines
}

fn node_builder(version: &str, name: &str, slots: &[Slot<'_>]) -> Klass {
    let mut klass = builder(version, name);
    let list = slots.iter().find(|slot| slot.descriptor.is_list());
    for slot in slots {
        if slot.descriptor.is_list() {
            klass.add_field(
                Field::new(
                    format!("Nodes with the '{}' type.", slot.type_name()),
                    format!("private List<Node> {}", slot.field),
                )
                .with_initializer(vec!["Collections.emptyList()".to_string()]),
            );
        } else {
            klass.add_field(Field::new(
                format!("Node with the '{}' type.", slot.type_name()),
                format!("private {} {}", slot.type_name(), slot.field),
            ));
        }
    }
    klass.add_method(
        Method::overriding("public boolean setData(final String str)")
            .with_body(vec!["return str.isEmpty();".to_string()]),
    );
    let set_children = if slots.is_empty() {
        vec!["return list.isEmpty();".to_string()]
    } else if let Some(list) = list {
        set_list(list)
    } else {
        set_allocated(slots)
    };
    klass.add_method(
        Method::overriding("public boolean setChildrenList(final List<Node> list)")
            .with_body(set_children),
    );
    let required: Vec<String> = slots
        .iter()
        .filter(|slot| slot.descriptor.is_required())
        .map(|slot| format!("this.{} != null", slot.field))
        .collect();
    let valid = if required.is_empty() {
        "return true;".to_string()
    } else {
        format!("return {};", required.join(" && "))
    };
    klass.add_method(Method::overriding("public boolean isValid()").with_body(vec![valid]));

    let mut create = create_node_prologue(name);
    if slots.is_empty() {
        create.push("node.children = Collections.emptyList();".to_string());
    } else if let Some(list) = list {
        create.push(format!("node.children = this.{};", list.field));
    } else {
        let fields: Vec<String> = slots.iter().map(|slot| format!("this.{}", slot.field)).collect();
        create.push(format!(
            "node.children = new ListUtils<Node>().add({}).make();",
            fields.join(", ")
        ));
        for slot in slots {
            create.push(format!("node.{0} = this.{0};", slot.field));
        }
    }
    create.push("return node;".to_string());
    klass.add_method(Method::overriding(format!("public {name} createNode()")).with_body(create));
    klass
}

/// `setChildrenList` for a single list child: every node has to belong to its group.
fn set_list(slot: &Slot<'_>) -> Vec<String> {
    vec![
        "boolean result = true;".to_string(),
        "for (final Node node : list) {".to_string(),
        format!("    if (!node.belongsToGroup(\"{}\")) {{", slot.type_name()),
        "        result = false;".to_string(),
        "        break;".to_string(),
        "    }".to_string(),
        "}".to_string(),
        "if (result) {".to_string(),
        format!("    this.{} = Collections.unmodifiableList(list);", slot.field),
        "}".to_string(),
        "return result;".to_string(),
    ]
}

/// `setChildrenList` through the runtime allocator.
fn set_allocated(slots: &[Slot<'_>]) -> Vec<String> {
    let mut lines = vec![
        format!("final Node[] nodes = new Node[{}];", slots.len()),
        "final NodeAllocator allocator = new NodeAllocator(TypeImpl.CHILDREN);".to_string(),
        "final boolean result = allocator.allocate(nodes, list);".to_string(),
        "if (result) {".to_string(),
    ];
    for (index, slot) in slots.iter().enumerate() {
        lines.push(format!(
            "    this.{} = ({}) nodes[{index}];",
            slot.field,
            slot.type_name()
        ));
    }
    lines.push("}".to_string());
    lines.push("return result;".to_string());
    lines
}
