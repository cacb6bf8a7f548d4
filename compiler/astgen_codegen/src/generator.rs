//! Rule to compilation unit.
//!
//! Every generated type is written against the runtime contract in
//! `<core>.base`: a node class implements `Node` (or its bases), carries a
//! static `Type` describing it, and nests a `Constructor` implementing
//! `Builder`. Abstract rules become marker interfaces.

mod abstract_node;
mod literal;
mod ordinary;

use astgen_analyzer::Environment;
use astgen_ir::{Instruction, Node, Program, Rule, COMMON_LANGUAGE};
use tracing::debug;

use crate::java::{Field, Klass, Method};
use crate::naming::is_reserved_type;
use crate::{CompilationUnit, GenerationError};

/// Generate the compilation unit of one rule.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(language = instruction.language(), rule = instruction.rule().type_name())
)]
pub fn generate<E: Environment + ?Sized>(
    env: &E,
    instruction: &Instruction<Rule>,
) -> Result<CompilationUnit, GenerationError> {
    let language = instruction.language();
    check_reserved_names(env, instruction.rule())?;
    let unit = match instruction.rule() {
        Rule::Node(node) if node.is_abstract() => abstract_node::generate(env, language, node),
        Rule::Node(node) => ordinary::generate(env, language, node)?,
        Rule::Literal(rule) => literal::generate(env, language, rule)?,
    };
    debug!(path = %unit.file_path(), "generated");
    Ok(unit)
}

/// Generate every rule of the environment's language, in declaration order.
pub fn generate_language<E: Environment + ?Sized>(
    env: &E,
    program: &Program,
) -> Result<Vec<CompilationUnit>, GenerationError> {
    program
        .rules_in(env.language())
        .map(|instruction| generate(env, instruction))
        .collect()
}

/// Rejects rules whose own name, child types or bases would shadow a type
/// the generated unit imports or nests.
fn check_reserved_names<E: Environment + ?Sized>(
    env: &E,
    rule: &Rule,
) -> Result<(), GenerationError> {
    let name = rule.type_name();
    let referenced = rule.as_node().into_iter().flat_map(Node::referenced_types);
    let bases = env.bases(name).iter().map(String::as_str);
    match std::iter::once(name)
        .chain(referenced)
        .chain(bases)
        .find(|candidate| is_reserved_type(candidate))
    {
        Some(reserved) => Err(GenerationError::reserved_type_name(reserved, name)),
        None => Ok(()),
    }
}

fn node_brief(name: &str) -> String {
    format!("Node that describes the '{name}' type.")
}

/// Direct bases, or the contract's `Node` when there are none.
fn supertypes<E: Environment + ?Sized>(env: &E, name: &str) -> Vec<String> {
    let bases = env.bases(name);
    if bases.is_empty() {
        vec!["Node".to_string()]
    } else {
        bases.to_vec()
    }
}

/// The type itself followed by its ancestors, nearest first.
fn type_hierarchy<E: Environment + ?Sized>(env: &E, name: &str) -> Vec<String> {
    std::iter::once(name.to_string())
        .chain(env.hierarchy(name).iter().rev().cloned())
        .collect()
}

/// Imports shared by every node class.
fn add_contract_imports<E: Environment + ?Sized>(
    unit: &mut CompilationUnit,
    env: &E,
    hierarchy: &[String],
) {
    if hierarchy.len() > 1 {
        unit.add_import("java.util.Arrays");
    }
    unit.add_import("java.util.Collections");
    unit.add_import("java.util.List");
    unit.add_import("java.util.Map");
    unit.add_import(format!("{}.utils.MapUtils", env.core_package()));
    let base = env.base_package();
    for name in ["Builder", "ChildDescriptor", "EmptyFragment", "Fragment", "Node", "Type"] {
        unit.add_import(format!("{base}.{name}"));
    }
}

/// Imports of types declared in `common`.
fn add_environment_imports<'a, E: Environment + ?Sized>(
    unit: &mut CompilationUnit,
    env: &E,
    names: impl Iterator<Item = &'a String>,
) {
    let package = env.package_name(COMMON_LANGUAGE);
    for name in names {
        unit.add_import(format!("{package}.{name}"));
    }
}

/// `TYPE` and `fragment`, the fields every node class starts with.
fn add_node_fields(klass: &mut Klass) {
    klass.add_field(
        Field::new("The type.", "public static final Type TYPE")
            .with_initializer(vec!["new TypeImpl()".to_string()]),
    );
    klass.add_field(Field::new(
        "The fragment associated with the node.",
        "private Fragment fragment",
    ));
}

/// Private constructor and the `Node` methods that do not depend on the rule kind.
fn add_node_methods(klass: &mut Klass, name: &str) {
    klass.add_method(Method::documented("Constructor.", format!("private {name}()")));
    klass.add_method(
        Method::overriding("public Type getType()")
            .with_body(vec![format!("return {name}.TYPE;")]),
    );
    klass.add_method(
        Method::overriding("public Fragment getFragment()")
            .with_body(vec!["return this.fragment;".to_string()]),
    );
}

/// The nested `TypeImpl` class.
///
/// `children` is the initializer of the `CHILDREN` list.
fn type_impl(
    version: &str,
    language: &str,
    name: &str,
    hierarchy: &[String],
    children: Vec<String>,
) -> Klass {
    let mut klass = Klass::class(format!("Type descriptor of the '{name}' node."), "TypeImpl", version)
        .with_modifiers("private static final");
    klass.set_supertypes(vec!["Type".to_string()]);
    klass.add_field(
        Field::new("The name.", "private static final String NAME")
            .with_initializer(vec![format!("\"{name}\"")]),
    );
    klass.add_field(
        Field::new("The list of child types.", "private static final List<ChildDescriptor> CHILDREN")
            .with_initializer(children),
    );
    let hierarchy = match hierarchy.split_first() {
        Some((_, [])) | None => "Collections.singletonList(TypeImpl.NAME)".to_string(),
        Some((_, ancestors)) => {
            let quoted: Vec<String> = ancestors.iter().map(|name| format!("\"{name}\"")).collect();
            format!("Arrays.asList(TypeImpl.NAME, {})", quoted.join(", "))
        }
    };
    klass.add_field(
        Field::new("Hierarchy of types.", "private static final List<String> HIERARCHY")
            .with_initializer(vec![hierarchy]),
    );
    klass.add_field(
        Field::new("Properties.", "private static final Map<String, String> PROPERTIES")
            .with_initializer(vec![
                "new MapUtils<String, String>()".to_string(),
                ".put(\"color\", \"green\")".to_string(),
                format!(".put(\"language\", \"{language}\")"),
                ".make()".to_string(),
            ]),
    );
    let getters = [
        ("public String getName()", "NAME"),
        ("public List<ChildDescriptor> getChildTypes()", "CHILDREN"),
        ("public List<String> getHierarchy()", "HIERARCHY"),
        ("public Map<String, String> getProperties()", "PROPERTIES"),
    ];
    for (signature, constant) in getters {
        klass.add_method(
            Method::overriding(signature).with_body(vec![format!("return TypeImpl.{constant};")]),
        );
    }
    klass.add_method(
        Method::overriding("public Builder createBuilder()")
            .with_body(vec!["return new Constructor();".to_string()]),
    );
    klass
}

/// The nested `Constructor` class with its fragment field and setter.
fn builder(version: &str, name: &str) -> Klass {
    let mut klass = Klass::class(format!("Constructor (builder) of the '{name}' node."), "Constructor", version)
        .with_modifiers("public static final");
    klass.set_supertypes(vec!["Builder".to_string()]);
    klass.add_field(
        Field::new("The fragment associated with the node.", "private Fragment fragment")
            .with_initializer(vec!["EmptyFragment.INSTANCE".to_string()]),
    );
    klass.add_method(
        Method::overriding("public void setFragment(final Fragment obj)")
            .with_body(vec!["this.fragment = obj;".to_string()]),
    );
    klass
}

/// Start of `createNode`: refuse while invalid, then allocate the node.
fn create_node_prologue(name: &str) -> Vec<String> {
    vec![
        "if (!this.isValid()) {".to_string(),
        "    throw new IllegalStateException();".to_string(),
        "}".to_string(),
        format!("final {name} node = new {name}();"),
        "node.fragment = this.fragment;".to_string(),
    ]
}

#[cfg(test)]
mod tests;
