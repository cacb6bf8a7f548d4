//! Final classes for literal rules.
//!
//! The node stores a native value. `getData()` renders it through the
//! serializer template with `this.data` in its holes; the builder's
//! `setData(str)` parses through the parser template with `str` in its
//! holes and reports failure when the declared exception is thrown.

use astgen_analyzer::Environment;
use astgen_ir::Literal;

use super::{
    add_contract_imports, add_environment_imports, add_node_fields, add_node_methods, builder,
    create_node_prologue, node_brief, supertypes, type_hierarchy, type_impl,
};
use crate::java::{Field, Klass, Method};
use crate::template::substitute;
use crate::{CompilationUnit, GenerationError};

pub(super) fn generate<E: Environment + ?Sized>(
    env: &E,
    language: &str,
    literal: &Literal,
) -> Result<CompilationUnit, GenerationError> {
    let name = literal.type_name.as_str();
    let native = literal.native_type.as_str();
    let serialized = substitute(&literal.serializer, &["this.data"])?;
    let parsed = substitute(&literal.parser, &["str"])?;
    let hierarchy = type_hierarchy(env, name);
    let version = env.version();

    let mut klass = Klass::class(node_brief(name), name, version).with_modifiers("public final");
    klass.set_supertypes(supertypes(env, name));
    add_node_fields(&mut klass);
    klass.add_field(Field::new("The value of the node.", format!("private {native} data")));
    add_node_methods(&mut klass, name);
    klass.add_method(
        Method::overriding("public String getData()").with_body(vec![format!("return {serialized};")]),
    );
    klass.add_method(
        Method::overriding("public int getChildCount()").with_body(vec!["return 0;".to_string()]),
    );
    klass.add_method(
        Method::overriding("public Node getChild(final int index)")
            .with_body(vec!["throw new IndexOutOfBoundsException();".to_string()]),
    );
    klass.add_method(
        Method::documented("Returns the value of the node.", format!("public {native} getValue()"))
            .with_doc("@return The value")
            .with_body(vec!["return this.data;".to_string()]),
    );
    klass.add_nested(type_impl(
        version,
        language,
        name,
        &hierarchy,
        vec!["Collections.emptyList()".to_string()],
    ));
    klass.add_nested(literal_builder(version, literal, &parsed));

    let mut unit = CompilationUnit::new(env.license().clone(), env.package_name(language), klass);
    add_contract_imports(&mut unit, env, &hierarchy);
    add_environment_imports(&mut unit, env, env.imports(name).iter());
    Ok(unit)
}

fn literal_builder(version: &str, literal: &Literal, parsed: &str) -> Klass {
    let name = literal.type_name.as_str();
    let mut klass = builder(version, name);
    klass.add_field(Field::new(
        "The value of the node.",
        format!("private {} data", literal.native_type),
    ));
    klass.add_field(Field::new(
        "Flag indicating that the value has been set.",
        "private boolean initialized",
    ));
    let set_data = match &literal.exception {
        Some(exception) => vec![
            "boolean result = true;".to_string(),
            "try {".to_string(),
            format!("    this.data = {parsed};"),
            "    this.initialized = true;".to_string(),
            format!("}} catch (final {exception} ignored) {{"),
            "    result = false;".to_string(),
            "}".to_string(),
            "return result;".to_string(),
        ],
        None => vec![
            format!("this.data = {parsed};"),
            "this.initialized = true;".to_string(),
            "return true;".to_string(),
        ],
    };
    klass.add_method(
        Method::overriding("public boolean setData(final String str)").with_body(set_data),
    );
    klass.add_method(
        Method::overriding("public boolean setChildrenList(final List<Node> list)")
            .with_body(vec!["return list.isEmpty();".to_string()]),
    );
    klass.add_method(
        Method::overriding("public boolean isValid()")
            .with_body(vec!["return this.initialized;".to_string()]),
    );
    let mut create = create_node_prologue(name);
    create.push("node.data = this.data;".to_string());
    create.push("return node;".to_string());
    klass.add_method(Method::overriding(format!("public {name} createNode()")).with_body(create));
    klass
}
