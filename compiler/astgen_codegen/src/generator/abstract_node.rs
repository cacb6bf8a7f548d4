//! Marker interfaces for abstract node rules.

use astgen_analyzer::Environment;
use astgen_ir::Node;

use super::{add_environment_imports, node_brief, supertypes};
use crate::java::Klass;
use crate::CompilationUnit;

pub(super) fn generate<E: Environment + ?Sized>(env: &E, language: &str, node: &Node) -> CompilationUnit {
    let name = node.type_name.as_str();
    let bases = env.bases(name);
    let mut klass = Klass::interface(node_brief(name), name, env.version());
    klass.set_supertypes(supertypes(env, name));
    let mut unit = CompilationUnit::new(env.license().clone(), env.package_name(language), klass);
    if bases.is_empty() {
        unit.add_import(format!("{}.Node", env.base_package()));
    }
    // Subtypes are referenced by the rule but not by the interface.
    let imports = env.imports(name).iter().filter(|import| bases.contains(*import));
    add_environment_imports(&mut unit, env, imports);
    unit
}
