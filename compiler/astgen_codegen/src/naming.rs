//! Java identifiers derived from type names.

use rustc_hash::FxHashMap;

use astgen_ir::Descriptor;

/// Reserved words of Java, sorted.
static KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while",
];

/// Names a child field may not take, sorted: members of the generated class
/// and names whose getter would collide with a `Node` accessor.
static MEMBERS: &[&str] = &[
    "child",
    "childCount",
    "children",
    "childrenList",
    "data",
    "fragment",
    "initialized",
    "node",
    "type",
    "typeName",
];

/// Simple names every generated unit imports or declares, sorted.
static RESERVED_TYPES: &[&str] = &[
    "Arrays",
    "Builder",
    "ChildDescriptor",
    "Collections",
    "Constructor",
    "EmptyFragment",
    "Fragment",
    "IllegalStateException",
    "IndexOutOfBoundsException",
    "List",
    "ListUtils",
    "Map",
    "MapUtils",
    "Node",
    "NodeAllocator",
    "Override",
    "String",
    "Type",
    "TypeImpl",
];

/// Whether declaring `type_name` would shadow a type the generated code uses.
pub fn is_reserved_type(type_name: &str) -> bool {
    RESERVED_TYPES.binary_search(&type_name).is_ok()
}

/// `IfStatement` -> `ifStatement`; reserved words get a `Node` suffix.
pub fn variable_name(type_name: &str) -> String {
    let mut chars = type_name.chars();
    let mut name = match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    if KEYWORDS.binary_search(&name.as_str()).is_ok() || MEMBERS.binary_search(&name.as_str()).is_ok() {
        name.push_str("Node");
    }
    name
}

/// `ifStatement` -> `IfStatement`.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Field names for a children list, in order.
///
/// A type occurring more than once is numbered by occurrence:
/// `Expression, Expression` -> `expression1, expression2`.
pub fn field_names<'a>(descriptors: impl Iterator<Item = &'a Descriptor> + Clone) -> Vec<String> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for descriptor in descriptors.clone() {
        *counts.entry(descriptor.type_name.as_str()).or_default() += 1;
    }
    let mut seen: FxHashMap<&str, usize> = FxHashMap::default();
    descriptors
        .map(|descriptor| {
            let type_name = descriptor.type_name.as_str();
            let base = variable_name(type_name);
            if counts.get(type_name).copied().unwrap_or(0) > 1 {
                let ordinal = seen.entry(type_name).or_default();
                *ordinal += 1;
                format!("{base}{ordinal}")
            } else {
                base
            }
        })
        .collect()
}
