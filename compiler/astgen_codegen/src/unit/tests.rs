use super::*;
use pretty_assertions::assert_eq;

fn unit() -> CompilationUnit {
    let mut klass = Klass::interface("Node that describes the 'Expression' type.", "Expression", "1.0.0");
    klass.set_supertypes(vec!["Node".to_string()]);
    CompilationUnit::new(
        License::new("Copyright (c) 2024\n\nMIT"),
        "org.example.tree.java",
        klass,
    )
}

#[test]
fn full_layout() {
    let mut unit = unit();
    unit.add_import("org.example.core.base.Node");
    let expected = "\
/*
 * Copyright (c) 2024
 *
 * MIT
 */

package org.example.tree.java;

import org.example.core.base.Node;

/**
 * Node that describes the 'Expression' type.
 *
 * @since 1.0.0
 */
public interface Expression extends Node {
}
";
    assert_eq!(unit.generate(), expected);
}

#[test]
fn imports_are_sorted_and_unique() {
    let mut unit = unit();
    unit.add_import("java.util.List");
    unit.add_import("java.util.Arrays");
    unit.add_import("java.util.List");
    let imports: Vec<&str> = unit.imports().collect();
    assert_eq!(imports, vec!["java.util.Arrays", "java.util.List"]);
}

#[test]
fn no_imports_no_import_block() {
    let generated = unit().generate();
    assert!(generated.contains("package org.example.tree.java;\n\n/**"));
}

#[test]
fn empty_license_is_omitted() {
    let mut klass = Klass::class("Sample.", "Sample", "1.0.0");
    klass.set_supertypes(Vec::new());
    let unit = CompilationUnit::new(License::new(""), "p", klass);
    assert!(unit.generate().starts_with("package p;\n"));
}

#[test]
fn file_path_follows_package() {
    let unit = unit();
    assert_eq!(unit.package(), "org.example.tree.java");
    assert_eq!(unit.type_name(), "Expression");
    assert_eq!(unit.file_path(), "org/example/tree/java/Expression.java");
}
