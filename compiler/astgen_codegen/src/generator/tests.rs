#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use astgen_analyzer::{BaseEnvironment, PreparedEnvironment};
use astgen_parse::parse_program;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const RULES: &str = "\
Expression <- BooleanExpression | IntegerLiteral
BooleanExpression <- True | False
True <- 0
False <- 0
IntegerLiteral <- $int$, $String.valueOf(#)$, $Integer.parseInt(#)$, $NumberFormatException$
StatementExpression <- Expression
Block <- StatementExpression*
Conditional <- Expression, StatementExpression, StatementExpression?
";

fn units(source: &str, language: &str) -> Vec<CompilationUnit> {
    let program = parse_program(source).unwrap();
    let base = BaseEnvironment::default();
    let env = PreparedEnvironment::new(&base, &program, language).unwrap();
    generate_language(&env, &program).unwrap()
}

fn unit_for(source: &str, language: &str, name: &str) -> String {
    units(source, language)
        .into_iter()
        .find(|unit| unit.type_name() == name)
        .unwrap()
        .generate()
}

#[test]
fn abstract_rule_becomes_interface() {
    let expected = "\
/*
 * The MIT License (MIT)
 */

package org.cqfn.astranaut.tree.common;

import org.cqfn.astranaut.core.base.Node;

/**
 * Node that describes the 'Expression' type.
 *
 * @since 1.0.0
 */
public interface Expression extends Node {
}
";
    assert_eq!(unit_for(RULES, "common", "Expression"), expected);
}

#[test]
fn interface_extends_its_base() {
    let code = unit_for(RULES, "common", "BooleanExpression");
    assert!(code.contains("public interface BooleanExpression extends Expression {\n}\n"));
    assert!(!code.contains("import"));
}

#[test]
fn one_unit_per_rule_in_order() {
    let names: Vec<String> = units(RULES, "common")
        .iter()
        .map(|unit| unit.type_name().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "Expression",
            "BooleanExpression",
            "True",
            "False",
            "IntegerLiteral",
            "StatementExpression",
            "Block",
            "Conditional",
        ]
    );
}

#[test]
fn ordinary_node_imports_are_sorted() {
    let unit = units(RULES, "common")
        .into_iter()
        .find(|unit| unit.type_name() == "StatementExpression")
        .unwrap();
    let imports: Vec<&str> = unit.imports().collect();
    assert_eq!(
        imports,
        vec![
            "java.util.Collections",
            "java.util.List",
            "java.util.Map",
            "org.cqfn.astranaut.core.algorithms.NodeAllocator",
            "org.cqfn.astranaut.core.base.Builder",
            "org.cqfn.astranaut.core.base.ChildDescriptor",
            "org.cqfn.astranaut.core.base.EmptyFragment",
            "org.cqfn.astranaut.core.base.Fragment",
            "org.cqfn.astranaut.core.base.Node",
            "org.cqfn.astranaut.core.base.Type",
            "org.cqfn.astranaut.core.utils.ListUtils",
            "org.cqfn.astranaut.core.utils.MapUtils",
        ]
    );
}

#[test]
fn arrays_only_with_ancestors() {
    let code = unit_for(RULES, "common", "True");
    assert!(code.contains("import java.util.Arrays;\n"));
    assert!(code.contains(
        "private static final List<String> HIERARCHY = Arrays.asList(TypeImpl.NAME, \"BooleanExpression\", \"Expression\");"
    ));
    assert!(code.contains("public final class True implements BooleanExpression {"));

    let code = unit_for(RULES, "common", "StatementExpression");
    assert!(!code.contains("java.util.Arrays"));
    assert!(code.contains("HIERARCHY = Collections.singletonList(TypeImpl.NAME);"));
    assert!(code.contains("public final class StatementExpression implements Node {"));
}

#[test]
fn empty_rule_accepts_no_children() {
    let code = unit_for(RULES, "common", "True");
    assert!(code.contains(
        "        public boolean setChildrenList(final List<Node> list) {\n            return list.isEmpty();\n        }\n"
    ));
    assert!(code.contains("CHILDREN = Collections.emptyList();"));
    assert!(code.contains("public boolean isValid() {\n            return true;\n"));
    assert!(!code.contains("NodeAllocator"));
    assert!(!code.contains("ListUtils"));
}

#[test]
fn ordinary_builder_uses_allocator() {
    let code = unit_for(RULES, "common", "StatementExpression");
    let expected = "\
        @Override
        public boolean setChildrenList(final List<Node> list) {
            final Node[] nodes = new Node[1];
            final NodeAllocator allocator = new NodeAllocator(TypeImpl.CHILDREN);
            final boolean result = allocator.allocate(nodes, list);
            if (result) {
                this.expression = (Expression) nodes[0];
            }
            return result;
        }
";
    assert!(code.contains(expected), "{code}");
    assert!(code.contains("public boolean setData(final String str) {\n            return str.isEmpty();"));
    assert!(code.contains("return this.expression != null;"));
    assert!(code.contains(
        "            if (!this.isValid()) {\n                throw new IllegalStateException();\n            }\n"
    ));
    assert!(code.contains("node.children = new ListUtils<Node>().add(this.expression).make();"));
}

#[test]
fn optional_children_are_not_required() {
    let code = unit_for(RULES, "common", "Conditional");
    assert!(code.contains(
        "return this.expression != null && this.statementExpression1 != null;"
    ));
    assert!(code.contains(".add(new ChildDescriptor(\"StatementExpression\", true))"));
    assert!(code.contains("public StatementExpression getStatementExpression2() {"));
    assert!(code.contains("@return The node or {@code null}"));
}

#[test]
fn list_child_checks_groups() {
    let code = unit_for(RULES, "common", "Block");
    assert!(code.contains("if (!node.belongsToGroup(\"StatementExpression\")) {"));
    assert!(code.contains("this.statementExpression = Collections.unmodifiableList(list);"));
    assert!(code.contains("node.children = this.statementExpression;"));
    assert!(code.contains("public StatementExpression getStatementExpression(final int index) {"));
    assert!(!code.contains("NodeAllocator"));
}

#[test]
fn literal_templates_are_substituted() {
    let code = unit_for(RULES, "common", "IntegerLiteral");
    assert!(code.contains("public final class IntegerLiteral implements Expression {"));
    assert!(code.contains("    public String getData() {\n        return String.valueOf(this.data);\n    }\n"));
    let expected = "\
        @Override
        public boolean setData(final String str) {
            boolean result = true;
            try {
                this.data = Integer.parseInt(str);
                this.initialized = true;
            } catch (final NumberFormatException ignored) {
                result = false;
            }
            return result;
        }
";
    assert!(code.contains(expected), "{code}");
    assert!(code.contains("return this.initialized;"));
    assert!(code.contains("    private int data;\n"));
}

#[test]
fn literal_without_exception() {
    let code = unit_for(
        "Name <- \"String\", \"#\", \"#.trim()\"",
        "common",
        "Name",
    );
    assert!(code.contains(
        "            this.data = str.trim();\n            this.initialized = true;\n            return true;\n"
    ));
    assert!(!code.contains("catch"));
}

#[test]
fn language_rules_import_common_types() {
    let source = format!("{RULES}java:\nSynchronized <- Expression, Block\n");
    let code = unit_for(&source, "java", "Synchronized");
    assert!(code.contains("package org.cqfn.astranaut.tree.java;\n"));
    assert!(code.contains("import org.cqfn.astranaut.tree.common.Block;\n"));
    assert!(code.contains("import org.cqfn.astranaut.tree.common.Expression;\n"));
    assert!(code.contains("\"language\", \"java\""));
}

#[test]
fn unknown_child_type_fails() {
    let program = parse_program("Holder <- Missing").unwrap();
    let base = BaseEnvironment::default();
    let env = PreparedEnvironment::new(&base, &program, "common").unwrap();
    let error = generate_language(&env, &program).unwrap_err();
    assert_eq!(
        error,
        GenerationError::UnknownChildType {
            child: "Missing".to_string(),
            rule: "Holder".to_string(),
            language: "common".to_string(),
        }
    );
}

#[test]
fn hole_out_of_range_fails() {
    let program = parse_program("Pair <- $int$, $f(#2)$, $g(#)$").unwrap();
    let base = BaseEnvironment::default();
    let env = PreparedEnvironment::new(&base, &program, "common").unwrap();
    let error = generate(&env, &program.all_rules()[0]).unwrap_err();
    assert!(matches!(error, GenerationError::HoleOutOfRange { number: 2, .. }));
}

#[test]
fn child_getters_avoid_node_accessors() {
    let source = "\
ChildCount <- 0
TypeName <- 0
Child <- 0
Holder <- ChildCount, TypeName, Child?
";
    let code = unit_for(source, "common", "Holder");
    assert!(code.contains("public ChildCount getChildCountNode() {"));
    assert!(code.contains("public TypeName getTypeNameNode() {"));
    assert!(code.contains("public Child getChildNode() {"));
    assert_eq!(code.matches("public int getChildCount() {").count(), 1);
    assert_eq!(code.matches("public Type getType() {").count(), 1);
}

#[test]
fn reserved_type_names_are_rejected() {
    let program = parse_program("Type <- 0\nHolder <- Type\n").unwrap();
    let base = BaseEnvironment::default();
    let env = PreparedEnvironment::new(&base, &program, "common").unwrap();
    assert_eq!(
        generate_language(&env, &program).unwrap_err(),
        GenerationError::reserved_type_name("Type", "Type")
    );
    assert_eq!(
        generate(&env, &program.all_rules()[1]).unwrap_err(),
        GenerationError::reserved_type_name("Type", "Holder")
    );
}

#[test]
fn reserved_base_is_rejected() {
    let program = parse_program("Node <- Leaf | Other\nLeaf <- 0\nOther <- 0\n").unwrap();
    let base = BaseEnvironment::default();
    let env = PreparedEnvironment::new(&base, &program, "common").unwrap();
    assert_eq!(
        generate(&env, &program.all_rules()[1]).unwrap_err(),
        GenerationError::reserved_type_name("Node", "Leaf")
    );
}

#[test]
fn configured_packages_and_version() {
    let program = parse_program("Leaf <- 0").unwrap();
    let base = BaseEnvironment {
        version: "2.5".to_string(),
        root_package: "org.example.ast".to_string(),
        core_package: "org.example.core".to_string(),
        ..BaseEnvironment::default()
    };
    let env = PreparedEnvironment::new(&base, &program, "common").unwrap();
    let unit = generate(&env, &program.all_rules()[0]).unwrap();
    assert_eq!(unit.file_path(), "org/example/ast/common/Leaf.java");
    let code = unit.generate();
    assert!(code.contains("import org.example.core.base.Node;\n"));
    assert!(code.contains(" * @since 2.5\n"));
}

proptest! {
    #[test]
    fn generation_is_deterministic(names in prop::collection::btree_set("Q[a-z]{1,6}", 1..6)) {
        let names: Vec<String> = names.into_iter().collect();
        let mut source = String::new();
        for name in &names {
            source.push_str(&format!("{name} <- 0\n"));
        }
        source.push_str(&format!("Holder <- {}\n", names.join(", ")));
        if names.len() > 1 {
            source.push_str(&format!("Group <- {}\n", names.join(" | ")));
        }
        let first: Vec<String> = units(&source, "common").iter().map(CompilationUnit::generate).collect();
        let second: Vec<String> = units(&source, "common").iter().map(CompilationUnit::generate).collect();
        prop_assert_eq!(first, second);
    }
}
