use super::*;
use crate::{Child, Descriptor, DescriptorAttribute, Node};
use pretty_assertions::assert_eq;

fn rule(name: &str, child: &str) -> Rule {
    Rule::Node(Node::ordinary(
        name,
        vec![Child::Descriptor(Descriptor::new(
            child,
            DescriptorAttribute::Ordinary,
        ))],
    ))
}

fn languages(program: &Program) -> Vec<&str> {
    program.all_languages().iter().map(String::as_str).collect()
}

#[test]
fn empty_program_has_no_languages() {
    let program = Program::new();
    assert!(program.is_empty());
    assert!(program.all_languages().is_empty());
}

#[test]
fn common_appears_only_for_untagged_rules() {
    let mut program = Program::new();
    program.add(Instruction::new("java", rule("Synchronized", "Expression")));
    assert_eq!(languages(&program), vec!["java"]);

    program.add(Instruction::new("", rule("Return", "Expression")));
    assert_eq!(languages(&program), vec!["common", "java"]);
}

#[test]
fn add_invalidates_cached_languages() {
    let mut program = Program::new();
    program.add(Instruction::new("python", rule("Pass", "Statement")));
    assert!(!program.languages_cached());
    assert_eq!(languages(&program), vec!["python"]);
    assert!(program.languages_cached());

    program.add(Instruction::new("java", rule("Throw", "Expression")));
    assert!(!program.languages_cached());
    assert_eq!(languages(&program), vec!["java", "python"]);
}

#[test]
fn rules_in_keeps_declaration_order() {
    let mut program = Program::new();
    program.add(Instruction::new("java", rule("B", "X")));
    program.add(Instruction::new("", rule("A", "X")));
    program.add(Instruction::new("java", rule("C", "X")));

    let names: Vec<&str> = program
        .rules_in("java")
        .map(|instruction| instruction.rule().type_name())
        .collect();
    assert_eq!(names, vec!["B", "C"]);
    assert_eq!(program.len(), 3);
}
