#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

/// A fresh directory under the system temp dir.
fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("astgenc-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn no_parameters() {
    let error = parse_args(&[]).unwrap_err();
    assert!(matches!(error, CliError::NoParameters));
    assert_eq!(error.to_string(), "Parameters are not specified");
}

#[test]
fn options_fill_the_config() {
    let options = parse_args(&args(&[
        "rules.dsl",
        "--output=gen",
        "--package=org.example.tree",
        "--core=org.example.core",
        "--version=0.9",
        "--license=LICENSE.txt",
    ]))
    .unwrap();
    assert_eq!(options.input, PathBuf::from("rules.dsl"));
    assert_eq!(options.output, PathBuf::from("gen"));
    assert_eq!(options.license, Some(PathBuf::from("LICENSE.txt")));
    assert_eq!(options.config.root_package, "org.example.tree");
    assert_eq!(options.config.core_package, "org.example.core");
    assert_eq!(options.config.version, "0.9");
    assert_eq!(options.config.file_path, "rules.dsl");
}

#[test]
fn defaults() {
    let options = parse_args(&args(&["rules.dsl"])).unwrap();
    assert_eq!(options.output, PathBuf::from("output"));
    assert_eq!(options.license, None);
    assert_eq!(options.config.version, CompileConfig::default().version);
}

#[test]
fn unknown_option() {
    let error = parse_args(&args(&["rules.dsl", "--verbose"])).unwrap_err();
    assert_eq!(error.to_string(), "unknown option `--verbose`");
}

#[test]
fn second_input_is_rejected() {
    let error = parse_args(&args(&["a.dsl", "b.dsl"])).unwrap_err();
    assert!(matches!(error, CliError::ExtraArgument(name) if name == "b.dsl"));
}

#[test]
fn run_writes_generated_files() {
    let dir = scratch("run");
    let input = dir.join("rules.dsl");
    fs::write(&input, "Expression <- Name | Number\nName <- 0\nNumber <- 0\n").unwrap();
    let license = dir.join("LICENSE.txt");
    fs::write(&license, "Copyright (c) 2024 Someone\n").unwrap();
    let options = parse_args(&[
        input.display().to_string(),
        format!("--output={}", dir.join("out").display()),
        format!("--license={}", license.display()),
    ])
    .unwrap();
    assert_eq!(run(&options).unwrap(), 3);
    let name = fs::read_to_string(dir.join("out/org/cqfn/astranaut/tree/common/Name.java")).unwrap();
    assert!(name.starts_with("/*\n * Copyright (c) 2024 Someone\n */\n"));
    assert!(name.contains("public final class Name implements Expression {"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn compile_errors_pass_through() {
    let dir = scratch("error");
    let input = dir.join("rules.dsl");
    fs::write(&input, "Block <- Statement*, Statement\n").unwrap();
    let options = parse_args(&[input.display().to_string()]).unwrap();
    let error = match run(&options).unwrap_err() {
        CliError::Compile(error) => error,
        other => panic!("expected a compile error, got {other}"),
    };
    assert_eq!(
        error.to_diagnostic().headline(),
        "error[E1003] parser: `Block` has a list descriptor, which must be its only child"
    );
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_input_is_a_read_error() {
    let options = parse_args(&args(&["/nonexistent/astgenc/rules.dsl"])).unwrap();
    assert!(matches!(run(&options).unwrap_err(), CliError::Read { .. }));
}
