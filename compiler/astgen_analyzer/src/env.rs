//! What the code generator needs to know beyond a single rule.

use std::collections::BTreeSet;

use astgen_ir::Program;

use crate::{Analyzer, License, SemanticError};

/// Generation environment for one language scope.
pub trait Environment {
    fn license(&self) -> &License;

    /// Version written into generated documentation.
    fn version(&self) -> &str;

    /// Package under which every language package is placed.
    fn root_package(&self) -> &str;

    /// Package of the runtime library generated code is written against.
    fn core_package(&self) -> &str;

    /// Package of the runtime node and builder contract.
    fn base_package(&self) -> String {
        format!("{}.base", self.core_package())
    }

    /// The language scope being generated.
    fn language(&self) -> &str;

    /// Package of the generated types of `language`.
    fn package_name(&self, language: &str) -> String {
        format!("{}.{}", self.root_package(), language)
    }

    fn hierarchy(&self, name: &str) -> &[String];

    fn bases(&self, name: &str) -> &[String];

    fn imports(&self, name: &str) -> &BTreeSet<String>;

    fn is_declared(&self, name: &str) -> bool;
}

/// Generation settings shared by every language scope.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BaseEnvironment {
    pub license: License,
    pub version: String,
    pub root_package: String,
    pub core_package: String,
}

impl Default for BaseEnvironment {
    fn default() -> Self {
        BaseEnvironment {
            license: License::default(),
            version: "1.0.0".to_string(),
            root_package: "org.cqfn.astranaut.tree".to_string(),
            core_package: "org.cqfn.astranaut.core".to_string(),
        }
    }
}

/// Settings combined with the hierarchy of one language scope.
pub struct PreparedEnvironment<'a> {
    base: &'a BaseEnvironment,
    analyzer: Analyzer,
}

impl<'a> PreparedEnvironment<'a> {
    pub fn new(
        base: &'a BaseEnvironment,
        program: &Program,
        language: &str,
    ) -> Result<Self, SemanticError> {
        Ok(PreparedEnvironment {
            base,
            analyzer: Analyzer::new(program, language)?,
        })
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }
}

impl Environment for PreparedEnvironment<'_> {
    fn license(&self) -> &License {
        &self.base.license
    }

    fn version(&self) -> &str {
        &self.base.version
    }

    fn root_package(&self) -> &str {
        &self.base.root_package
    }

    fn core_package(&self) -> &str {
        &self.base.core_package
    }

    fn language(&self) -> &str {
        self.analyzer.language()
    }

    fn hierarchy(&self, name: &str) -> &[String] {
        self.analyzer.hierarchy(name)
    }

    fn bases(&self, name: &str) -> &[String] {
        self.analyzer.bases(name)
    }

    fn imports(&self, name: &str) -> &BTreeSet<String> {
        self.analyzer.imports(name)
    }

    fn is_declared(&self, name: &str) -> bool {
        self.analyzer.is_declared(name)
    }
}
