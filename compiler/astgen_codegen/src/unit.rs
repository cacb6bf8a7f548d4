//! Compilation units: the complete text of one generated source file.

use std::collections::BTreeSet;

use astgen_analyzer::License;

use crate::java::Klass;
use crate::SourceBuilder;

/// License header, package, imports and one declaration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompilationUnit {
    license: License,
    package: String,
    imports: BTreeSet<String>,
    klass: Klass,
}

impl CompilationUnit {
    pub fn new(license: License, package: impl Into<String>, klass: Klass) -> Self {
        CompilationUnit {
            license,
            package: package.into(),
            imports: BTreeSet::new(),
            klass,
        }
    }

    /// Add a fully qualified import. Duplicates are ignored.
    pub fn add_import(&mut self, name: impl Into<String>) {
        self.imports.insert(name.into());
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Simple name of the declared type.
    pub fn type_name(&self) -> &str {
        self.klass.name()
    }

    pub fn imports(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    /// Path of the file relative to the output root: `org/example/Name.java`.
    pub fn file_path(&self) -> String {
        format!("{}/{}.java", self.package.replace('.', "/"), self.type_name())
    }

    /// Render the file.
    pub fn generate(&self) -> String {
        let mut out = SourceBuilder::new();
        if !self.license.is_empty() {
            out.writeln("/*");
            for line in self.license.lines() {
                if line.is_empty() {
                    out.writeln(" *");
                } else {
                    out.writeln(&format!(" * {line}"));
                }
            }
            out.writeln(" */");
            out.newline();
        }
        out.writeln(&format!("package {};", self.package));
        out.newline();
        if !self.imports.is_empty() {
            for name in &self.imports {
                out.writeln(&format!("import {name};"));
            }
            out.newline();
        }
        self.klass.build(&mut out);
        out.finish()
    }
}

#[cfg(test)]
mod tests;
