use astgen_analyzer::{BaseEnvironment, License, PreparedEnvironment};
use astgen_codegen::generate_language;
use astgen_parse::parse_program;
use tracing::{debug, info};

use crate::{CompileError, CompileOutput, GeneratedFile};

/// Configuration for a compilation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileConfig {
    /// Logical file path (used in diagnostics, not for IO).
    pub file_path: String,
    /// License text for the header of every generated file.
    pub license: String,
    /// Version written into `@since` tags.
    pub version: String,
    /// Package that contains one subpackage per language.
    pub root_package: String,
    /// Package of the runtime library.
    pub core_package: String,
}

impl Default for CompileConfig {
    fn default() -> Self {
        let base = BaseEnvironment::default();
        Self {
            file_path: "rules.dsl".to_string(),
            license: base.license.lines().join("\n"),
            version: base.version,
            root_package: base.root_package,
            core_package: base.core_package,
        }
    }
}

impl CompileConfig {
    fn environment(&self) -> BaseEnvironment {
        BaseEnvironment {
            license: License::new(&self.license),
            version: self.version.clone(),
            root_package: self.root_package.clone(),
            core_package: self.core_package.clone(),
        }
    }
}

/// Full pipeline: parse → analyze every language → generate every rule.
///
/// Every language is analyzed before anything is generated, so a semantic
/// error in any scope stops the run with no output.
#[tracing::instrument(level = "debug", skip_all, fields(file = %config.file_path))]
pub fn compile(source: &str, config: &CompileConfig) -> Result<CompileOutput, CompileError> {
    let program = parse_program(source)?;
    let base = config.environment();
    let environments = program
        .all_languages()
        .iter()
        .map(|language| PreparedEnvironment::new(&base, &program, language))
        .collect::<Result<Vec<_>, _>>()?;
    let mut output = CompileOutput {
        languages: program.all_languages().iter().cloned().collect(),
        files: Vec::with_capacity(program.len()),
    };
    for env in &environments {
        let units = generate_language(env, &program)?;
        debug!(language = env.analyzer().language(), units = units.len(), "language done");
        output.files.extend(units.iter().map(|unit| GeneratedFile {
            path: unit.file_path(),
            content: unit.generate(),
        }));
    }
    info!(rules = program.len(), files = output.files.len(), "compiled");
    Ok(output)
}
