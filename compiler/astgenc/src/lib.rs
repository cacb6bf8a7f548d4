//! Command-line front end: argument handling and file IO around
//! [`astgen_compiler::compile`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Once;

use astgen_compiler::{compile, CompileConfig, CompileError};
use thiserror::Error;
use tracing::{debug, info};

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber, once, if `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Failure of a command-line run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Parameters are not specified")]
    NoParameters,
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("more than one rules file: `{0}`")]
    ExtraArgument(String),
    #[error("cannot read `{}`: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot write `{}`: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// File with license text; the built-in license is used when absent.
    pub license: Option<PathBuf>,
    pub config: CompileConfig,
}

/// Parse `astgenc <rules.dsl> [--output=<dir>] [--package=<name>] [--core=<name>]
/// [--license=<file>] [--version=<text>]`. `args` excludes the program name.
pub fn parse_args(args: &[String]) -> Result<CliOptions, CliError> {
    let mut input = None;
    let mut output = PathBuf::from("output");
    let mut license = None;
    let mut config = CompileConfig::default();
    for arg in args {
        if let Some(value) = arg.strip_prefix("--output=") {
            output = PathBuf::from(value);
        } else if let Some(value) = arg.strip_prefix("--package=") {
            config.root_package = value.to_string();
        } else if let Some(value) = arg.strip_prefix("--core=") {
            config.core_package = value.to_string();
        } else if let Some(value) = arg.strip_prefix("--license=") {
            license = Some(PathBuf::from(value));
        } else if let Some(value) = arg.strip_prefix("--version=") {
            config.version = value.to_string();
        } else if arg.starts_with('-') {
            return Err(CliError::UnknownOption(arg.clone()));
        } else if input.is_none() {
            input = Some(PathBuf::from(arg));
        } else {
            return Err(CliError::ExtraArgument(arg.clone()));
        }
    }
    let input = input.ok_or(CliError::NoParameters)?;
    config.file_path = input.display().to_string();
    Ok(CliOptions {
        input,
        output,
        license,
        config,
    })
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Compile the rules file and write every generated file under the output
/// directory. Returns the number of files written.
pub fn run(options: &CliOptions) -> Result<usize, CliError> {
    let source = read(&options.input)?;
    let mut config = options.config.clone();
    if let Some(path) = &options.license {
        config.license = read(path)?;
    }
    let output = compile(&source, &config)?;
    for file in &output.files {
        let path = options.output.join(&file.path);
        let write = |path: &Path| -> io::Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &file.content)
        };
        write(&path).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "written");
    }
    info!(files = output.files.len(), output = %options.output.display(), "done");
    Ok(output.files.len())
}

#[cfg(test)]
mod tests;
