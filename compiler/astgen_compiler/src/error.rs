use astgen_analyzer::SemanticError;
use astgen_codegen::GenerationError;
use astgen_diagnostic::{Component, Diagnostic};
use astgen_parse::ParseError;
use thiserror::Error;

/// First failure of a run. No files are produced when one occurs.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum CompileError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Semantic(#[from] SemanticError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl CompileError {
    pub fn component(&self) -> Component {
        match self {
            CompileError::Parse(error) => error.component(),
            CompileError::Semantic(error) => error.component(),
            CompileError::Generation(error) => error.component(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            CompileError::Parse(error) => error.to_diagnostic(),
            CompileError::Semantic(error) => error.to_diagnostic(),
            CompileError::Generation(error) => error.to_diagnostic(),
        }
    }
}
