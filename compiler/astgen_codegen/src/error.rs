use astgen_diagnostic::{Component, Diagnostic, ErrorCode};
use thiserror::Error;

/// Failure while emitting the compilation unit of one rule.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum GenerationError {
    #[error("child type `{child}` of `{rule}` is not declared in `{language}` or `common`")]
    UnknownChildType {
        child: String,
        rule: String,
        language: String,
    },
    #[error("template `{template}` uses hole #{number}, but only {available} value(s) are available")]
    HoleOutOfRange {
        template: String,
        number: u32,
        available: usize,
    },
    #[error("`{name}`, used by `{rule}`, clashes with a type the generated code imports or declares")]
    ReservedTypeName { name: String, rule: String },
}

impl GenerationError {
    #[cold]
    pub fn unknown_child_type(child: &str, rule: &str, language: &str) -> Self {
        GenerationError::UnknownChildType {
            child: child.to_string(),
            rule: rule.to_string(),
            language: language.to_string(),
        }
    }

    #[cold]
    pub fn hole_out_of_range(template: &str, number: u32, available: usize) -> Self {
        GenerationError::HoleOutOfRange {
            template: template.to_string(),
            number,
            available,
        }
    }

    #[cold]
    pub fn reserved_type_name(name: &str, rule: &str) -> Self {
        GenerationError::ReservedTypeName {
            name: name.to_string(),
            rule: rule.to_string(),
        }
    }

    pub fn component(&self) -> Component {
        Component::Generator
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            GenerationError::UnknownChildType { .. } => ErrorCode::E3001,
            GenerationError::HoleOutOfRange { .. } => ErrorCode::E3002,
            GenerationError::ReservedTypeName { .. } => ErrorCode::E3003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code(), self.component()).with_message(self.to_string())
    }
}
