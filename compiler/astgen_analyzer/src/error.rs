use astgen_diagnostic::{Component, Diagnostic, ErrorCode};
use thiserror::Error;

/// Failure while resolving the rules of one language scope.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum SemanticError {
    #[error("`{name}`, listed by `{rule}`, is not declared in `{language}` or `common`")]
    UnresolvedType {
        name: String,
        rule: String,
        language: String,
    },
    #[error("hierarchy of `{name}` is cyclic")]
    HierarchyCycle { name: String },
    #[error("`{name}` is declared more than once in `{language}`")]
    DuplicateType { name: String, language: String },
}

impl SemanticError {
    pub fn component(&self) -> Component {
        Component::Analyzer
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SemanticError::UnresolvedType { .. } => ErrorCode::E2001,
            SemanticError::HierarchyCycle { .. } => ErrorCode::E2002,
            SemanticError::DuplicateType { .. } => ErrorCode::E2003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code(), self.component()).with_message(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unresolved_type_diagnostic() {
        let error = SemanticError::UnresolvedType {
            name: "Missing".to_string(),
            rule: "Expression".to_string(),
            language: "java".to_string(),
        };
        assert_eq!(
            error.to_diagnostic().headline(),
            "error[E2001] analyzer: `Missing`, listed by `Expression`, is not declared in `java` or `common`"
        );
    }

    #[test]
    fn every_variant_is_semantic() {
        let errors = [
            SemanticError::HierarchyCycle {
                name: "A".to_string(),
            },
            SemanticError::DuplicateType {
                name: "A".to_string(),
                language: "common".to_string(),
            },
        ];
        for error in errors {
            assert!(error.code().is_semantic_error());
            assert_eq!(error.component(), Component::Analyzer);
        }
    }
}
