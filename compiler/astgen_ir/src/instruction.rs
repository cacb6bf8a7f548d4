//! Rules tagged with the language scope they were declared in.

use std::fmt;

/// Scope of rules declared before any `language:` switch.
pub const COMMON_LANGUAGE: &str = "common";

/// A value tagged with its language scope.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Instruction<T> {
    language: String,
    rule: T,
}

impl<T> Instruction<T> {
    /// Tag `rule` with `language`. An empty language means [`COMMON_LANGUAGE`].
    pub fn new(language: impl Into<String>, rule: T) -> Self {
        let language = language.into();
        let language = if language.is_empty() {
            COMMON_LANGUAGE.to_string()
        } else {
            language
        };
        Instruction { language, rule }
    }

    #[inline]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[inline]
    pub fn rule(&self) -> &T {
        &self.rule
    }

    #[inline]
    pub fn is_common(&self) -> bool {
        self.language == COMMON_LANGUAGE
    }

    pub fn into_rule(self) -> T {
        self.rule
    }
}

impl<T: fmt::Display> fmt::Display for Instruction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.language, self.rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_language_is_common() {
        let instruction = Instruction::new("", "Addition <- Expression, Expression");
        assert_eq!(instruction.language(), "common");
        assert!(instruction.is_common());
        assert_eq!(
            instruction.to_string(),
            "common: Addition <- Expression, Expression"
        );
    }

    #[test]
    fn named_language_is_kept() {
        let instruction = Instruction::new("java", "Synchronized <- Expression, StatementBlock");
        assert_eq!(instruction.language(), "java");
        assert!(!instruction.is_common());
    }
}
