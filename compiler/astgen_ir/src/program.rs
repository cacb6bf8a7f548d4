//! The parsed program: every rule of a DSL source, in declaration order.

use std::cell::OnceCell;
use std::collections::BTreeSet;

use crate::{Instruction, Rule};

/// Ordered list of language-tagged rules.
///
/// The set of languages is computed on first request and cached until the
/// next [`Program::add`].
#[derive(Clone, Debug, Default)]
pub struct Program {
    rules: Vec<Instruction<Rule>>,
    languages: OnceCell<BTreeSet<String>>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    /// Append a rule. Invalidates the cached language set.
    pub fn add(&mut self, instruction: Instruction<Rule>) {
        self.rules.push(instruction);
        self.languages = OnceCell::new();
    }

    /// All rules in declaration order.
    #[inline]
    pub fn all_rules(&self) -> &[Instruction<Rule>] {
        &self.rules
    }

    /// Sorted set of language scopes that have at least one rule.
    ///
    /// Contains `common` iff some rule was declared outside any language switch.
    pub fn all_languages(&self) -> &BTreeSet<String> {
        self.languages.get_or_init(|| {
            self.rules
                .iter()
                .map(|instruction| instruction.language().to_string())
                .collect()
        })
    }

    /// Whether the language set is currently cached.
    pub fn languages_cached(&self) -> bool {
        self.languages.get().is_some()
    }

    /// Rules of one scope, in declaration order.
    pub fn rules_in<'a>(
        &'a self,
        language: &'a str,
    ) -> impl Iterator<Item = &'a Instruction<Rule>> + 'a {
        self.rules
            .iter()
            .filter(move |instruction| instruction.language() == language)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl PartialEq for Program {
    fn eq(&self, other: &Self) -> bool {
        self.rules == other.rules
    }
}

impl Eq for Program {}

#[cfg(test)]
mod tests;
