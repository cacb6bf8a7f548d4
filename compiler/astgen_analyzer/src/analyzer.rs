//! Ancestor chains for the node types of one language scope.

use std::collections::BTreeSet;

use astgen_ir::{Instruction, Program, Rule, COMMON_LANGUAGE};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::SemanticError;

static NO_IMPORTS: BTreeSet<String> = BTreeSet::new();

/// Where a type visible to the analyzer was declared.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Origin {
    /// The analyzed language itself.
    Language,
    /// The shared `common` scope.
    Common,
}

/// Read-only hierarchy data for one language scope.
///
/// Everything is computed in [`Analyzer::new`]; queries are plain lookups.
#[derive(Debug)]
pub struct Analyzer {
    language: String,
    origins: FxHashMap<String, Origin>,
    bases: FxHashMap<String, Vec<String>>,
    hierarchy: FxHashMap<String, Vec<String>>,
    imports: FxHashMap<String, BTreeSet<String>>,
}

impl Analyzer {
    /// Analyze the rules of `language` together with those of `common`.
    ///
    /// A language rule hides a `common` rule of the same name.
    #[tracing::instrument(level = "debug", skip(program))]
    pub fn new(program: &Program, language: &str) -> Result<Self, SemanticError> {
        let mut analyzer = Analyzer {
            language: language.to_string(),
            origins: FxHashMap::default(),
            bases: FxHashMap::default(),
            hierarchy: FxHashMap::default(),
            imports: FxHashMap::default(),
        };
        analyzer.declare(program)?;
        let rules = analyzer.visible_rules(program);
        analyzer.resolve_bases(&rules)?;
        analyzer.compute_hierarchy(&rules)?;
        analyzer.compute_imports(&rules);
        debug!(types = analyzer.origins.len(), "analyzed");
        Ok(analyzer)
    }

    /// The analyzed language.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Root-first ancestors of `name`, excluding `name` itself.
    ///
    /// Empty for unknown types and types without a base.
    pub fn hierarchy(&self, name: &str) -> &[String] {
        self.hierarchy.get(name).map_or(&[], Vec::as_slice)
    }

    /// Direct bases of `name`, in declaration order.
    pub fn bases(&self, name: &str) -> &[String] {
        self.bases.get(name).map_or(&[], Vec::as_slice)
    }

    /// Types referenced by the rule for `name` that must be imported from
    /// `common`, sorted by name.
    pub fn imports(&self, name: &str) -> &BTreeSet<String> {
        self.imports.get(name).unwrap_or(&NO_IMPORTS)
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.origins.contains_key(name)
    }

    pub fn origin(&self, name: &str) -> Option<Origin> {
        self.origins.get(name).copied()
    }

    fn origin_of(&self, instruction: &Instruction<Rule>) -> Option<Origin> {
        if instruction.language() == self.language {
            Some(Origin::Language)
        } else if instruction.is_common() {
            Some(Origin::Common)
        } else {
            None
        }
    }

    /// Record every visible type name, rejecting duplicates within a scope.
    fn declare(&mut self, program: &Program) -> Result<(), SemanticError> {
        let mut common = FxHashSet::default();
        let mut local = FxHashSet::default();
        for instruction in program.all_rules() {
            let scope = match self.origin_of(instruction) {
                Some(Origin::Language) => &mut local,
                Some(Origin::Common) => &mut common,
                None => continue,
            };
            let name = instruction.rule().type_name();
            if !scope.insert(name.to_string()) {
                return Err(SemanticError::DuplicateType {
                    name: name.to_string(),
                    language: instruction.language().to_string(),
                });
            }
        }
        self.origins
            .extend(common.into_iter().map(|name| (name, Origin::Common)));
        self.origins
            .extend(local.into_iter().map(|name| (name, Origin::Language)));
        Ok(())
    }

    /// Rules that survive shadowing, in declaration order.
    pub fn visible_rules<'p>(&self, program: &'p Program) -> Vec<&'p Rule> {
        program
            .all_rules()
            .iter()
            .filter(|instruction| {
                let origin = self.origin_of(instruction);
                origin.is_some() && origin == self.origin(instruction.rule().type_name())
            })
            .map(Instruction::rule)
            .collect()
    }

    /// Every subtype listed by an abstract rule gets that rule as a base.
    fn resolve_bases(&mut self, rules: &[&Rule]) -> Result<(), SemanticError> {
        for rule in rules {
            let Some(node) = rule.as_node().filter(|node| node.is_abstract()) else {
                continue;
            };
            for subtype in &node.subtypes {
                if !self.is_declared(subtype) {
                    return Err(SemanticError::UnresolvedType {
                        name: subtype.clone(),
                        rule: node.type_name.clone(),
                        language: self.language.clone(),
                    });
                }
                let bases = self.bases.entry(subtype.clone()).or_default();
                if !bases.contains(&node.type_name) {
                    bases.push(node.type_name.clone());
                }
            }
        }
        Ok(())
    }

    fn compute_hierarchy(&mut self, rules: &[&Rule]) -> Result<(), SemanticError> {
        for rule in rules {
            let name = rule.type_name();
            if !self.hierarchy.contains_key(name) {
                let chain = self.chain(name)?;
                self.hierarchy.insert(name.to_string(), chain);
            }
        }
        Ok(())
    }

    /// Walk first bases upwards from `name`, reusing chains already known.
    ///
    /// The walk can't be longer than the number of declared types; a longer
    /// one has to loop.
    fn chain(&self, name: &str) -> Result<Vec<String>, SemanticError> {
        let limit = self.origins.len();
        let mut upward: Vec<&str> = Vec::new();
        let mut current = name;

        let mut chain = loop {
            let Some(base) = self.bases(current).first() else {
                break Vec::new();
            };
            if let Some(known) = self.hierarchy.get(base) {
                let mut chain = known.clone();
                chain.push(base.clone());
                break chain;
            }
            upward.push(base.as_str());
            if upward.len() > limit {
                return Err(SemanticError::HierarchyCycle {
                    name: name.to_string(),
                });
            }
            current = base.as_str();
        };

        chain.extend(upward.iter().rev().map(|base| (*base).to_string()));
        Ok(chain)
    }

    /// A language rule imports the `common` types it mentions.
    fn compute_imports(&mut self, rules: &[&Rule]) {
        if self.language == COMMON_LANGUAGE {
            return;
        }
        for rule in rules {
            let name = rule.type_name();
            if self.origin(name) != Some(Origin::Language) {
                continue;
            }
            let referenced = rule
                .as_node()
                .into_iter()
                .flat_map(|node| node.referenced_types())
                .chain(self.bases(name).iter().map(String::as_str));
            let imports: BTreeSet<String> = referenced
                .filter(|referenced| self.origin(referenced) == Some(Origin::Common))
                .map(str::to_string)
                .collect();
            if !imports.is_empty() {
                self.imports.insert(name.to_string(), imports);
            }
        }
    }
}
