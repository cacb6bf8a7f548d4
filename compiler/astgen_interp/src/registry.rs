//! All interpreted node types of one language scope.

use std::rc::Rc;

use astgen_analyzer::{Analyzer, SemanticError};
use astgen_ir::{Child, Program, Rule};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{Builder, NodeType, RegularNodeType};

/// Node types built from the ordinary node rules visible in one language.
pub struct TypeRegistry {
    types: FxHashMap<String, Rc<RegularNodeType>>,
}

impl TypeRegistry {
    /// Build the types of `language`, including the ones inherited from `common`.
    #[tracing::instrument(level = "debug", skip(program))]
    pub fn new(program: &Program, language: &str) -> Result<Self, SemanticError> {
        let analyzer = Analyzer::new(program, language)?;
        let mut types = FxHashMap::default();
        for rule in analyzer.visible_rules(program) {
            let Rule::Node(node) = rule else {
                continue;
            };
            if node.is_abstract() {
                continue;
            }
            let children: Vec<_> = node
                .children
                .iter()
                .filter_map(Child::descriptor)
                .cloned()
                .collect();
            if let Some(unknown) = children
                .iter()
                .find(|descriptor| !analyzer.is_declared(&descriptor.type_name))
            {
                return Err(SemanticError::UnresolvedType {
                    name: unknown.type_name.clone(),
                    rule: node.type_name.clone(),
                    language: language.to_string(),
                });
            }
            let hierarchy = std::iter::once(node.type_name.clone())
                .chain(analyzer.hierarchy(&node.type_name).iter().rev().cloned())
                .collect();
            types.insert(
                node.type_name.clone(),
                Rc::new(RegularNodeType::new(node.type_name.clone(), children, hierarchy)),
            );
        }
        debug!(types = types.len(), "registered");
        Ok(TypeRegistry { types })
    }

    pub fn get(&self, name: &str) -> Option<&Rc<RegularNodeType>> {
        self.types.get(name)
    }

    /// A fresh builder for `name`, if it is a registered type.
    pub fn create_builder(&self, name: &str) -> Option<Box<dyn Builder>> {
        self.get(name).map(|node_type| Rc::clone(node_type).create_builder())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
