//! Semantic queries over syntax trees
//!
//! A `SemanticModel` binds written names in a tree against the universe,
//! taking the tree's using directives into account. Attribute checks go
//! through the model, so `[Serializable]` and
//! `[System.SerializableAttribute]` compare equal when they bind to the
//! same type.

use husk_syntax::visitor::walk_unit;
use husk_syntax::{Attribute, CompilationUnit, TypeSyntax, Visitor};

use crate::descriptor::TypeDescriptor;
use crate::universe::Universe;

#[derive(Debug)]
pub struct SemanticModel<'a> {
    universe: &'a Universe,
    usings: Vec<String>,
}

impl<'a> SemanticModel<'a> {
    pub fn new(universe: &'a Universe, usings: Vec<String>) -> Self {
        Self { universe, usings }
    }

    /// Binds a written attribute name to its type. Candidates are tried in
    /// written form first, then with the `Attribute` suffix convention, then
    /// prefixed by each using directive.
    pub fn attribute_type(&self, name: &str) -> Option<TypeDescriptor> {
        let mut prefixes = vec![None];
        prefixes.extend(self.usings.iter().map(Some));

        for prefix in prefixes {
            let candidate = match prefix {
                Some(prefix) => format!("{prefix}.{name}"),
                None => name.to_owned(),
            };
            for candidate in [candidate.clone(), format!("{candidate}Attribute")] {
                if let Some(info) = self.universe.get_type(&candidate) {
                    return Some(TypeDescriptor::Named(info.symbol()));
                }
            }
        }
        None
    }

    /// Binds the type written in an attribute usage
    pub fn bind_attribute(&self, attribute: &Attribute) -> Option<TypeDescriptor> {
        match &attribute.ty {
            TypeSyntax::Named { segments, .. } => self.attribute_type(&segments.join(".")),
            // Attribute types are never generic or arrays
            _ => None,
        }
    }
}

/// Reports whether any attribute in the tree binds to the target type.
/// The walk covers the whole tree; the result only ever turns true.
pub struct CheckAttributeWalker<'a> {
    model: &'a SemanticModel<'a>,
    target: &'a TypeDescriptor,
    pub result: bool,
}

impl<'a> CheckAttributeWalker<'a> {
    pub fn new(model: &'a SemanticModel<'a>, target: &'a TypeDescriptor) -> Self {
        Self {
            model,
            target,
            result: false,
        }
    }
}

impl Visitor for CheckAttributeWalker<'_> {
    fn visit_attribute(&mut self, attribute: &Attribute) {
        if self.model.bind_attribute(attribute).as_ref() == Some(self.target) {
            self.result = true;
        }
    }
}

pub fn check_attribute(
    unit: &CompilationUnit,
    model: &SemanticModel<'_>,
    target: &TypeDescriptor,
) -> bool {
    let mut walker = CheckAttributeWalker::new(model, target);
    walk_unit(&mut walker, unit);
    walker.result
}
