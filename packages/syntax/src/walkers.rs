//! Read-only collectors built on [`Visitor`]

use crate::ast::{CompilationUnit, UsingDirective};
use crate::visitor::{self, Visitor};

/// Collects every using directive in document order.
///
/// Duplicates are preserved; de-duplication, if wanted, belongs to the
/// caller.
pub struct CollectUsingDirectives {
    pub usings: Vec<UsingDirective>,
}

impl CollectUsingDirectives {
    pub fn new() -> Self {
        Self { usings: Vec::new() }
    }
}

impl Default for CollectUsingDirectives {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for CollectUsingDirectives {
    fn visit_using(&mut self, using: &UsingDirective) {
        self.usings.push(using.clone());
    }
}

/// All using directives of a unit, in document order
pub fn collect_usings(unit: &CompilationUnit) -> Vec<UsingDirective> {
    let mut walker = CollectUsingDirectives::new();
    visitor::walk_unit(&mut walker, unit);
    walker.usings
}
