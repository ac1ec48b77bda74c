//! Resolved type descriptors
//!
//! A `TypeDescriptor` is the resolver's output: a reference that has been
//! checked against the universe and can be rendered as either a display name
//! or a fully qualified syntax form.

use husk_syntax::TypeSyntax;
use serde::{Deserialize, Serialize};

use crate::info::NamedSymbol;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeDescriptor {
    Named(NamedSymbol),
    Generic {
        definition: NamedSymbol,
        arguments: Vec<TypeDescriptor>,
    },
    Array {
        element: Box<TypeDescriptor>,
        rank: usize,
    },
}

impl TypeDescriptor {
    /// Human-oriented display form: keywords where available,
    /// `List<int>` for generics, `[]` / `[*,*]` for arrays.
    pub fn display(&self) -> String {
        match self {
            TypeDescriptor::Named(symbol) => match &symbol.keyword {
                Some(keyword) => keyword.clone(),
                None => symbol.qualified_name(),
            },
            TypeDescriptor::Generic {
                definition,
                arguments,
            } => {
                let arguments: Vec<String> =
                    arguments.iter().map(TypeDescriptor::display).collect();
                format!(
                    "{}<{}>",
                    definition.qualified_name(),
                    arguments.join(", ")
                )
            }
            TypeDescriptor::Array { element, rank } => {
                if *rank == 1 {
                    format!("{}[]", element.display())
                } else {
                    let stars: Vec<&str> = std::iter::repeat("*").take(*rank).collect();
                    format!("{}[{}]", element.display(), stars.join(","))
                }
            }
        }
    }

    /// Source form used in generated declarations: `global::`-prefixed
    /// metadata paths, no keywords, `[,]` for rank-2 arrays.
    pub fn fully_qualified(&self) -> String {
        match self {
            TypeDescriptor::Named(symbol) => format!("global::{}", symbol.qualified_name()),
            TypeDescriptor::Generic {
                definition,
                arguments,
            } => {
                let arguments: Vec<String> = arguments
                    .iter()
                    .map(TypeDescriptor::fully_qualified)
                    .collect();
                format!(
                    "global::{}<{}>",
                    definition.qualified_name(),
                    arguments.join(", ")
                )
            }
            TypeDescriptor::Array { element, rank } => {
                format!("{}[{}]", element.fully_qualified(), ",".repeat(rank - 1))
            }
        }
    }

    /// Fully qualified syntax node for declaration emission
    pub fn to_syntax(&self) -> TypeSyntax {
        match self {
            TypeDescriptor::Named(symbol) => TypeSyntax::Named {
                global: true,
                segments: self.named_segments(symbol),
            },
            TypeDescriptor::Generic {
                definition,
                arguments,
            } => TypeSyntax::Generic {
                global: true,
                segments: self.named_segments(definition),
                arguments: arguments.iter().map(TypeDescriptor::to_syntax).collect(),
            },
            TypeDescriptor::Array { element, rank } => TypeSyntax::Array {
                element: Box::new(element.to_syntax()),
                rank: *rank,
            },
        }
    }

    fn named_segments(&self, symbol: &NamedSymbol) -> Vec<String> {
        let mut segments = symbol.namespace.clone();
        segments.push(symbol.name.clone());
        segments
    }
}
