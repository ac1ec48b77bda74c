//! Layered type universe
//!
//! The universe stacks three lookup layers: the source module (types
//! registered during generation), the assembly module (the project under
//! inspection), and reference modules (everything the project links
//! against). Resolution walks the layers in that order and takes the first
//! match.

use husk_syntax::walkers::collect_usings;
use husk_syntax::{CompilationUnit, Member, TypeDeclaration, TypeKeyword};

use crate::descriptor::TypeDescriptor;
use crate::error::ResolveError;
use crate::info::{NamedSymbol, TypeInfo, TypeRef};
use crate::module::Module;
use crate::semantic::SemanticModel;

#[derive(Debug, Clone, Default)]
pub struct Universe {
    pub source: Module,
    pub assembly: Module,
    pub references: Vec<Module>,
}

impl Universe {
    pub fn new(assembly: Module) -> Self {
        Self {
            source: Module::new("source"),
            assembly,
            references: Vec::new(),
        }
    }

    pub fn with_reference(mut self, module: Module) -> Self {
        self.references.push(module);
        self
    }

    /// Registers a type into the source layer. Keyed by metadata name, so
    /// repeated registration of the same record is a no-op.
    pub fn add_source_type(&mut self, info: TypeInfo) {
        self.source.add(info);
    }

    /// Registers every type declared in the unit into the source layer.
    /// Registering the same unit twice is a no-op.
    pub fn add_source_unit(&mut self, unit: &CompilationUnit) {
        for member in &unit.members {
            self.add_source_member(member, &[]);
        }
    }

    fn add_source_member(&mut self, member: &Member, namespace: &[String]) {
        match member {
            Member::Namespace(declaration) => {
                let mut namespace = namespace.to_vec();
                namespace.extend(declaration.name.split('.').map(str::to_owned));
                for member in &declaration.members {
                    self.add_source_member(member, &namespace);
                }
            }
            Member::Type(declaration) => {
                self.add_source_type(declared_type_info(declaration, namespace));
            }
        }
    }

    /// First match across source, assembly, then references
    pub fn get_type(&self, metadata_name: &str) -> Option<&TypeInfo> {
        self.source
            .get(metadata_name)
            .or_else(|| self.assembly.get(metadata_name))
            .or_else(|| {
                self.references
                    .iter()
                    .find_map(|module| module.get(metadata_name))
            })
    }

    /// Resolves a reference against the universe. Generic references fail
    /// closed: the definition and every argument must resolve.
    pub fn resolve(&self, reference: &TypeRef) -> Result<TypeDescriptor, ResolveError> {
        match reference {
            TypeRef::Named(name) => {
                let info = self.get_type(name).ok_or_else(|| ResolveError::NotFound {
                    name: name.clone(),
                })?;
                Ok(TypeDescriptor::Named(info.symbol()))
            }
            TypeRef::Generic {
                definition,
                arguments,
            } => {
                let definition = match self.resolve(definition)? {
                    TypeDescriptor::Named(symbol) => symbol,
                    other => panic!(
                        "generic definition must resolve to a named type, got `{}`",
                        other.display()
                    ),
                };
                let arguments = arguments
                    .iter()
                    .map(|argument| self.resolve(argument))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(construct_generic(definition, arguments))
            }
            TypeRef::Array { element, rank } => {
                let element = self.resolve(element)?;
                Ok(construct_array(element, *rank))
            }
        }
    }

    /// Semantic view over a unit, binding written names with the unit's
    /// using directives in scope
    pub fn semantic_model(&self, unit: &CompilationUnit) -> SemanticModel<'_> {
        let usings = collect_usings(unit)
            .into_iter()
            .map(|using| using.name)
            .collect();
        SemanticModel::new(self, usings)
    }
}

fn declared_type_info(declaration: &TypeDeclaration, namespace: &[String]) -> TypeInfo {
    let mut path = namespace.join(".");
    if !path.is_empty() {
        path.push('.');
    }
    path.push_str(&declaration.name);
    let metadata_name = if declaration.type_parameters.is_empty() {
        path
    } else {
        format!("{}`{}", path, declaration.type_parameters.len())
    };

    match declaration.keyword {
        TypeKeyword::Class => TypeInfo::class(&metadata_name),
        TypeKeyword::Struct => TypeInfo::structure(&metadata_name),
        TypeKeyword::Interface => TypeInfo::interface(&metadata_name),
        TypeKeyword::Enum => TypeInfo::enumeration(&metadata_name),
    }
}

/// Closes a generic definition over resolved arguments.
/// Panics when the argument count does not match the definition's arity.
pub fn construct_generic(
    definition: NamedSymbol,
    arguments: Vec<TypeDescriptor>,
) -> TypeDescriptor {
    assert_eq!(
        definition.arity,
        arguments.len(),
        "generic `{}` takes {} arguments, got {}",
        definition.qualified_name(),
        definition.arity,
        arguments.len()
    );
    TypeDescriptor::Generic {
        definition,
        arguments,
    }
}

pub fn construct_array(element: TypeDescriptor, rank: usize) -> TypeDescriptor {
    assert!(rank >= 1, "array rank must be at least 1");
    TypeDescriptor::Array {
        element: Box::new(element),
        rank,
    }
}
