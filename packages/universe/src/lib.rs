pub mod descriptor;
pub mod error;
pub mod info;
pub mod module;
pub mod semantic;
pub mod universe;

pub use descriptor::TypeDescriptor;
pub use error::ResolveError;
pub use info::{AccessorInfo, FieldInfo, NamedSymbol, PropertyInfo, TypeInfo, TypeKind, TypeRef};
pub use module::Module;
pub use semantic::{check_attribute, CheckAttributeWalker, SemanticModel};
pub use universe::{construct_array, construct_generic, Universe};
