//! Building containers from reflective type records
//!
//! Fields come first, then properties, both in declaration order. A member
//! whose declared type cannot be resolved against the universe is skipped
//! rather than failing the whole container.

use husk_syntax::CompilationUnit;
use husk_universe::{TypeInfo, TypeRef, Universe};

use crate::container::{unit, Container, ContainerMember};
use crate::validation::Validation;

pub fn build(info: &TypeInfo, validation: &dyn Validation, universe: &Universe) -> Container {
    let mut container = Container::new(&info.name, info.is_value_type());

    for field in validation.fields(info) {
        add_member(
            &mut container,
            &field.name,
            &field.field_type,
            false,
            universe,
        );
    }
    for property in validation.properties(info) {
        add_member(
            &mut container,
            &property.name,
            &property.property_type,
            true,
            universe,
        );
    }
    container
}

/// Built container wrapped in the source type's namespace, when it has one
pub fn build_unit(
    info: &TypeInfo,
    validation: &dyn Validation,
    universe: &Universe,
) -> CompilationUnit {
    let container = build(info, validation, universe);
    unit(&container, info.namespace_string().as_deref())
}

pub(crate) fn add_member(
    container: &mut Container,
    name: &str,
    reference: &TypeRef,
    as_auto_property: bool,
    universe: &Universe,
) {
    match universe.resolve(reference) {
        Ok(descriptor) => {
            let member = if as_auto_property {
                ContainerMember::property(name, descriptor)
            } else {
                ContainerMember::field(name, descriptor)
            };
            container.add(member);
        }
        Err(error) => {
            tracing::debug!(container = %container.name, member = name, %error, "member skipped");
        }
    }
}
