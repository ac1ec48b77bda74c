//! Baseline member and type eligibility
//!
//! These predicates encode what can structurally sit inside a generated
//! container, independent of any validation policy. Policies start from
//! these and layer their own rejections on top.

use husk_universe::{FieldInfo, PropertyInfo, TypeInfo, TypeKind};

/// A type can back a container when it is a public, concrete, non-generic
/// class or struct.
pub fn is_eligible_type(info: &TypeInfo) -> bool {
    let aggregate = matches!(info.kind, TypeKind::Class | TypeKind::Struct);

    aggregate
        && info.is_public
        && !info.is_nested_private
        && !info.is_generic_definition()
        && !info.is_generic_parameter
        && !info.is_abstract
        && !info.is_static()
}

/// Public instance fields that remain assignable
pub fn is_eligible_field(field: &FieldInfo) -> bool {
    field.is_public && !field.is_static && !field.is_constant && !field.is_readonly
}

/// Public instance properties readable and writable through both accessors
pub fn is_eligible_property(property: &PropertyInfo) -> bool {
    if property.index_parameters > 0 {
        return false;
    }
    match (&property.getter, &property.setter) {
        (Some(getter), Some(setter)) => [getter, setter]
            .iter()
            .all(|accessor| accessor.is_public && !accessor.is_static && !accessor.is_abstract),
        _ => false,
    }
}
