//! Validation policies
//!
//! A `Validation` decides which types become containers and which of their
//! members survive into the generated declaration. Policies are explicit
//! values handed to the builder, composed rather than subclassed:
//! `ExternalValidation` wraps `ContainerValidation` and layers metadata
//! rejections on top while feeding its stricter member rules back into the
//! any-valid-member checks.

use husk_universe::{FieldInfo, PropertyInfo, TypeInfo};

use crate::eligibility::{is_eligible_field, is_eligible_property, is_eligible_type};

pub trait Validation {
    fn validate_type(&self, info: &TypeInfo) -> bool;

    fn validate_field(&self, field: &FieldInfo) -> bool {
        is_eligible_field(field)
    }

    fn validate_property(&self, property: &PropertyInfo) -> bool {
        is_eligible_property(property)
    }

    /// Fields that pass this policy, in declaration order
    fn fields<'a>(&self, info: &'a TypeInfo) -> Vec<&'a FieldInfo> {
        info.fields
            .iter()
            .filter(|field| self.validate_field(field))
            .collect()
    }

    /// Properties that pass this policy, in declaration order
    fn properties<'a>(&self, info: &'a TypeInfo) -> Vec<&'a PropertyInfo> {
        info.properties
            .iter()
            .filter(|property| self.validate_property(property))
            .collect()
    }
}

/// Toggleable container policy. Every toggle weakens the aggregate when
/// switched off; with all toggles off any type passes. The two any-member
/// toggles form a disjunction: a candidate needs at least one valid field
/// or one valid property while both are on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerValidation {
    pub check_container: bool,
    pub check_default_constructor: bool,
    pub check_any_valid_fields: bool,
    pub check_any_valid_properties: bool,
}

impl Default for ContainerValidation {
    fn default() -> Self {
        Self {
            check_container: true,
            check_default_constructor: true,
            check_any_valid_fields: true,
            check_any_valid_properties: true,
        }
    }
}

impl ContainerValidation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_type_container(&self, info: &TypeInfo) -> bool {
        is_eligible_type(info)
    }

    pub fn has_default_constructor(&self, info: &TypeInfo) -> bool {
        info.is_value_type() || info.has_default_constructor
    }

    pub fn has_any_valid_fields(&self, info: &TypeInfo) -> bool {
        info.fields.iter().any(|field| self.validate_field(field))
    }

    pub fn has_any_valid_properties(&self, info: &TypeInfo) -> bool {
        info.properties
            .iter()
            .any(|property| self.validate_property(property))
    }

    /// Aggregate check with member rules supplied by `members`, so wrapping
    /// policies can tighten what counts as a valid member.
    pub fn validate_with(&self, info: &TypeInfo, members: &dyn Validation) -> bool {
        let container = !self.check_container || self.is_type_container(info);
        let constructor = !self.check_default_constructor || self.has_default_constructor(info);
        let any_fields = !self.check_any_valid_fields
            || info.fields.iter().any(|field| members.validate_field(field));
        let any_properties = !self.check_any_valid_properties
            || info
                .properties
                .iter()
                .any(|property| members.validate_property(property));

        container && constructor && (any_fields || any_properties)
    }
}

impl Validation for ContainerValidation {
    fn validate_type(&self, info: &TypeInfo) -> bool {
        self.validate_with(info, self)
    }
}

/// Policy for externally selected types: the container policy plus
/// independently toggleable rejections of metadata categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalValidation {
    pub container: ContainerValidation,
    pub check_attribute: bool,
    pub check_framework_object: bool,
    pub check_obsolete: bool,
    pub check_special_name: bool,
}

impl Default for ExternalValidation {
    fn default() -> Self {
        Self {
            container: ContainerValidation::new(),
            check_attribute: true,
            check_framework_object: true,
            check_obsolete: true,
            check_special_name: true,
        }
    }
}

impl ExternalValidation {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validation for ExternalValidation {
    fn validate_type(&self, info: &TypeInfo) -> bool {
        if self.check_attribute && info.is_attribute {
            return false;
        }
        if self.check_framework_object && info.is_framework_object {
            return false;
        }
        if self.check_obsolete && info.is_obsolete {
            return false;
        }
        if self.check_special_name && info.is_special_name {
            return false;
        }
        self.container.validate_with(info, self)
    }

    fn validate_field(&self, field: &FieldInfo) -> bool {
        if self.check_obsolete && field.is_obsolete {
            return false;
        }
        if self.check_special_name && field.is_special_name {
            return false;
        }
        is_eligible_field(field)
    }

    fn validate_property(&self, property: &PropertyInfo) -> bool {
        if self.check_obsolete && property.is_obsolete {
            return false;
        }
        if self.check_special_name && property.is_special_name {
            return false;
        }
        is_eligible_property(property)
    }
}
