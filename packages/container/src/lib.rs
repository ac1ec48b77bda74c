pub mod build;
pub mod container;
pub mod eligibility;
pub mod error;
pub mod selection;
pub mod validation;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod tests_selection;

pub use build::{build, build_unit};
pub use container::{unit, Container, ContainerMember};
pub use eligibility::{is_eligible_field, is_eligible_property, is_eligible_type};
pub use error::SelectionError;
pub use selection::{
    create_container, load_selection, save_selection, SelectionInfo, SelectionMember,
};
pub use validation::{ContainerValidation, ExternalValidation, Validation};
