//! External selection records
//!
//! A selection is the serializable answer to "which members of this type
//! should the generated container carry". Records are snapshotted from a
//! live type, edited externally (an inspector, a config file), stored as
//! JSON, and later reconstructed against whatever the type looks like by
//! then. Members that drifted away in the meantime are dropped quietly;
//! losing the target type itself is a hard failure.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use husk_universe::{TypeInfo, Universe};

use crate::build::add_member;
use crate::container::Container;
use crate::error::SelectionError;
use crate::validation::Validation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionMember {
    pub active: bool,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionInfo {
    #[serde(rename = "typeName")]
    pub type_name: String,
    pub members: Vec<SelectionMember>,
}

impl SelectionInfo {
    /// Snapshot of a type: every member the policy accepts, fields first,
    /// all marked active.
    pub fn from_type(info: &TypeInfo, validation: &dyn Validation) -> Self {
        let mut members = Vec::new();
        for field in validation.fields(info) {
            members.push(SelectionMember {
                active: true,
                name: field.name.clone(),
            });
        }
        for property in validation.properties(info) {
            members.push(SelectionMember {
                active: true,
                name: property.name.clone(),
            });
        }
        Self {
            type_name: info.metadata_name.clone(),
            members,
        }
    }

    pub fn member(&self, name: &str) -> Option<&SelectionMember> {
        self.members.iter().find(|member| member.name == name)
    }

    /// Looks the recorded target up across the whole universe.
    /// An empty recorded name never resolves.
    pub fn target_type<'a>(&self, universe: &'a Universe) -> Option<&'a TypeInfo> {
        if self.type_name.is_empty() {
            return None;
        }
        universe.get_type(&self.type_name)
    }

    fn is_selected(&self, name: &str) -> bool {
        self.member(name).is_some_and(|member| member.active)
    }

    pub fn to_json(&self) -> String {
        let mut text =
            serde_json::to_string_pretty(self).expect("selection record always serializes");
        text.push('\n');
        text
    }

    /// Parses a stored record. Unparseable text and records carrying
    /// duplicate member names both yield no record.
    pub fn from_json(text: &str) -> Option<Self> {
        let info: Self = serde_json::from_str(text).ok()?;
        let mut seen = HashSet::new();
        if info.members.iter().any(|member| !seen.insert(&member.name)) {
            return None;
        }
        Some(info)
    }
}

/// Rebuilds a container from a stored selection against the live type.
/// Eligibility is re-derived from the type as it is now; a member makes it
/// in only when the policy still accepts it, the record lists it, and the
/// record marks it active.
pub fn create_container(
    selection: &SelectionInfo,
    validation: &dyn Validation,
    universe: &Universe,
) -> Result<Container, SelectionError> {
    let info = selection
        .target_type(universe)
        .ok_or_else(|| SelectionError::TargetNotFound {
            name: selection.type_name.clone(),
        })?;

    let mut container = Container::new(&info.name, info.is_value_type());
    for field in validation.fields(info) {
        if selection.is_selected(&field.name) {
            add_member(&mut container, &field.name, &field.field_type, false, universe);
        }
    }
    for property in validation.properties(info) {
        if selection.is_selected(&property.name) {
            add_member(
                &mut container,
                &property.name,
                &property.property_type,
                true,
                universe,
            );
        }
    }
    Ok(container)
}

/// Reads a stored selection. Missing or malformed files yield no record.
pub fn load_selection(path: impl AsRef<Path>) -> Option<SelectionInfo> {
    let path = path.as_ref();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "selection file unreadable");
            return None;
        }
    };
    let info = SelectionInfo::from_json(&text);
    if info.is_none() {
        tracing::warn!(path = %path.display(), "selection file malformed");
    }
    info
}

pub fn save_selection(path: impl AsRef<Path>, info: &SelectionInfo) -> io::Result<()> {
    fs::write(path, info.to_json())
}
