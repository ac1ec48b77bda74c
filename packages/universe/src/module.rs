//! Module catalogs
//!
//! A module is a named collection of type records keyed by metadata name,
//! preserving registration order. The universe layers modules for lookup.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::info::TypeInfo;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    pub types: IndexMap<String, TypeInfo>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: IndexMap::new(),
        }
    }

    /// Registers a type record, replacing any previous entry with the same
    /// metadata name.
    pub fn add(&mut self, info: TypeInfo) {
        self.types.insert(info.metadata_name.clone(), info);
    }

    pub fn with_type(mut self, info: TypeInfo) -> Self {
        self.add(info);
        self
    }

    pub fn get(&self, metadata_name: &str) -> Option<&TypeInfo> {
        self.types.get(metadata_name)
    }

    pub fn contains(&self, metadata_name: &str) -> bool {
        self.types.contains_key(metadata_name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeInfo> {
        self.types.values()
    }
}
