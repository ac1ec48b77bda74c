//! Reflective metadata records
//!
//! `TypeInfo` mirrors what a runtime reflection API reports about a type:
//! naming, kind flags, and the ordered field/property members the generator
//! inspects. Records are plain data built by whatever front end feeds the
//! generator (editor tooling, metadata dumps, tests).

use serde::{Deserialize, Serialize};

/// Reference to a type as reported by reflection: a metadata name, a closed
/// generic instantiation, or an array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeRef {
    Named(String),
    Generic {
        definition: Box<TypeRef>,
        arguments: Vec<TypeRef>,
    },
    Array {
        element: Box<TypeRef>,
        rank: usize,
    },
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "type reference name cannot be empty");
        TypeRef::Named(name)
    }

    pub fn generic(definition: TypeRef, arguments: Vec<TypeRef>) -> Self {
        assert!(
            !arguments.is_empty(),
            "generic type reference needs at least one argument"
        );
        TypeRef::Generic {
            definition: Box::new(definition),
            arguments,
        }
    }

    pub fn array(element: TypeRef, rank: usize) -> Self {
        assert!(rank >= 1, "array rank must be at least 1");
        TypeRef::Array {
            element: Box::new(element),
            rank,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeKind {
    Class,
    Struct,
    Enum,
    Interface,
    Delegate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeInfo {
    /// Metadata name, e.g. `System.Collections.Generic.List`1`
    pub metadata_name: String,
    pub namespace: Vec<String>,
    pub name: String,
    /// Number of generic parameters; zero for non-generic types
    pub arity: usize,
    /// Language keyword used in display form, e.g. `int` for `System.Int32`
    pub keyword: Option<String>,
    pub kind: TypeKind,
    pub is_public: bool,
    pub is_nested_private: bool,
    pub is_abstract: bool,
    pub is_sealed: bool,
    pub is_generic_parameter: bool,
    pub has_default_constructor: bool,
    /// Derives from the attribute base type
    pub is_attribute: bool,
    /// Derives from the host framework's object base type
    pub is_framework_object: bool,
    pub is_obsolete: bool,
    pub is_special_name: bool,
    pub fields: Vec<FieldInfo>,
    pub properties: Vec<PropertyInfo>,
}

impl TypeInfo {
    fn parse(metadata_name: &str, kind: TypeKind) -> Self {
        assert!(!metadata_name.is_empty(), "metadata name cannot be empty");

        let (path, arity) = match metadata_name.split_once('`') {
            Some((path, arity)) => (
                path,
                arity
                    .parse::<usize>()
                    .expect("metadata name carries an invalid arity"),
            ),
            None => (metadata_name, 0),
        };

        let mut segments: Vec<String> = path.split('.').map(str::to_owned).collect();
        let name = segments.pop().expect("metadata name cannot be empty");

        Self {
            metadata_name: metadata_name.to_owned(),
            namespace: segments,
            name,
            arity,
            keyword: None,
            kind,
            is_public: true,
            is_nested_private: false,
            is_abstract: false,
            is_sealed: false,
            is_generic_parameter: false,
            has_default_constructor: true,
            is_attribute: false,
            is_framework_object: false,
            is_obsolete: false,
            is_special_name: false,
            fields: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn class(metadata_name: &str) -> Self {
        Self::parse(metadata_name, TypeKind::Class)
    }

    pub fn structure(metadata_name: &str) -> Self {
        Self::parse(metadata_name, TypeKind::Struct)
    }

    pub fn enumeration(metadata_name: &str) -> Self {
        Self::parse(metadata_name, TypeKind::Enum)
    }

    pub fn interface(metadata_name: &str) -> Self {
        let mut info = Self::parse(metadata_name, TypeKind::Interface);
        info.is_abstract = true;
        info
    }

    pub fn delegate(metadata_name: &str) -> Self {
        Self::parse(metadata_name, TypeKind::Delegate)
    }

    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keyword = Some(keyword.to_owned());
        self
    }

    pub fn with_field(mut self, field: FieldInfo) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_property(mut self, property: PropertyInfo) -> Self {
        self.properties.push(property);
        self
    }

    pub fn is_value_type(&self) -> bool {
        matches!(self.kind, TypeKind::Struct | TypeKind::Enum)
    }

    /// Static types surface as abstract and sealed in reflection metadata
    pub fn is_static(&self) -> bool {
        self.is_abstract && self.is_sealed
    }

    pub fn is_generic_definition(&self) -> bool {
        self.arity > 0
    }

    /// Dotted namespace, `None` for global types
    pub fn namespace_string(&self) -> Option<String> {
        if self.namespace.is_empty() {
            None
        } else {
            Some(self.namespace.join("."))
        }
    }

    /// Descriptor symbol for this entry
    pub fn symbol(&self) -> NamedSymbol {
        NamedSymbol {
            metadata_name: self.metadata_name.clone(),
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            arity: self.arity,
            keyword: self.keyword.clone(),
        }
    }
}

/// Resolved named-type symbol carried inside descriptors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSymbol {
    pub metadata_name: String,
    pub namespace: Vec<String>,
    pub name: String,
    pub arity: usize,
    pub keyword: Option<String>,
}

impl NamedSymbol {
    /// Dotted path without arity marker, e.g. `System.Collections.Generic.List`
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace.join("."), self.name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub name: String,
    pub field_type: TypeRef,
    pub is_public: bool,
    pub is_static: bool,
    /// Compile-time constant (`const`)
    pub is_constant: bool,
    /// Single-assignment (`readonly`)
    pub is_readonly: bool,
    pub is_obsolete: bool,
    pub is_special_name: bool,
}

impl FieldInfo {
    pub fn new(name: impl Into<String>, field_type: TypeRef) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "field name cannot be empty");
        Self {
            name,
            field_type,
            is_public: true,
            is_static: false,
            is_constant: false,
            is_readonly: false,
            is_obsolete: false,
            is_special_name: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessorInfo {
    pub is_public: bool,
    pub is_static: bool,
    pub is_abstract: bool,
}

impl AccessorInfo {
    pub fn public() -> Self {
        Self {
            is_public: true,
            is_static: false,
            is_abstract: false,
        }
    }

    pub fn private() -> Self {
        Self {
            is_public: false,
            is_static: false,
            is_abstract: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyInfo {
    pub name: String,
    pub property_type: TypeRef,
    pub getter: Option<AccessorInfo>,
    pub setter: Option<AccessorInfo>,
    /// Indexers carry one or more index parameters
    pub index_parameters: usize,
    pub is_obsolete: bool,
    pub is_special_name: bool,
}

impl PropertyInfo {
    /// Read-write property with public accessors
    pub fn new(name: impl Into<String>, property_type: TypeRef) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "property name cannot be empty");
        Self {
            name,
            property_type,
            getter: Some(AccessorInfo::public()),
            setter: Some(AccessorInfo::public()),
            index_parameters: 0,
            is_obsolete: false,
            is_special_name: false,
        }
    }

    pub fn get_only(name: impl Into<String>, property_type: TypeRef) -> Self {
        let mut property = Self::new(name, property_type);
        property.setter = None;
        property
    }
}
