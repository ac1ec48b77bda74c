//! Declaration syntax tree for generated container sources
//!
//! The tree models the C# declaration subset the generator works with.
//! Nodes are plain sum types: every transformation is a `match`, every
//! rewrite produces a new value, and unmodified subtrees are moved or
//! cloned rather than mutated behind the caller's back.

use serde::{Deserialize, Serialize};

/// Leading/trailing trivia attached to a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Trivia {
    Comment(String),
    Newline,
    Whitespace(String),
}

/// Flat classification of every node category in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyntaxKind {
    CompilationUnit,
    UsingDirective,
    NamespaceDeclaration,
    ClassDeclaration,
    StructDeclaration,
    InterfaceDeclaration,
    EnumDeclaration,
    FieldDeclaration,
    PropertyDeclaration,
    MethodDeclaration,
    AccessorDeclaration,
    Parameter,
    TypeParameter,
    AttributeList,
    Attribute,
}

/// Root node of a source file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CompilationUnit {
    pub leading: Vec<Trivia>,
    pub usings: Vec<UsingDirective>,
    pub members: Vec<Member>,
}

impl CompilationUnit {
    pub fn new() -> Self {
        Self::default()
    }
}

/// `using Some.Namespace;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsingDirective {
    pub name: String,
}

impl UsingDirective {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "using directive name cannot be empty");
        Self { name }
    }
}

/// Top-level member: a namespace or a type declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Member {
    Namespace(NamespaceDeclaration),
    Type(TypeDeclaration),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamespaceDeclaration {
    pub name: String,
    pub usings: Vec<UsingDirective>,
    pub members: Vec<Member>,
}

impl NamespaceDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "namespace name cannot be empty");
        Self {
            name,
            usings: Vec::new(),
            members: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeKeyword {
    Class,
    Struct,
    Interface,
    Enum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    Public,
    Internal,
    Static,
    Abstract,
    Readonly,
    Const,
}

impl Modifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Internal => "internal",
            Modifier::Static => "static",
            Modifier::Abstract => "abstract",
            Modifier::Readonly => "readonly",
            Modifier::Const => "const",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub attribute_lists: Vec<AttributeList>,
    pub modifiers: Vec<Modifier>,
    pub keyword: TypeKeyword,
    pub name: String,
    pub type_parameters: Vec<TypeParameter>,
    pub base_types: Vec<TypeSyntax>,
    pub members: Vec<TypeMember>,
}

impl TypeDeclaration {
    pub fn new(keyword: TypeKeyword, name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "type name cannot be empty");
        Self {
            attribute_lists: Vec::new(),
            modifiers: Vec::new(),
            keyword,
            name,
            type_parameters: Vec::new(),
            base_types: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        match self.keyword {
            TypeKeyword::Class => SyntaxKind::ClassDeclaration,
            TypeKeyword::Struct => SyntaxKind::StructDeclaration,
            TypeKeyword::Interface => SyntaxKind::InterfaceDeclaration,
            TypeKeyword::Enum => SyntaxKind::EnumDeclaration,
        }
    }
}

/// Member of a type declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeMember {
    Field(FieldDeclaration),
    Property(PropertyDeclaration),
    Method(MethodDeclaration),
    Nested(TypeDeclaration),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    pub attribute_lists: Vec<AttributeList>,
    pub modifiers: Vec<Modifier>,
    pub ty: TypeSyntax,
    pub name: String,
    pub initializer: Option<Expression>,
}

impl FieldDeclaration {
    pub fn new(ty: TypeSyntax, name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "field name cannot be empty");
        Self {
            attribute_lists: Vec::new(),
            modifiers: Vec::new(),
            ty,
            name,
            initializer: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDeclaration {
    pub attribute_lists: Vec<AttributeList>,
    pub modifiers: Vec<Modifier>,
    pub ty: TypeSyntax,
    pub name: String,
    pub accessors: Vec<AccessorDeclaration>,
    pub initializer: Option<Expression>,
}

impl PropertyDeclaration {
    /// Property with bodiless `get` and `set` accessors
    pub fn auto(ty: TypeSyntax, name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "property name cannot be empty");
        Self {
            attribute_lists: Vec::new(),
            modifiers: Vec::new(),
            ty,
            name,
            accessors: vec![
                AccessorDeclaration::new(AccessorKind::Get),
                AccessorDeclaration::new(AccessorKind::Set),
            ],
            initializer: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessorKind {
    Get,
    Set,
}

/// Bodiless accessor (`get;` / `set;`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessorDeclaration {
    pub attribute_lists: Vec<AttributeList>,
    pub kind: AccessorKind,
}

impl AccessorDeclaration {
    pub fn new(kind: AccessorKind) -> Self {
        Self {
            attribute_lists: Vec::new(),
            kind,
        }
    }
}

/// Bodiless method signature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    pub attribute_lists: Vec<AttributeList>,
    pub modifiers: Vec<Modifier>,
    pub return_type: TypeSyntax,
    pub name: String,
    pub type_parameters: Vec<TypeParameter>,
    pub parameters: Vec<Parameter>,
}

impl MethodDeclaration {
    pub fn new(return_type: TypeSyntax, name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "method name cannot be empty");
        Self {
            attribute_lists: Vec::new(),
            modifiers: Vec::new(),
            return_type,
            name,
            type_parameters: Vec::new(),
            parameters: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub attribute_lists: Vec<AttributeList>,
    pub ty: TypeSyntax,
    pub name: String,
}

impl Parameter {
    pub fn new(ty: TypeSyntax, name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "parameter name cannot be empty");
        Self {
            attribute_lists: Vec::new(),
            ty,
            name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeParameter {
    pub attribute_lists: Vec<AttributeList>,
    pub name: String,
}

impl TypeParameter {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "type parameter name cannot be empty");
        Self {
            attribute_lists: Vec::new(),
            name,
        }
    }
}

/// `[A, B("x")]` with its surrounding trivia
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeList {
    pub leading: Vec<Trivia>,
    pub trailing: Vec<Trivia>,
    pub attributes: Vec<Attribute>,
}

impl AttributeList {
    pub fn single(attribute: Attribute) -> Self {
        Self {
            leading: Vec::new(),
            trailing: Vec::new(),
            attributes: vec![attribute],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub ty: TypeSyntax,
    pub arguments: Vec<Expression>,
}

impl Attribute {
    pub fn new(ty: TypeSyntax) -> Self {
        Self {
            ty,
            arguments: Vec::new(),
        }
    }

    pub fn with_arguments(ty: TypeSyntax, arguments: Vec<Expression>) -> Self {
        Self { ty, arguments }
    }
}

/// Type as written in source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeSyntax {
    Named {
        global: bool,
        segments: Vec<String>,
    },
    Generic {
        global: bool,
        segments: Vec<String>,
        arguments: Vec<TypeSyntax>,
    },
    Array {
        element: Box<TypeSyntax>,
        rank: usize,
    },
}

impl TypeSyntax {
    /// Type name from a dotted path, e.g. `"UnityEngine.Vector2"` or `"int"`
    pub fn named(path: &str) -> Self {
        assert!(!path.is_empty(), "type name cannot be empty");
        TypeSyntax::Named {
            global: false,
            segments: path.split('.').map(str::to_owned).collect(),
        }
    }

    /// Globally qualified type name, rendered with a `global::` prefix
    pub fn global(path: &str) -> Self {
        assert!(!path.is_empty(), "type name cannot be empty");
        TypeSyntax::Named {
            global: true,
            segments: path.split('.').map(str::to_owned).collect(),
        }
    }

    pub fn generic(path: &str, arguments: Vec<TypeSyntax>) -> Self {
        assert!(!path.is_empty(), "type name cannot be empty");
        assert!(!arguments.is_empty(), "generic type needs at least one argument");
        TypeSyntax::Generic {
            global: false,
            segments: path.split('.').map(str::to_owned).collect(),
            arguments,
        }
    }

    pub fn array(element: TypeSyntax, rank: usize) -> Self {
        assert!(rank >= 1, "array rank must be at least 1");
        TypeSyntax::Array {
            element: Box::new(element),
            rank,
        }
    }

    /// Final identifier of the type path
    pub fn identifier(&self) -> Option<&str> {
        match self {
            TypeSyntax::Named { segments, .. } | TypeSyntax::Generic { segments, .. } => {
                segments.last().map(String::as_str)
            }
            TypeSyntax::Array { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Literal(Literal),
    TypeOf(TypeSyntax),
    Identifier(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Null,
}

/// Borrowed view over the closed set of declarations that can carry
/// attributes. Predicate-driven rewriters receive these.
#[derive(Debug, Clone, Copy)]
pub enum Declaration<'a> {
    Type(&'a TypeDeclaration),
    Field(&'a FieldDeclaration),
    Property(&'a PropertyDeclaration),
    Method(&'a MethodDeclaration),
    Accessor(&'a AccessorDeclaration),
    Parameter(&'a Parameter),
    TypeParameter(&'a TypeParameter),
}

impl<'a> Declaration<'a> {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            Declaration::Type(decl) => decl.kind(),
            Declaration::Field(_) => SyntaxKind::FieldDeclaration,
            Declaration::Property(_) => SyntaxKind::PropertyDeclaration,
            Declaration::Method(_) => SyntaxKind::MethodDeclaration,
            Declaration::Accessor(_) => SyntaxKind::AccessorDeclaration,
            Declaration::Parameter(_) => SyntaxKind::Parameter,
            Declaration::TypeParameter(_) => SyntaxKind::TypeParameter,
        }
    }

    pub fn name(&self) -> Option<&'a str> {
        match self {
            Declaration::Type(decl) => Some(&decl.name),
            Declaration::Field(field) => Some(&field.name),
            Declaration::Property(property) => Some(&property.name),
            Declaration::Method(method) => Some(&method.name),
            Declaration::Accessor(_) => None,
            Declaration::Parameter(parameter) => Some(&parameter.name),
            Declaration::TypeParameter(parameter) => Some(&parameter.name),
        }
    }
}
