//! Container model and declaration emission
//!
//! A `Container` is the validated, resolved shape of one generated type:
//! a name, a struct/class choice, and an ordered member list. Emission is
//! a pure read of the model into syntax nodes.

use husk_syntax::{
    CompilationUnit, Expression, FieldDeclaration, Member, Modifier, NamespaceDeclaration,
    PropertyDeclaration, TypeDeclaration, TypeKeyword, TypeMember,
};
use husk_universe::TypeDescriptor;

#[derive(Debug, Clone, PartialEq)]
pub struct ContainerMember {
    pub name: String,
    pub descriptor: TypeDescriptor,
    pub initializer: Option<Expression>,
    pub as_auto_property: bool,
}

impl ContainerMember {
    pub fn field(name: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "container member name cannot be empty");
        Self {
            name,
            descriptor,
            initializer: None,
            as_auto_property: false,
        }
    }

    pub fn property(name: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        let mut member = Self::field(name, descriptor);
        member.as_auto_property = true;
        member
    }

    pub fn with_initializer(mut self, initializer: Expression) -> Self {
        self.initializer = Some(initializer);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub name: String,
    pub as_struct: bool,
    members: Vec<ContainerMember>,
}

impl Container {
    pub fn new(name: impl Into<String>, as_struct: bool) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "container name cannot be empty");
        Self {
            name,
            as_struct,
            members: Vec::new(),
        }
    }

    /// Appends a member. Member names are unique within a container;
    /// adding a duplicate is a caller bug.
    pub fn add(&mut self, member: ContainerMember) {
        assert!(
            self.get(&member.name).is_none(),
            "container `{}` already has a member named `{}`",
            self.name,
            member.name
        );
        self.members.push(member);
    }

    pub fn get(&self, name: &str) -> Option<&ContainerMember> {
        self.members.iter().find(|member| member.name == name)
    }

    pub fn members(&self) -> &[ContainerMember] {
        &self.members
    }

    /// Public struct/class declaration with one node per member, in order
    pub fn declaration(&self) -> TypeDeclaration {
        let keyword = if self.as_struct {
            TypeKeyword::Struct
        } else {
            TypeKeyword::Class
        };
        let mut declaration = TypeDeclaration::new(keyword, &self.name);
        declaration.modifiers.push(Modifier::Public);

        for member in &self.members {
            let ty = member.descriptor.to_syntax();
            if member.as_auto_property {
                let mut property = PropertyDeclaration::auto(ty, &member.name);
                property.modifiers.push(Modifier::Public);
                property.initializer = member.initializer.clone();
                declaration.members.push(TypeMember::Property(property));
            } else {
                let mut field = FieldDeclaration::new(ty, &member.name);
                field.modifiers.push(Modifier::Public);
                field.initializer = member.initializer.clone();
                declaration.members.push(TypeMember::Field(field));
            }
        }
        declaration
    }
}

/// Compilation unit holding the container declaration, wrapped in a
/// namespace only when one is given and non-empty.
pub fn unit(container: &Container, namespace: Option<&str>) -> CompilationUnit {
    let mut unit = CompilationUnit::new();
    match namespace.filter(|name| !name.is_empty()) {
        Some(name) => {
            let mut declaration = NamespaceDeclaration::new(name);
            declaration
                .members
                .push(Member::Type(container.declaration()));
            unit.members.push(Member::Namespace(declaration));
        }
        None => unit.members.push(Member::Type(container.declaration())),
    }
    unit
}
