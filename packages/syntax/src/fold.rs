//! Rewriting traversal over the declaration tree
//!
//! A fold takes nodes by value and returns new nodes, walking depth-first
//! so overrides see already-rewritten children. Callers keep their original
//! tree by cloning before folding; rewriters built on this trait expose a
//! `rewrite(&CompilationUnit) -> CompilationUnit` entry point that does the
//! clone for them.

use crate::ast::*;

pub trait Fold: Sized {
    fn fold_unit(&mut self, unit: CompilationUnit) -> CompilationUnit {
        walk_unit(self, unit)
    }

    fn fold_using(&mut self, using: UsingDirective) -> UsingDirective {
        using
    }

    fn fold_member(&mut self, member: Member) -> Member {
        walk_member(self, member)
    }

    fn fold_namespace(&mut self, namespace: NamespaceDeclaration) -> NamespaceDeclaration {
        walk_namespace(self, namespace)
    }

    fn fold_type_declaration(&mut self, declaration: TypeDeclaration) -> TypeDeclaration {
        walk_type_declaration(self, declaration)
    }

    fn fold_field(&mut self, field: FieldDeclaration) -> FieldDeclaration {
        walk_field(self, field)
    }

    fn fold_property(&mut self, property: PropertyDeclaration) -> PropertyDeclaration {
        walk_property(self, property)
    }

    fn fold_method(&mut self, method: MethodDeclaration) -> MethodDeclaration {
        walk_method(self, method)
    }

    fn fold_accessor(&mut self, accessor: AccessorDeclaration) -> AccessorDeclaration {
        walk_accessor(self, accessor)
    }

    fn fold_parameter(&mut self, parameter: Parameter) -> Parameter {
        walk_parameter(self, parameter)
    }

    fn fold_type_parameter(&mut self, parameter: TypeParameter) -> TypeParameter {
        walk_type_parameter(self, parameter)
    }

    fn fold_attribute_list(&mut self, list: AttributeList) -> AttributeList {
        walk_attribute_list(self, list)
    }

    fn fold_attribute(&mut self, attribute: Attribute) -> Attribute {
        attribute
    }
}

pub fn walk_unit<F: Fold>(fold: &mut F, unit: CompilationUnit) -> CompilationUnit {
    CompilationUnit {
        leading: unit.leading,
        usings: unit
            .usings
            .into_iter()
            .map(|using| fold.fold_using(using))
            .collect(),
        members: unit
            .members
            .into_iter()
            .map(|member| fold.fold_member(member))
            .collect(),
    }
}

pub fn walk_member<F: Fold>(fold: &mut F, member: Member) -> Member {
    match member {
        Member::Namespace(namespace) => Member::Namespace(fold.fold_namespace(namespace)),
        Member::Type(declaration) => Member::Type(fold.fold_type_declaration(declaration)),
    }
}

pub fn walk_namespace<F: Fold>(
    fold: &mut F,
    namespace: NamespaceDeclaration,
) -> NamespaceDeclaration {
    NamespaceDeclaration {
        name: namespace.name,
        usings: namespace
            .usings
            .into_iter()
            .map(|using| fold.fold_using(using))
            .collect(),
        members: namespace
            .members
            .into_iter()
            .map(|member| fold.fold_member(member))
            .collect(),
    }
}

pub fn walk_type_declaration<F: Fold>(
    fold: &mut F,
    declaration: TypeDeclaration,
) -> TypeDeclaration {
    TypeDeclaration {
        attribute_lists: fold_attribute_lists(fold, declaration.attribute_lists),
        modifiers: declaration.modifiers,
        keyword: declaration.keyword,
        name: declaration.name,
        type_parameters: declaration
            .type_parameters
            .into_iter()
            .map(|parameter| fold.fold_type_parameter(parameter))
            .collect(),
        base_types: declaration.base_types,
        members: declaration
            .members
            .into_iter()
            .map(|member| match member {
                TypeMember::Field(field) => TypeMember::Field(fold.fold_field(field)),
                TypeMember::Property(property) => {
                    TypeMember::Property(fold.fold_property(property))
                }
                TypeMember::Method(method) => TypeMember::Method(fold.fold_method(method)),
                TypeMember::Nested(nested) => {
                    TypeMember::Nested(fold.fold_type_declaration(nested))
                }
            })
            .collect(),
    }
}

pub fn walk_field<F: Fold>(fold: &mut F, field: FieldDeclaration) -> FieldDeclaration {
    FieldDeclaration {
        attribute_lists: fold_attribute_lists(fold, field.attribute_lists),
        ..field
    }
}

pub fn walk_property<F: Fold>(fold: &mut F, property: PropertyDeclaration) -> PropertyDeclaration {
    PropertyDeclaration {
        attribute_lists: fold_attribute_lists(fold, property.attribute_lists),
        modifiers: property.modifiers,
        ty: property.ty,
        name: property.name,
        accessors: property
            .accessors
            .into_iter()
            .map(|accessor| fold.fold_accessor(accessor))
            .collect(),
        initializer: property.initializer,
    }
}

pub fn walk_method<F: Fold>(fold: &mut F, method: MethodDeclaration) -> MethodDeclaration {
    MethodDeclaration {
        attribute_lists: fold_attribute_lists(fold, method.attribute_lists),
        modifiers: method.modifiers,
        return_type: method.return_type,
        name: method.name,
        type_parameters: method
            .type_parameters
            .into_iter()
            .map(|parameter| fold.fold_type_parameter(parameter))
            .collect(),
        parameters: method
            .parameters
            .into_iter()
            .map(|parameter| fold.fold_parameter(parameter))
            .collect(),
    }
}

pub fn walk_accessor<F: Fold>(fold: &mut F, accessor: AccessorDeclaration) -> AccessorDeclaration {
    AccessorDeclaration {
        attribute_lists: fold_attribute_lists(fold, accessor.attribute_lists),
        kind: accessor.kind,
    }
}

pub fn walk_parameter<F: Fold>(fold: &mut F, parameter: Parameter) -> Parameter {
    Parameter {
        attribute_lists: fold_attribute_lists(fold, parameter.attribute_lists),
        ..parameter
    }
}

pub fn walk_type_parameter<F: Fold>(fold: &mut F, parameter: TypeParameter) -> TypeParameter {
    TypeParameter {
        attribute_lists: fold_attribute_lists(fold, parameter.attribute_lists),
        name: parameter.name,
    }
}

pub fn walk_attribute_list<F: Fold>(fold: &mut F, list: AttributeList) -> AttributeList {
    AttributeList {
        leading: list.leading,
        trailing: list.trailing,
        attributes: list
            .attributes
            .into_iter()
            .map(|attribute| fold.fold_attribute(attribute))
            .collect(),
    }
}

fn fold_attribute_lists<F: Fold>(fold: &mut F, lists: Vec<AttributeList>) -> Vec<AttributeList> {
    lists
        .into_iter()
        .map(|list| fold.fold_attribute_list(list))
        .collect()
}
