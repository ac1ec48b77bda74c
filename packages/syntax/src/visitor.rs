//! Read-only traversal over the declaration tree
//!
//! This trait provides default implementations that walk the entire tree
//! in document order. Override specific visit_* methods to perform custom
//! actions on nodes.

use crate::ast::*;

pub trait Visitor: Sized {
    fn visit_unit(&mut self, unit: &CompilationUnit) {
        walk_unit(self, unit);
    }

    fn visit_using(&mut self, _using: &UsingDirective) {
        // Leaf node, no children to walk
    }

    fn visit_member(&mut self, member: &Member) {
        walk_member(self, member);
    }

    fn visit_namespace(&mut self, namespace: &NamespaceDeclaration) {
        walk_namespace(self, namespace);
    }

    fn visit_type_declaration(&mut self, declaration: &TypeDeclaration) {
        walk_type_declaration(self, declaration);
    }

    fn visit_field(&mut self, field: &FieldDeclaration) {
        walk_field(self, field);
    }

    fn visit_property(&mut self, property: &PropertyDeclaration) {
        walk_property(self, property);
    }

    fn visit_method(&mut self, method: &MethodDeclaration) {
        walk_method(self, method);
    }

    fn visit_accessor(&mut self, accessor: &AccessorDeclaration) {
        walk_accessor(self, accessor);
    }

    fn visit_parameter(&mut self, parameter: &Parameter) {
        walk_parameter(self, parameter);
    }

    fn visit_type_parameter(&mut self, parameter: &TypeParameter) {
        walk_type_parameter(self, parameter);
    }

    fn visit_attribute_list(&mut self, list: &AttributeList) {
        walk_attribute_list(self, list);
    }

    fn visit_attribute(&mut self, _attribute: &Attribute) {
        // Leaf node, no children to walk
    }
}

pub fn walk_unit<V: Visitor>(visitor: &mut V, unit: &CompilationUnit) {
    for using in &unit.usings {
        visitor.visit_using(using);
    }
    for member in &unit.members {
        visitor.visit_member(member);
    }
}

pub fn walk_member<V: Visitor>(visitor: &mut V, member: &Member) {
    match member {
        Member::Namespace(namespace) => visitor.visit_namespace(namespace),
        Member::Type(declaration) => visitor.visit_type_declaration(declaration),
    }
}

pub fn walk_namespace<V: Visitor>(visitor: &mut V, namespace: &NamespaceDeclaration) {
    for using in &namespace.usings {
        visitor.visit_using(using);
    }
    for member in &namespace.members {
        visitor.visit_member(member);
    }
}

pub fn walk_type_declaration<V: Visitor>(visitor: &mut V, declaration: &TypeDeclaration) {
    for list in &declaration.attribute_lists {
        visitor.visit_attribute_list(list);
    }
    for parameter in &declaration.type_parameters {
        visitor.visit_type_parameter(parameter);
    }
    for member in &declaration.members {
        match member {
            TypeMember::Field(field) => visitor.visit_field(field),
            TypeMember::Property(property) => visitor.visit_property(property),
            TypeMember::Method(method) => visitor.visit_method(method),
            TypeMember::Nested(nested) => visitor.visit_type_declaration(nested),
        }
    }
}

pub fn walk_field<V: Visitor>(visitor: &mut V, field: &FieldDeclaration) {
    for list in &field.attribute_lists {
        visitor.visit_attribute_list(list);
    }
}

pub fn walk_property<V: Visitor>(visitor: &mut V, property: &PropertyDeclaration) {
    for list in &property.attribute_lists {
        visitor.visit_attribute_list(list);
    }
    for accessor in &property.accessors {
        visitor.visit_accessor(accessor);
    }
}

pub fn walk_method<V: Visitor>(visitor: &mut V, method: &MethodDeclaration) {
    for list in &method.attribute_lists {
        visitor.visit_attribute_list(list);
    }
    for parameter in &method.type_parameters {
        visitor.visit_type_parameter(parameter);
    }
    for parameter in &method.parameters {
        visitor.visit_parameter(parameter);
    }
}

pub fn walk_accessor<V: Visitor>(visitor: &mut V, accessor: &AccessorDeclaration) {
    for list in &accessor.attribute_lists {
        visitor.visit_attribute_list(list);
    }
}

pub fn walk_parameter<V: Visitor>(visitor: &mut V, parameter: &Parameter) {
    for list in &parameter.attribute_lists {
        visitor.visit_attribute_list(list);
    }
}

pub fn walk_type_parameter<V: Visitor>(visitor: &mut V, parameter: &TypeParameter) {
    for list in &parameter.attribute_lists {
        visitor.visit_attribute_list(list);
    }
}

pub fn walk_attribute_list<V: Visitor>(visitor: &mut V, list: &AttributeList) {
    for attribute in &list.attributes {
        visitor.visit_attribute(attribute);
    }
}
