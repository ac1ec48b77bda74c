//! Non-destructive tree rewriters
//!
//! Each rewriter implements [`Fold`] and exposes `rewrite`, which clones the
//! input tree and returns the rewritten copy. The original tree is never
//! touched.

use crate::ast::*;
use crate::fold::{self, Fold};

fn append_attribute(lists: &mut Vec<AttributeList>, attribute: &Attribute) {
    lists.push(AttributeList::single(attribute.clone()));
}

/// Appends an attribute to every node of the target syntactic kind.
///
/// Kinds that cannot carry attributes (using directives, namespaces, the
/// unit itself) never match anything; the rewrite is then the identity.
pub struct AddAttributeToKind {
    pub attribute: Attribute,
    pub kind: SyntaxKind,
}

impl AddAttributeToKind {
    pub fn new(attribute: Attribute, kind: SyntaxKind) -> Self {
        Self { attribute, kind }
    }

    pub fn rewrite(&mut self, unit: &CompilationUnit) -> CompilationUnit {
        self.fold_unit(unit.clone())
    }
}

impl Fold for AddAttributeToKind {
    fn fold_type_declaration(&mut self, declaration: TypeDeclaration) -> TypeDeclaration {
        let mut declaration = fold::walk_type_declaration(self, declaration);
        if declaration.kind() == self.kind {
            append_attribute(&mut declaration.attribute_lists, &self.attribute);
        }
        declaration
    }

    fn fold_field(&mut self, field: FieldDeclaration) -> FieldDeclaration {
        let mut field = fold::walk_field(self, field);
        if self.kind == SyntaxKind::FieldDeclaration {
            append_attribute(&mut field.attribute_lists, &self.attribute);
        }
        field
    }

    fn fold_property(&mut self, property: PropertyDeclaration) -> PropertyDeclaration {
        let mut property = fold::walk_property(self, property);
        if self.kind == SyntaxKind::PropertyDeclaration {
            append_attribute(&mut property.attribute_lists, &self.attribute);
        }
        property
    }

    fn fold_method(&mut self, method: MethodDeclaration) -> MethodDeclaration {
        let mut method = fold::walk_method(self, method);
        if self.kind == SyntaxKind::MethodDeclaration {
            append_attribute(&mut method.attribute_lists, &self.attribute);
        }
        method
    }

    fn fold_accessor(&mut self, accessor: AccessorDeclaration) -> AccessorDeclaration {
        let mut accessor = fold::walk_accessor(self, accessor);
        if self.kind == SyntaxKind::AccessorDeclaration {
            append_attribute(&mut accessor.attribute_lists, &self.attribute);
        }
        accessor
    }

    fn fold_parameter(&mut self, parameter: Parameter) -> Parameter {
        let mut parameter = fold::walk_parameter(self, parameter);
        if self.kind == SyntaxKind::Parameter {
            append_attribute(&mut parameter.attribute_lists, &self.attribute);
        }
        parameter
    }

    fn fold_type_parameter(&mut self, parameter: TypeParameter) -> TypeParameter {
        let mut parameter = fold::walk_type_parameter(self, parameter);
        if self.kind == SyntaxKind::TypeParameter {
            append_attribute(&mut parameter.attribute_lists, &self.attribute);
        }
        parameter
    }
}

/// Validates each attributable declaration with a predicate and appends an
/// attribute on acceptance. The predicate receives the declaration after its
/// children have been rewritten.
pub struct AddAttributeToDeclaration {
    attribute: Attribute,
    validate: Box<dyn Fn(Declaration) -> bool>,
}

impl AddAttributeToDeclaration {
    /// Rewriter that accepts every attributable declaration
    pub fn new(attribute: Attribute) -> Self {
        Self {
            attribute,
            validate: Box::new(|_| true),
        }
    }

    pub fn with_validate(
        attribute: Attribute,
        validate: impl Fn(Declaration) -> bool + 'static,
    ) -> Self {
        Self {
            attribute,
            validate: Box::new(validate),
        }
    }

    pub fn rewrite(&mut self, unit: &CompilationUnit) -> CompilationUnit {
        self.fold_unit(unit.clone())
    }

    fn accepts(&self, declaration: Declaration) -> bool {
        (self.validate)(declaration)
    }
}

impl Fold for AddAttributeToDeclaration {
    fn fold_type_declaration(&mut self, declaration: TypeDeclaration) -> TypeDeclaration {
        let mut declaration = fold::walk_type_declaration(self, declaration);
        if self.accepts(Declaration::Type(&declaration)) {
            append_attribute(&mut declaration.attribute_lists, &self.attribute);
        }
        declaration
    }

    fn fold_field(&mut self, field: FieldDeclaration) -> FieldDeclaration {
        let mut field = fold::walk_field(self, field);
        if self.accepts(Declaration::Field(&field)) {
            append_attribute(&mut field.attribute_lists, &self.attribute);
        }
        field
    }

    fn fold_property(&mut self, property: PropertyDeclaration) -> PropertyDeclaration {
        let mut property = fold::walk_property(self, property);
        if self.accepts(Declaration::Property(&property)) {
            append_attribute(&mut property.attribute_lists, &self.attribute);
        }
        property
    }

    fn fold_method(&mut self, method: MethodDeclaration) -> MethodDeclaration {
        let mut method = fold::walk_method(self, method);
        if self.accepts(Declaration::Method(&method)) {
            append_attribute(&mut method.attribute_lists, &self.attribute);
        }
        method
    }

    fn fold_accessor(&mut self, accessor: AccessorDeclaration) -> AccessorDeclaration {
        let mut accessor = fold::walk_accessor(self, accessor);
        if self.accepts(Declaration::Accessor(&accessor)) {
            append_attribute(&mut accessor.attribute_lists, &self.attribute);
        }
        accessor
    }

    fn fold_parameter(&mut self, parameter: Parameter) -> Parameter {
        let mut parameter = fold::walk_parameter(self, parameter);
        if self.accepts(Declaration::Parameter(&parameter)) {
            append_attribute(&mut parameter.attribute_lists, &self.attribute);
        }
        parameter
    }

    fn fold_type_parameter(&mut self, parameter: TypeParameter) -> TypeParameter {
        let mut parameter = fold::walk_type_parameter(self, parameter);
        if self.accepts(Declaration::TypeParameter(&parameter)) {
            append_attribute(&mut parameter.attribute_lists, &self.attribute);
        }
        parameter
    }
}

/// Annotates classes deriving from a known generic base.
///
/// A class whose base list contains `<generic_ident><T>` with exactly one
/// type argument gains `[<attribute_type>(typeof(T))]`. Matched classes are
/// returned as-is apart from the new attribute; unmatched classes get the
/// default traversal.
pub struct AddAttributeFromGenericArgument {
    pub attribute_type: TypeSyntax,
    pub generic_ident: String,
}

impl AddAttributeFromGenericArgument {
    pub fn new(attribute_type: TypeSyntax, generic_ident: impl Into<String>) -> Self {
        let generic_ident = generic_ident.into();
        assert!(!generic_ident.is_empty(), "generic identifier cannot be empty");
        Self {
            attribute_type,
            generic_ident,
        }
    }

    pub fn rewrite(&mut self, unit: &CompilationUnit) -> CompilationUnit {
        self.fold_unit(unit.clone())
    }

    fn match_base(&self, declaration: &TypeDeclaration) -> Option<TypeSyntax> {
        for base in &declaration.base_types {
            if let TypeSyntax::Generic {
                segments,
                arguments,
                ..
            } = base
            {
                if segments.last().map(String::as_str) == Some(self.generic_ident.as_str())
                    && arguments.len() == 1
                {
                    return Some(arguments[0].clone());
                }
            }
        }
        None
    }
}

impl Fold for AddAttributeFromGenericArgument {
    fn fold_type_declaration(&mut self, mut declaration: TypeDeclaration) -> TypeDeclaration {
        if declaration.keyword == TypeKeyword::Class {
            if let Some(argument) = self.match_base(&declaration) {
                let attribute = Attribute::with_arguments(
                    self.attribute_type.clone(),
                    vec![Expression::TypeOf(argument)],
                );
                declaration.attribute_lists.push(AttributeList::single(attribute));
                return declaration;
            }
        }
        fold::walk_type_declaration(self, declaration)
    }
}

/// Normalizes attribute-list trivia so each list ends with a line break plus
/// the indentation that preceded it.
///
/// Lists that already carry trailing trivia are left alone, which makes the
/// rewrite idempotent.
pub struct FormatAttributeLists;

impl FormatAttributeLists {
    pub fn new() -> Self {
        Self
    }

    pub fn rewrite(&mut self, unit: &CompilationUnit) -> CompilationUnit {
        self.fold_unit(unit.clone())
    }
}

impl Default for FormatAttributeLists {
    fn default() -> Self {
        Self::new()
    }
}

impl Fold for FormatAttributeLists {
    fn fold_attribute_list(&mut self, list: AttributeList) -> AttributeList {
        let mut list = fold::walk_attribute_list(self, list);
        if list.trailing.is_empty() {
            let mut trailing = vec![Trivia::Newline];
            for trivia in list.leading.iter().rev() {
                match trivia {
                    Trivia::Whitespace(_) => trailing.push(trivia.clone()),
                    _ => break,
                }
            }
            list.trailing = trailing;
        }
        list
    }
}
