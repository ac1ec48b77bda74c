//! Serializer converts a declaration tree back to source text
//!
//! Output is deterministic: equal trees render to equal text. Attribute
//! lists that carry explicit trailing trivia have it rendered verbatim;
//! everything else gets default formatting.

use crate::ast::*;
use std::fmt::Write;

pub struct Serializer {
    indent_level: usize,
    indent_string: String,
}

impl Serializer {
    pub fn new() -> Self {
        Self {
            indent_level: 0,
            indent_string: "    ".to_string(), // 4 spaces
        }
    }

    pub fn with_indent(indent: &str) -> Self {
        Self {
            indent_level: 0,
            indent_string: indent.to_string(),
        }
    }

    /// Serialize a full compilation unit to source text
    pub fn serialize(&mut self, unit: &CompilationUnit) -> String {
        let mut output = String::new();

        write_trivia(&unit.leading, &mut output);

        for using in &unit.usings {
            self.serialize_using(using, &mut output);
        }

        if !unit.usings.is_empty() && !unit.members.is_empty() {
            output.push('\n');
        }

        for (i, member) in unit.members.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            self.serialize_member(member, &mut output);
        }

        output
    }

    /// Serialize a single type declaration to source text
    pub fn serialize_type(&mut self, declaration: &TypeDeclaration) -> String {
        let mut output = String::new();
        self.serialize_type_declaration(declaration, &mut output);
        output
    }

    fn serialize_using(&self, using: &UsingDirective, output: &mut String) {
        self.indent(output);
        let _ = writeln!(output, "using {};", using.name);
    }

    fn serialize_member(&mut self, member: &Member, output: &mut String) {
        match member {
            Member::Namespace(namespace) => self.serialize_namespace(namespace, output),
            Member::Type(declaration) => self.serialize_type_declaration(declaration, output),
        }
    }

    fn serialize_namespace(&mut self, namespace: &NamespaceDeclaration, output: &mut String) {
        self.indent(output);
        let _ = writeln!(output, "namespace {}", namespace.name);
        self.open_brace(output);

        for using in &namespace.usings {
            self.serialize_using(using, output);
        }

        if !namespace.usings.is_empty() && !namespace.members.is_empty() {
            output.push('\n');
        }

        for (i, member) in namespace.members.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            self.serialize_member(member, output);
        }

        self.close_brace(output);
    }

    fn serialize_type_declaration(&mut self, declaration: &TypeDeclaration, output: &mut String) {
        self.serialize_attribute_lists(&declaration.attribute_lists, output);
        self.indent(output);
        self.write_modifiers(&declaration.modifiers, output);

        let keyword = match declaration.keyword {
            TypeKeyword::Class => "class",
            TypeKeyword::Struct => "struct",
            TypeKeyword::Interface => "interface",
            TypeKeyword::Enum => "enum",
        };
        output.push_str(keyword);
        output.push(' ');
        output.push_str(&declaration.name);

        if !declaration.type_parameters.is_empty() {
            output.push('<');
            for (i, parameter) in declaration.type_parameters.iter().enumerate() {
                if i > 0 {
                    output.push_str(", ");
                }
                output.push_str(&parameter.name);
            }
            output.push('>');
        }

        if !declaration.base_types.is_empty() {
            output.push_str(" : ");
            for (i, base) in declaration.base_types.iter().enumerate() {
                if i > 0 {
                    output.push_str(", ");
                }
                write_type(base, output);
            }
        }

        output.push('\n');
        self.open_brace(output);

        for (i, member) in declaration.members.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            match member {
                TypeMember::Field(field) => self.serialize_field(field, output),
                TypeMember::Property(property) => self.serialize_property(property, output),
                TypeMember::Method(method) => self.serialize_method(method, output),
                TypeMember::Nested(nested) => self.serialize_type_declaration(nested, output),
            }
        }

        self.close_brace(output);
    }

    fn serialize_field(&mut self, field: &FieldDeclaration, output: &mut String) {
        self.serialize_attribute_lists(&field.attribute_lists, output);
        self.indent(output);
        self.write_modifiers(&field.modifiers, output);
        write_type(&field.ty, output);
        output.push(' ');
        output.push_str(&field.name);
        if let Some(initializer) = &field.initializer {
            output.push_str(" = ");
            write_expression(initializer, output);
        }
        output.push_str(";\n");
    }

    fn serialize_property(&mut self, property: &PropertyDeclaration, output: &mut String) {
        self.serialize_attribute_lists(&property.attribute_lists, output);
        self.indent(output);
        self.write_modifiers(&property.modifiers, output);
        write_type(&property.ty, output);
        output.push(' ');
        output.push_str(&property.name);
        output.push('\n');

        self.indent(output);
        output.push_str("{\n");
        self.indent_level += 1;
        for accessor in &property.accessors {
            self.serialize_accessor(accessor, output);
        }
        self.indent_level -= 1;
        self.indent(output);
        output.push('}');
        if let Some(initializer) = &property.initializer {
            output.push_str(" = ");
            write_expression(initializer, output);
            output.push(';');
        }
        output.push('\n');
    }

    fn serialize_accessor(&mut self, accessor: &AccessorDeclaration, output: &mut String) {
        self.serialize_attribute_lists(&accessor.attribute_lists, output);
        self.indent(output);
        match accessor.kind {
            AccessorKind::Get => output.push_str("get;\n"),
            AccessorKind::Set => output.push_str("set;\n"),
        }
    }

    fn serialize_method(&mut self, method: &MethodDeclaration, output: &mut String) {
        self.serialize_attribute_lists(&method.attribute_lists, output);
        self.indent(output);
        self.write_modifiers(&method.modifiers, output);
        write_type(&method.return_type, output);
        output.push(' ');
        output.push_str(&method.name);

        if !method.type_parameters.is_empty() {
            output.push('<');
            for (i, parameter) in method.type_parameters.iter().enumerate() {
                if i > 0 {
                    output.push_str(", ");
                }
                output.push_str(&parameter.name);
            }
            output.push('>');
        }

        output.push('(');
        for (i, parameter) in method.parameters.iter().enumerate() {
            if i > 0 {
                output.push_str(", ");
            }
            self.serialize_attribute_lists_inline(&parameter.attribute_lists, output);
            write_type(&parameter.ty, output);
            output.push(' ');
            output.push_str(&parameter.name);
        }
        output.push_str(");\n");
    }

    fn serialize_attribute_lists(&self, lists: &[AttributeList], output: &mut String) {
        for list in lists {
            self.indent(output);
            write_attribute_list(list, output);
            if list.trailing.is_empty() {
                output.push('\n');
            } else {
                write_trivia(&list.trailing, output);
            }
        }
    }

    fn serialize_attribute_lists_inline(&self, lists: &[AttributeList], output: &mut String) {
        for list in lists {
            write_attribute_list(list, output);
            output.push(' ');
        }
    }

    fn write_modifiers(&self, modifiers: &[Modifier], output: &mut String) {
        for modifier in modifiers {
            output.push_str(modifier.as_str());
            output.push(' ');
        }
    }

    fn open_brace(&mut self, output: &mut String) {
        self.indent(output);
        output.push_str("{\n");
        self.indent_level += 1;
    }

    fn close_brace(&mut self, output: &mut String) {
        self.indent_level -= 1;
        self.indent(output);
        output.push_str("}\n");
    }

    fn indent(&self, output: &mut String) {
        for _ in 0..self.indent_level {
            output.push_str(&self.indent_string);
        }
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

fn write_attribute_list(list: &AttributeList, output: &mut String) {
    output.push('[');
    for (i, attribute) in list.attributes.iter().enumerate() {
        if i > 0 {
            output.push_str(", ");
        }
        write_attribute(attribute, output);
    }
    output.push(']');
}

fn write_attribute(attribute: &Attribute, output: &mut String) {
    write_type(&attribute.ty, output);
    if !attribute.arguments.is_empty() {
        output.push('(');
        for (i, argument) in attribute.arguments.iter().enumerate() {
            if i > 0 {
                output.push_str(", ");
            }
            write_expression(argument, output);
        }
        output.push(')');
    }
}

fn write_type(ty: &TypeSyntax, output: &mut String) {
    match ty {
        TypeSyntax::Named { global, segments } => {
            if *global {
                output.push_str("global::");
            }
            output.push_str(&segments.join("."));
        }
        TypeSyntax::Generic {
            global,
            segments,
            arguments,
        } => {
            if *global {
                output.push_str("global::");
            }
            output.push_str(&segments.join("."));
            output.push('<');
            for (i, argument) in arguments.iter().enumerate() {
                if i > 0 {
                    output.push_str(", ");
                }
                write_type(argument, output);
            }
            output.push('>');
        }
        TypeSyntax::Array { element, rank } => {
            write_type(element, output);
            output.push('[');
            output.push_str(&",".repeat(rank - 1));
            output.push(']');
        }
    }
}

fn write_expression(expression: &Expression, output: &mut String) {
    match expression {
        Expression::Literal(literal) => write_literal(literal, output),
        Expression::TypeOf(ty) => {
            output.push_str("typeof(");
            write_type(ty, output);
            output.push(')');
        }
        Expression::Identifier(name) => output.push_str(name),
    }
}

fn write_literal(literal: &Literal, output: &mut String) {
    match literal {
        Literal::Bool(value) => output.push_str(if *value { "true" } else { "false" }),
        Literal::Int(value) => {
            let _ = write!(output, "{}", value);
        }
        Literal::Float(value) => {
            let _ = write!(output, "{}f", value);
        }
        Literal::Str(value) => {
            let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
            let _ = write!(output, "\"{}\"", escaped);
        }
        Literal::Null => output.push_str("null"),
    }
}

fn write_trivia(trivia: &[Trivia], output: &mut String) {
    for item in trivia {
        match item {
            Trivia::Comment(text) => output.push_str(text),
            Trivia::Newline => output.push('\n'),
            Trivia::Whitespace(text) => output.push_str(text),
        }
    }
}

/// Serialize a unit with default settings
pub fn serialize(unit: &CompilationUnit) -> String {
    Serializer::new().serialize(unit)
}
