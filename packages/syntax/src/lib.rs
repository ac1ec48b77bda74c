pub mod ast;
pub mod fold;
pub mod header;
pub mod rewriters;
pub mod serializer;
pub mod visitor;
pub mod walkers;

#[cfg(test)]
mod tests_rewriters;

pub use ast::{
    AccessorDeclaration, AccessorKind, Attribute, AttributeList, CompilationUnit, Declaration,
    Expression, FieldDeclaration, Literal, Member, MethodDeclaration, Modifier,
    NamespaceDeclaration, Parameter, PropertyDeclaration, SyntaxKind, Trivia, TypeDeclaration,
    TypeKeyword, TypeMember, TypeParameter, TypeSyntax, UsingDirective,
};
pub use fold::Fold;
pub use header::with_generated_header;
pub use rewriters::{
    AddAttributeFromGenericArgument, AddAttributeToDeclaration, AddAttributeToKind,
    FormatAttributeLists,
};
pub use serializer::{serialize, Serializer};
pub use visitor::Visitor;
pub use walkers::{collect_usings, CollectUsingDirectives};

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_class() -> TypeDeclaration {
        let mut class = TypeDeclaration::new(TypeKeyword::Class, "Container");
        class.modifiers.push(Modifier::Public);
        class.members.push(TypeMember::Field(FieldDeclaration {
            modifiers: vec![Modifier::Public],
            ..FieldDeclaration::new(TypeSyntax::named("bool"), "Field")
        }));
        let mut property = PropertyDeclaration::auto(TypeSyntax::named("bool"), "Property");
        property.modifiers.push(Modifier::Public);
        class.members.push(TypeMember::Property(property));
        class
    }

    #[test]
    fn serialize_class_with_field_and_auto_property() {
        let class = sample_class();
        let result = Serializer::new().serialize_type(&class);
        let expected = "\
public class Container
{
    public bool Field;

    public bool Property
    {
        get;
        set;
    }
}
";
        assert_eq!(expected, result);
    }

    #[test]
    fn serialize_unit_with_namespace_and_usings() {
        let mut unit = CompilationUnit::new();
        unit.usings.push(UsingDirective::new("System"));
        let mut namespace = NamespaceDeclaration::new("Game.Data");
        namespace.members.push(Member::Type(sample_class()));
        unit.members.push(Member::Namespace(namespace));

        let result = serialize(&unit);
        assert!(result.starts_with("using System;\n\nnamespace Game.Data\n{\n"));
        assert!(result.contains("    public class Container\n"));
        assert!(result.ends_with("}\n"));
    }

    #[test]
    fn serialize_is_deterministic() {
        let unit = {
            let mut unit = CompilationUnit::new();
            unit.members.push(Member::Type(sample_class()));
            unit
        };
        assert_eq!(serialize(&unit), serialize(&unit.clone()));
    }

    #[test]
    fn field_initializer_rendering() {
        let mut field = FieldDeclaration::new(TypeSyntax::named("int"), "Count");
        field.modifiers.push(Modifier::Public);
        field.initializer = Some(Expression::Literal(Literal::Int(10)));
        let mut class = TypeDeclaration::new(TypeKeyword::Class, "Holder");
        class.modifiers.push(Modifier::Public);
        class.members.push(TypeMember::Field(field));

        let result = Serializer::new().serialize_type(&class);
        assert!(result.contains("    public int Count = 10;\n"));
    }

    #[test]
    fn property_initializer_rendering() {
        let mut property = PropertyDeclaration::auto(TypeSyntax::named("float"), "Scale");
        property.modifiers.push(Modifier::Public);
        property.initializer = Some(Expression::Literal(Literal::Float(0.5)));
        let mut class = TypeDeclaration::new(TypeKeyword::Class, "Holder");
        class.modifiers.push(Modifier::Public);
        class.members.push(TypeMember::Property(property));

        let result = Serializer::new().serialize_type(&class);
        assert!(result.contains("    } = 0.5f;\n"));
    }

    #[test]
    fn array_type_rendering() {
        let mut output = String::new();
        let rank2 = TypeSyntax::array(TypeSyntax::global("System.Int32"), 2);
        let mut field = FieldDeclaration::new(rank2, "Grid");
        field.modifiers.push(Modifier::Public);
        let mut class = TypeDeclaration::new(TypeKeyword::Struct, "Board");
        class.modifiers.push(Modifier::Public);
        class.members.push(TypeMember::Field(field));
        output.push_str(&Serializer::new().serialize_type(&class));
        assert!(output.contains("public global::System.Int32[,] Grid;"));
    }

    #[test]
    fn collect_usings_preserves_order_and_duplicates() {
        let mut unit = CompilationUnit::new();
        unit.usings.push(UsingDirective::new("System"));
        unit.usings.push(UsingDirective::new("System"));
        let mut namespace = NamespaceDeclaration::new("Game");
        namespace.usings.push(UsingDirective::new("Engine.Math"));
        unit.members.push(Member::Namespace(namespace));

        let usings = collect_usings(&unit);
        let names: Vec<&str> = usings.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(vec!["System", "System", "Engine.Math"], names);
    }

    #[test]
    fn generated_header_prepends_and_stacks() {
        let unit = CompilationUnit::new();
        let once = with_generated_header(unit);
        assert_eq!(5, once.leading.len());

        let text = serialize(&once);
        assert!(text.starts_with(
            "// THIS IS GENERATED CODE. DO NOT EDIT.\n// ReSharper disable all\n\n"
        ));

        let twice = with_generated_header(once);
        assert_eq!(10, twice.leading.len());
    }

    #[test]
    #[should_panic(expected = "type name cannot be empty")]
    fn empty_type_name_is_a_contract_violation() {
        TypeDeclaration::new(TypeKeyword::Class, "");
    }

    #[test]
    #[should_panic(expected = "array rank must be at least 1")]
    fn zero_array_rank_is_a_contract_violation() {
        TypeSyntax::array(TypeSyntax::named("int"), 0);
    }
}
