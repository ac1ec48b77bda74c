use crate::ast::*;
use crate::rewriters::*;

fn marker_attribute() -> Attribute {
    Attribute::new(TypeSyntax::named("Serializable"))
}

fn unit_with(members: Vec<Member>) -> CompilationUnit {
    CompilationUnit {
        leading: Vec::new(),
        usings: Vec::new(),
        members,
    }
}

fn public_class(name: &str) -> TypeDeclaration {
    let mut class = TypeDeclaration::new(TypeKeyword::Class, name);
    class.modifiers.push(Modifier::Public);
    class
}

fn public_struct(name: &str) -> TypeDeclaration {
    let mut decl = TypeDeclaration::new(TypeKeyword::Struct, name);
    decl.modifiers.push(Modifier::Public);
    decl
}

fn first_type(unit: &CompilationUnit, index: usize) -> &TypeDeclaration {
    match &unit.members[index] {
        Member::Type(declaration) => declaration,
        Member::Namespace(_) => panic!("expected a type declaration"),
    }
}

#[test]
fn add_attribute_to_kind_hits_only_matching_kind() {
    let unit = unit_with(vec![
        Member::Type(public_class("First")),
        Member::Type(public_struct("Second")),
    ]);

    let mut rewriter =
        AddAttributeToKind::new(marker_attribute(), SyntaxKind::ClassDeclaration);
    let rewritten = rewriter.rewrite(&unit);

    assert_eq!(1, first_type(&rewritten, 0).attribute_lists.len());
    assert!(first_type(&rewritten, 1).attribute_lists.is_empty());
    // The struct subtree is structurally identical to its pre-rewrite form.
    assert_eq!(first_type(&unit, 1), first_type(&rewritten, 1));
    // The input tree itself is untouched.
    assert!(first_type(&unit, 0).attribute_lists.is_empty());
}

#[test]
fn add_attribute_to_kind_reaches_nested_members() {
    let mut class = public_class("Outer");
    class.members.push(TypeMember::Field(FieldDeclaration::new(
        TypeSyntax::named("int"),
        "Value",
    )));
    class.members.push(TypeMember::Property(PropertyDeclaration::auto(
        TypeSyntax::named("int"),
        "Other",
    )));
    let unit = unit_with(vec![Member::Type(class)]);

    let mut rewriter =
        AddAttributeToKind::new(marker_attribute(), SyntaxKind::FieldDeclaration);
    let rewritten = rewriter.rewrite(&unit);

    let class = first_type(&rewritten, 0);
    assert!(class.attribute_lists.is_empty());
    match &class.members[0] {
        TypeMember::Field(field) => assert_eq!(1, field.attribute_lists.len()),
        _ => panic!("expected field"),
    }
    match &class.members[1] {
        TypeMember::Property(property) => assert!(property.attribute_lists.is_empty()),
        _ => panic!("expected property"),
    }
}

#[test]
fn add_attribute_to_declaration_defaults_to_accept_all() {
    let mut class = public_class("Data");
    class.members.push(TypeMember::Field(FieldDeclaration::new(
        TypeSyntax::named("bool"),
        "Flag",
    )));
    let unit = unit_with(vec![Member::Type(class)]);

    let mut rewriter = AddAttributeToDeclaration::new(marker_attribute());
    let rewritten = rewriter.rewrite(&unit);

    let class = first_type(&rewritten, 0);
    assert_eq!(1, class.attribute_lists.len());
    match &class.members[0] {
        TypeMember::Field(field) => assert_eq!(1, field.attribute_lists.len()),
        _ => panic!("expected field"),
    }
}

#[test]
fn add_attribute_to_declaration_respects_predicate() {
    let unit = unit_with(vec![
        Member::Type(public_class("Keep")),
        Member::Type(public_class("Skip")),
    ]);

    let mut rewriter =
        AddAttributeToDeclaration::with_validate(marker_attribute(), |declaration| {
            declaration.name() == Some("Keep")
        });
    let rewritten = rewriter.rewrite(&unit);

    assert_eq!(1, first_type(&rewritten, 0).attribute_lists.len());
    assert!(first_type(&rewritten, 1).attribute_lists.is_empty());
}

#[test]
fn add_attribute_from_generic_argument_extracts_typeof() {
    let mut matching = public_class("PlayerContainer");
    matching.base_types.push(TypeSyntax::generic(
        "ContainerAsset",
        vec![TypeSyntax::named("Player")],
    ));
    let mut plain = public_class("Plain");
    plain.base_types.push(TypeSyntax::named("Object"));
    let unit = unit_with(vec![Member::Type(matching), Member::Type(plain)]);

    let mut rewriter = AddAttributeFromGenericArgument::new(
        TypeSyntax::named("ContainerTarget"),
        "ContainerAsset",
    );
    let rewritten = rewriter.rewrite(&unit);

    let annotated = first_type(&rewritten, 0);
    assert_eq!(1, annotated.attribute_lists.len());
    let attribute = &annotated.attribute_lists[0].attributes[0];
    assert_eq!(Some("ContainerTarget"), attribute.ty.identifier());
    assert_eq!(
        vec![Expression::TypeOf(TypeSyntax::named("Player"))],
        attribute.arguments
    );

    assert!(first_type(&rewritten, 1).attribute_lists.is_empty());
}

#[test]
fn add_attribute_from_generic_argument_needs_exactly_one_argument() {
    let mut class = public_class("Pair");
    class.base_types.push(TypeSyntax::generic(
        "ContainerAsset",
        vec![TypeSyntax::named("A"), TypeSyntax::named("B")],
    ));
    let unit = unit_with(vec![Member::Type(class)]);

    let mut rewriter = AddAttributeFromGenericArgument::new(
        TypeSyntax::named("ContainerTarget"),
        "ContainerAsset",
    );
    let rewritten = rewriter.rewrite(&unit);

    assert!(first_type(&rewritten, 0).attribute_lists.is_empty());
}

#[test]
fn format_attribute_lists_adds_trailing_trivia_once() {
    let mut class = public_class("Data");
    class.attribute_lists.push(AttributeList {
        leading: vec![Trivia::Newline, Trivia::Whitespace("    ".to_string())],
        trailing: Vec::new(),
        attributes: vec![marker_attribute()],
    });
    let unit = unit_with(vec![Member::Type(class)]);

    let mut rewriter = FormatAttributeLists::new();
    let formatted = rewriter.rewrite(&unit);

    let list = &first_type(&formatted, 0).attribute_lists[0];
    assert_eq!(
        vec![Trivia::Newline, Trivia::Whitespace("    ".to_string())],
        list.trailing
    );

    // Idempotence: a second pass is a no-op.
    let again = rewriter.rewrite(&formatted);
    assert_eq!(formatted, again);
}

#[test]
fn format_attribute_lists_stops_indent_scan_at_non_whitespace() {
    let mut class = public_class("Data");
    class.attribute_lists.push(AttributeList {
        leading: vec![
            Trivia::Whitespace("  ".to_string()),
            Trivia::Comment("// note".to_string()),
        ],
        trailing: Vec::new(),
        attributes: vec![marker_attribute()],
    });
    let unit = unit_with(vec![Member::Type(class)]);

    let formatted = FormatAttributeLists::new().rewrite(&unit);
    let list = &first_type(&formatted, 0).attribute_lists[0];
    // Only a newline: the scan stops at the comment before any whitespace.
    assert_eq!(vec![Trivia::Newline], list.trailing);
}
