#![allow(unused_crate_dependencies)]

use graphql_schema_combine::{
    combine, combine_with_config, CombineConfig, CompositeType, ConflictResolution, EnumType,
    EnumValueDefinition, Extensions, FieldDefinition, FnHandle, ScalarType, StandardField, TypeDefinition,
    TypeGraph, TypeRef,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn field(type_ref: &str) -> FieldDefinition {
    FieldDefinition::Standard(StandardField::new(TypeRef::parse(type_ref).unwrap()))
}

fn described_field(type_ref: &str, description: &str) -> FieldDefinition {
    FieldDefinition::Standard(StandardField::new(TypeRef::parse(type_ref).unwrap()).with_description(description))
}

#[test]
fn disjoint_graphs_are_copied_verbatim() {
    let first: TypeGraph = [
        TypeDefinition::Object(
            CompositeType::new("User")
                .with_description("A user")
                .with_extension("owner", json!("first"))
                .with_field("id", field("ID!")),
        ),
        TypeDefinition::Enum(
            EnumType::new("Role").with_member("ADMIN", EnumValueDefinition::new().with_value(json!(0))),
        ),
    ]
    .into_iter()
    .collect();

    let second: TypeGraph = [
        TypeDefinition::Object(CompositeType::new("Post").with_field("title", field("String"))),
        TypeDefinition::Scalar(ScalarType::new("DateTime")),
    ]
    .into_iter()
    .collect();

    let combined = combine(&first, &second, |_, _| unreachable!("no overlapping names")).unwrap();

    let names: Vec<_> = combined.type_names().collect();
    assert_eq!(names, ["User", "Role", "Post", "DateTime"]);

    for name in ["User", "Role"] {
        assert_eq!(combined.get(name), first.get(name));
    }
    for name in ["Post", "DateTime"] {
        assert_eq!(combined.get(name), second.get(name));
    }
}

#[test]
fn builtin_scalars_are_never_materialized() {
    let first: TypeGraph = [
        TypeDefinition::Scalar(ScalarType::new("String")),
        TypeDefinition::Scalar(ScalarType::new("Int")),
        TypeDefinition::Scalar(ScalarType::new("DateTime")),
    ]
    .into_iter()
    .collect();

    let second: TypeGraph = [
        TypeDefinition::Scalar(ScalarType::new("Boolean")),
        TypeDefinition::Scalar(ScalarType::new("ID")),
        TypeDefinition::Scalar(ScalarType::new("Float")),
    ]
    .into_iter()
    .collect();

    let combined = combine(&first, &second, |_, _| unreachable!("no overlapping names")).unwrap();

    let names: Vec<_> = combined.type_names().collect();
    assert_eq!(names, ["DateTime"]);
}

#[test]
fn builtin_scalar_names_are_configurable() {
    let first: TypeGraph = [
        TypeDefinition::Scalar(ScalarType::new("String")),
        TypeDefinition::Scalar(ScalarType::new("DateTime")),
    ]
    .into_iter()
    .collect();

    let config = CombineConfig::default().with_builtin_scalars(["DateTime"]);

    let combined = combine_with_config(
        &first,
        &TypeGraph::new(),
        |_, _| unreachable!("one side is empty"),
        &config,
    )
    .unwrap();

    // `String` is an ordinary scalar under this configuration.
    let names: Vec<_> = combined.type_names().collect();
    assert_eq!(names, ["String"]);
}

#[test]
fn self_merge_is_idempotent() {
    let graph = fixture_graph();

    let combined = combine(&graph, &graph, |_, _| ConflictResolution::Merge).unwrap();

    assert_eq!(combined, graph);
    assert_eq!(
        combined.type_names().collect::<Vec<_>>(),
        graph.type_names().collect::<Vec<_>>(),
    );
}

#[test]
fn overlapping_objects_union_their_fields() {
    let first: TypeGraph = [TypeDefinition::Object(
        CompositeType::new("User")
            .with_description("from the first schema")
            .with_interface("Node")
            .with_extension("a", json!(1))
            .with_extension("shared", json!("first"))
            .with_field("id", described_field("ID!", "the id"))
            .with_field("name", field("String")),
    )]
    .into_iter()
    .collect();

    let second: TypeGraph = [TypeDefinition::Object(
        CompositeType::new("User")
            .with_interface("Entity")
            .with_interface("Node")
            .with_extension("b", json!(2))
            .with_extension("shared", json!("second"))
            .with_field("id", field("ID!"))
            .with_field("email", described_field("String!", "the email")),
    )]
    .into_iter()
    .collect();

    let combined = combine(&first, &second, |_, _| ConflictResolution::Merge).unwrap();

    let TypeDefinition::Object(user) = combined.get("User").unwrap() else {
        unreachable!()
    };

    // The second side has no description, so the first side's survives.
    assert_eq!(user.description, "from the first schema");
    assert_eq!(user.interfaces, ["Node", "Entity"]);
    let expected_extensions: Extensions = [
        ("a".to_owned(), json!(1)),
        ("shared".to_owned(), json!("second")),
        ("b".to_owned(), json!(2)),
    ]
    .into_iter()
    .collect();
    assert_eq!(user.extensions, expected_extensions);

    let field_names: Vec<_> = user.fields.keys().map(String::as_str).collect();
    assert_eq!(field_names, ["id", "name", "email"]);

    let FieldDefinition::Standard(id) = user.fields.get("id").unwrap() else {
        unreachable!()
    };
    assert_eq!(id.type_ref.to_string(), "ID!");
    assert_eq!(id.description.as_deref(), Some("the id"));

    assert_eq!(user.fields.get("name"), first_object_field(&first, "User", "name"));
    assert_eq!(user.fields.get("email"), first_object_field(&second, "User", "email"));
}

#[test]
fn overlapping_enums_union_their_members() {
    let first: TypeGraph = [TypeDefinition::Enum(
        EnumType::new("Role")
            .with_member(
                "ADMIN",
                EnumValueDefinition::new().with_value(json!(1)).with_description("first admin"),
            )
            .with_member("USER", EnumValueDefinition::new().with_value(json!(2))),
    )]
    .into_iter()
    .collect();

    let second: TypeGraph = [TypeDefinition::Enum(
        EnumType::new("Role")
            .with_member("ADMIN", EnumValueDefinition::new().with_value(json!(10)))
            .with_member("GUEST", EnumValueDefinition::new().with_value(json!(3))),
    )]
    .into_iter()
    .collect();

    let combined = combine(&first, &second, |_, _| ConflictResolution::Merge).unwrap();

    let TypeDefinition::Enum(role) = combined.get("Role").unwrap() else {
        unreachable!()
    };

    let member_names: Vec<_> = role.members.keys().map(String::as_str).collect();
    assert_eq!(member_names, ["ADMIN", "GUEST", "USER"]);

    // On a member name collision the second side's definition wins whole.
    let admin = role.members.get("ADMIN").unwrap();
    assert_eq!(admin.value, Some(json!(10)));
    assert_eq!(admin.description, None);
}

#[test]
fn input_objects_keep_their_fields_through_copy_and_merge() {
    let name_field = described_field("String", "filter by name");

    let first: TypeGraph = [
        TypeDefinition::InputObject(
            CompositeType::new("UserFilter")
                .with_description("filters users")
                .with_field("name", name_field.clone()),
        ),
        TypeDefinition::InputObject(CompositeType::new("PostFilter").with_field("title", field("String"))),
    ]
    .into_iter()
    .collect();

    let second: TypeGraph = [TypeDefinition::InputObject(
        CompositeType::new("UserFilter")
            .with_field("name", name_field)
            .with_field("limit", described_field("Int", "page size")),
    )]
    .into_iter()
    .collect();

    let combined = combine(&first, &second, |_, _| ConflictResolution::Merge).unwrap();

    let TypeDefinition::InputObject(filter) = combined.get("UserFilter").unwrap() else {
        unreachable!()
    };
    assert_eq!(filter.description, "filters users");
    let field_names: Vec<_> = filter.fields.keys().map(String::as_str).collect();
    assert_eq!(field_names, ["name", "limit"]);

    // A one-sided input object is copied with all of its fields.
    assert_eq!(combined.get("PostFilter"), first.get("PostFilter"));
}

#[test]
fn combining_twice_yields_identical_output() {
    let first = fixture_graph();
    let second: TypeGraph = [
        TypeDefinition::Object(CompositeType::new("Post").with_field("title", described_field("String", "the title"))),
        TypeDefinition::Enum(EnumType::new("Role").with_member("GUEST", EnumValueDefinition::new())),
    ]
    .into_iter()
    .collect();

    let once = combine(&first, &second, |_, _| ConflictResolution::Merge).unwrap();
    let twice = combine(&first, &second, |_, _| ConflictResolution::Merge).unwrap();

    assert_eq!(once, twice);
    assert_eq!(once.type_names().collect::<Vec<_>>(), twice.type_names().collect::<Vec<_>>());
}

fn first_object_field<'a>(graph: &'a TypeGraph, type_name: &str, field_name: &str) -> Option<&'a FieldDefinition> {
    match graph.get(type_name) {
        Some(TypeDefinition::Object(object)) => object.fields.get(field_name),
        _ => None,
    }
}

fn fixture_graph() -> TypeGraph {
    use graphql_schema_combine::{ArgumentDefinition, ResolverDefinition};

    let load = ResolverDefinition::new("load", TypeRef::named("User").non_null(), FnHandle::new("load fn"))
        .with_argument("id", ArgumentDefinition::new(TypeRef::named("ID").non_null()))
        .into_shared();

    [
        TypeDefinition::Object(
            CompositeType::new("User")
                .with_description("A user")
                .with_interface("Node")
                .with_extension("owner", json!("identity-team"))
                .with_resolver(load.clone())
                .with_field("id", described_field("ID!", "the id"))
                .with_field(
                    "search",
                    FieldDefinition::Standard(
                        StandardField::new(TypeRef::named("User").list())
                            .with_description("search by name")
                            .with_argument(
                                "name",
                                ArgumentDefinition::new(TypeRef::named("String")).with_default_value(json!("")),
                            ),
                    ),
                )
                .with_field("byId", FieldDefinition::Resolver(load)),
        ),
        TypeDefinition::InputObject(
            CompositeType::new("UserFilter")
                .with_description("filters users")
                .with_field("name", described_field("String", "filter by name")),
        ),
        TypeDefinition::Enum(
            EnumType::new("Role")
                .with_member("ADMIN", EnumValueDefinition::new().with_value(json!(0)))
                .with_member(
                    "USER",
                    EnumValueDefinition::new().with_value(json!(1)).with_deprecation_reason("use ADMIN"),
                ),
        ),
        TypeDefinition::Scalar(ScalarType::new("DateTime")),
    ]
    .into_iter()
    .collect()
}
