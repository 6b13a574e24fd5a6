use crate::query_path::PathNode;
use crate::query_path::QueryPath;
use crate::resolver::FieldResolver;
use crate::resolver::ResolutionError;
use crate::schema::Schema;
use crate::test_utils;
use crate::traversal::parse_path;
use crate::types::SchemaField;
use crate::types::SchemaType;
use crate::types::TypeKind;
use crate::types::TypeRef;

type Result<T> = std::result::Result<T, ResolutionError>;

fn field_names(fields: Vec<&SchemaField>) -> Vec<&str> {
    fields.into_iter().map(|field| field.name()).collect()
}

fn path_to(traversal: &str) -> QueryPath {
    let mut path = QueryPath::new();
    path.append(parse_path(traversal).expect("traversal parses"));
    path
}

#[test]
fn root_lists_query_type_fields() -> Result<()> {
    let schema = test_utils::fixture_schema();
    let resolver = FieldResolver::new(&schema);

    assert_eq!(
        field_names(resolver.fields_at(&QueryPath::new())?),
        vec!["repository", "viewer", "search"],
    );
    Ok(())
}

#[test]
fn fields_in_declared_order() -> Result<()> {
    let schema = test_utils::fixture_schema();
    let resolver = FieldResolver::new(&schema);

    let fields = resolver.fields_at(&path_to(r#".repository(owner: "jclem", name: "graphsh")"#))?;

    assert_eq!(field_names(fields), vec!["name", "owner"]);
    Ok(())
}

#[test]
fn unwraps_list_and_non_null_wrappers() -> Result<()> {
    let schema = test_utils::fixture_schema();
    let resolver = FieldResolver::new(&schema);

    let fields = resolver.fields_at(&path_to(".viewer.repositories(first: 5)"))?;

    assert_eq!(field_names(fields), vec!["name", "owner"]);
    Ok(())
}

#[test]
fn missing_field_names_field_and_type() {
    let schema = test_utils::fixture_schema();
    let resolver = FieldResolver::new(&schema);

    let err = resolver.fields_at(&path_to(".repository.stargazers")).unwrap_err();

    assert_eq!(
        err,
        ResolutionError::MissingField {
            field_name: "stargazers".to_string(),
            type_name: "Repository".to_string(),
        },
    );
    assert_eq!(err.to_string(), "Missing field `stargazers` from type `Repository`");
}

#[test]
fn concrete_type_replaces_field_resolution() -> Result<()> {
    let schema = test_utils::fixture_schema();
    let resolver = FieldResolver::new(&schema);
    let mut path = path_to(".repository.owner");

    assert_eq!(field_names(resolver.fields_at(&path)?), vec!["login"]);

    path.set_concrete_type(path.current(), "Organization");
    assert_eq!(
        field_names(resolver.fields_at(&path)?),
        vec!["login", "membersCount"],
    );

    path.append([PathNode::new("membersCount")]);
    assert!(resolver.fields_at(&path)?.is_empty());
    Ok(())
}

#[test]
fn unknown_concrete_type() {
    let schema = test_utils::fixture_schema();
    let resolver = FieldResolver::new(&schema);
    let mut path = path_to(".search(query: \"graphsh\")");
    path.set_concrete_type(path.current(), "Gist");

    assert_eq!(
        resolver.fields_at(&path),
        Err(ResolutionError::MissingType { type_name: "Gist".to_string() }),
    );
}

#[test]
fn field_type_absent_from_schema() {
    let schema = Schema::from_types("Query", [
        SchemaType::new(TypeKind::Object, "Query")
            .with_field(SchemaField::new("ghost", TypeRef::named(TypeKind::Object, "Ghost"))),
    ]).unwrap();
    let resolver = FieldResolver::new(&schema);

    assert_eq!(
        resolver.fields_at(&path_to(".ghost")),
        Err(ResolutionError::MissingType { type_name: "Ghost".to_string() }),
    );
}

#[test]
fn malformed_type_ref_is_reported() {
    let schema = Schema::from_types("Query", [
        SchemaType::new(TypeKind::Object, "Query")
            .with_field(SchemaField::new("broken", TypeRef {
                kind: TypeKind::NonNull,
                name: None,
                of_type: None,
            })),
    ]).unwrap();
    let resolver = FieldResolver::new(&schema);

    assert_eq!(
        resolver.fields_at(&path_to(".broken")),
        Err(ResolutionError::MalformedTypeRef {
            field_name: "broken".to_string(),
            type_name: "Query".to_string(),
        }),
    );
}

#[test]
fn fields_along_resolves_partial_chains() -> Result<()> {
    let schema = test_utils::fixture_schema();
    let resolver = FieldResolver::new(&schema);
    let chain = parse_path(".viewer").unwrap();

    assert_eq!(
        field_names(resolver.fields_along(&chain)?),
        vec!["login", "repositories", "visibility"],
    );
    assert_eq!(resolver.type_along(&chain)?.name(), "User");
    Ok(())
}
