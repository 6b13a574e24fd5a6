use crate::Querier;
use crate::TransportError;
use crate::schema::Schema;
use serde_json::Value;
use serde_json::json;
use std::cell::RefCell;
use std::collections::VecDeque;

pub(crate) fn named(kind: &str, name: &str) -> Value {
    json!({"kind": kind, "name": name, "ofType": null})
}

pub(crate) fn non_null(inner: Value) -> Value {
    json!({"kind": "NON_NULL", "name": null, "ofType": inner})
}

pub(crate) fn list(inner: Value) -> Value {
    json!({"kind": "LIST", "name": null, "ofType": inner})
}

fn arg(name: &str, type_ref: Value) -> Value {
    json!({
        "name": name,
        "description": null,
        "type": type_ref,
        "defaultValue": null,
    })
}

fn field(name: &str, description: Option<&str>, args: Vec<Value>, type_ref: Value) -> Value {
    json!({
        "name": name,
        "description": description,
        "args": args,
        "type": type_ref,
        "isDeprecated": false,
        "deprecationReason": null,
    })
}

fn object(name: &str, fields: Vec<Value>, interfaces: Vec<Value>) -> Value {
    json!({
        "kind": "OBJECT",
        "name": name,
        "description": null,
        "fields": fields,
        "inputFields": null,
        "interfaces": interfaces,
        "enumValues": null,
        "possibleTypes": null,
    })
}

fn scalar(name: &str) -> Value {
    json!({
        "kind": "SCALAR",
        "name": name,
        "description": null,
        "fields": null,
        "inputFields": null,
        "interfaces": null,
        "enumValues": null,
        "possibleTypes": null,
    })
}

/// The `__schema` payload of a small, GitHub-flavored schema:
///
/// ```graphql
/// type Query {
///   repository(owner: String!, name: String!): Repository
///   viewer: User!
///   search(query: String!): [SearchResult!]!
/// }
/// type Repository implements Node { name: String!  owner: RepositoryOwner! }
/// interface RepositoryOwner { login: String! }
/// type User implements RepositoryOwner { login: String!  repositories: [Repository!]!  visibility: Visibility }
/// type Organization implements RepositoryOwner { login: String!  membersCount: Int }
/// union SearchResult = Repository | User
/// enum Visibility { PUBLIC PRIVATE }
/// ```
pub(crate) fn schema_json() -> Value {
    let string = || named("SCALAR", "String");
    let owner_iface = || named("INTERFACE", "RepositoryOwner");

    let mut owner_iface_type = object("RepositoryOwner", vec![
        field("login", None, vec![], non_null(string())),
    ], vec![]);
    owner_iface_type["kind"] = json!("INTERFACE");
    owner_iface_type["possibleTypes"] = json!([
        named("OBJECT", "User"),
        named("OBJECT", "Organization"),
    ]);

    json!({
        "queryType": {"name": "Query"},
        "mutationType": null,
        "subscriptionType": null,
        "types": [
            object("Query", vec![
                field(
                    "repository",
                    Some("Lookup a given repository by the owner and repository name."),
                    vec![
                        arg("owner", non_null(string())),
                        arg("name", non_null(string())),
                    ],
                    named("OBJECT", "Repository"),
                ),
                field(
                    "viewer",
                    Some("The currently authenticated user."),
                    vec![],
                    non_null(named("OBJECT", "User")),
                ),
                field(
                    "search",
                    None,
                    vec![arg("query", non_null(string()))],
                    non_null(list(non_null(named("UNION", "SearchResult")))),
                ),
            ], vec![]),
            object("Repository", vec![
                field("name", Some("The name of the repository."), vec![], non_null(string())),
                field("owner", None, vec![], non_null(owner_iface())),
            ], vec![named("INTERFACE", "Node")]),
            owner_iface_type,
            object("User", vec![
                field("login", None, vec![], non_null(string())),
                field(
                    "repositories",
                    None,
                    vec![arg("first", named("SCALAR", "Int"))],
                    non_null(list(non_null(named("OBJECT", "Repository")))),
                ),
                field("visibility", None, vec![], named("ENUM", "Visibility")),
            ], vec![owner_iface()]),
            object("Organization", vec![
                field("login", None, vec![], non_null(string())),
                field("membersCount", None, vec![], named("SCALAR", "Int")),
            ], vec![owner_iface()]),
            {
                "kind": "UNION",
                "name": "SearchResult",
                "description": null,
                "fields": null,
                "inputFields": null,
                "interfaces": null,
                "enumValues": null,
                "possibleTypes": [
                    named("OBJECT", "Repository"),
                    named("OBJECT", "User"),
                ],
            },
            {
                "kind": "ENUM",
                "name": "Visibility",
                "description": null,
                "fields": null,
                "inputFields": null,
                "interfaces": null,
                "enumValues": [
                    {"name": "PUBLIC", "description": null, "isDeprecated": false, "deprecationReason": null},
                    {"name": "PRIVATE", "description": null, "isDeprecated": false, "deprecationReason": null},
                ],
                "possibleTypes": null,
            },
            scalar("String"),
            scalar("Int"),
            scalar("Boolean"),
        ],
        "directives": [],
    })
}

pub(crate) fn introspection_body() -> Vec<u8> {
    serde_json::to_vec(&json!({"data": {"__schema": schema_json()}}))
        .expect("fixture serializes")
}

pub(crate) fn fixture_schema() -> Schema {
    crate::schema::decode_schema(&introspection_body())
        .expect("fixture schema decodes")
}

/// A [`Querier`] that replays canned responses in order and records every
/// query it was sent.
#[derive(Debug, Default)]
pub(crate) struct StubQuerier {
    responses: RefCell<VecDeque<Result<Vec<u8>, TransportError>>>,
    pub(crate) sent: RefCell<Vec<String>>,
}
impl StubQuerier {
    pub(crate) fn new(
        responses: impl IntoIterator<Item = Result<Vec<u8>, TransportError>>,
    ) -> Self {
        Self {
            responses: RefCell::new(responses.into_iter().collect()),
            sent: RefCell::new(vec![]),
        }
    }
}
impl Querier for StubQuerier {
    fn query(&self, text: &str) -> Result<Vec<u8>, TransportError> {
        self.sent.borrow_mut().push(text.to_string());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no canned response left".to_string())))
    }
}
