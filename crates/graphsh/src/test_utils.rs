use crate::Session;
use graphsh_core::Querier;
use graphsh_core::TransportError;
use serde_json::Value;
use serde_json::json;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

fn type_ref(kind: &str, name: &str) -> Value {
    json!({"kind": kind, "name": name, "ofType": null})
}

fn non_null(inner: Value) -> Value {
    json!({"kind": "NON_NULL", "name": null, "ofType": inner})
}

fn list(inner: Value) -> Value {
    json!({"kind": "LIST", "name": null, "ofType": inner})
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

fn schema_type(kind: &str, name: &str, fields: Option<Vec<Value>>) -> Value {
    json!({
        "kind": kind,
        "name": name,
        "description": null,
        "fields": fields,
        "inputFields": null,
        "interfaces": [],
        "enumValues": null,
        "possibleTypes": null,
    })
}

/// Introspection response for:
///
/// ```graphql
/// type Query {
///   viewer: User!
///   repository(owner: String!, name: String!): Repository
///   node(id: ID!): Node
/// }
/// interface Node { id: ID! }
/// type User implements Node { id: ID!  login: String!  name: String }
/// type Repository implements Node { id: ID!  name: String!  description: String  topics: [String!]! }
/// ```
pub(crate) fn introspection_body() -> Vec<u8> {
    let string = || type_ref("SCALAR", "String");
    let id = || non_null(type_ref("SCALAR", "ID"));
    let arg = |name: &str, type_ref: Value| json!({
        "name": name,
        "description": null,
        "type": type_ref,
        "defaultValue": null,
    });

    let mut node = schema_type("INTERFACE", "Node", Some(vec![
        field("id", None, vec![], id()),
    ]));
    node["possibleTypes"] = json!([
        type_ref("OBJECT", "User"),
        type_ref("OBJECT", "Repository"),
    ]);

    let schema = json!({
        "queryType": {"name": "Query"},
        "mutationType": null,
        "subscriptionType": null,
        "types": [
            schema_type("OBJECT", "Query", Some(vec![
                field(
                    "viewer",
                    Some("The currently authenticated user."),
                    vec![],
                    non_null(type_ref("OBJECT", "User")),
                ),
                field(
                    "repository",
                    Some("Lookup a repository by owner and name."),
                    vec![arg("owner", non_null(string())), arg("name", non_null(string()))],
                    type_ref("OBJECT", "Repository"),
                ),
                field(
                    "node",
                    None,
                    vec![arg("id", id())],
                    type_ref("INTERFACE", "Node"),
                ),
            ])),
            node,
            schema_type("OBJECT", "User", Some(vec![
                field("id", None, vec![], id()),
                field("login", Some("The username used to login."), vec![], non_null(string())),
                field("name", Some("The user's public profile name."), vec![], string()),
            ])),
            schema_type("OBJECT", "Repository", Some(vec![
                field("id", None, vec![], id()),
                field("name", Some("The name of the repository."), vec![], non_null(string())),
                field(
                    "description",
                    Some("The description of the repository.\nMay be empty."),
                    vec![],
                    string(),
                ),
                field(
                    "topics",
                    Some("Topics applied to the repository."),
                    vec![],
                    non_null(list(non_null(string()))),
                ),
            ])),
            schema_type("SCALAR", "String", None),
            schema_type("SCALAR", "ID", None),
        ],
        "directives": [],
    });

    serde_json::to_vec(&json!({"data": {"__schema": schema}}))
        .expect("fixture serializes")
}

/// A [`Querier`] that replays canned responses in order. Clones share the
/// same queue and the same log of sent documents.
#[derive(Clone, Debug, Default)]
pub(crate) struct StubQuerier {
    responses: Rc<RefCell<VecDeque<Result<Vec<u8>, TransportError>>>>,
    sent: Rc<RefCell<Vec<String>>>,
}
impl StubQuerier {
    pub(crate) fn push_response(&self, response: Result<Vec<u8>, TransportError>) {
        self.responses.borrow_mut().push_back(response);
    }

    pub(crate) fn sent(&self) -> Vec<String> {
        self.sent.borrow().clone()
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

/// A session loaded from the fixture schema, plus a handle on its transport.
pub(crate) fn fixture_session() -> (Session, StubQuerier) {
    let querier = StubQuerier::default();
    querier.push_response(Ok(introspection_body()));
    let session = Session::new(Box::new(querier.clone()))
        .expect("fixture schema loads");
    (session, querier)
}
