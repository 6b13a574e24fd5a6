use crate::schema::Schema;
use crate::schema::SchemaError;
use crate::types::SchemaType;

/// The introspection document sent once per session.
///
/// This is the standard introspection query with the `TypeRef` fragment
/// following `ofType` nine links deep, enough for wrapper chains such as
/// `[[Foo!]!]!`.
pub const INTROSPECTION_QUERY: &str = r#"
query IntrospectionQuery {
  __schema {
    queryType {
      name
    }
    mutationType {
      name
    }
    subscriptionType {
      name
    }
    types {
      ...FullType
    }
    directives {
      name
      description
      locations
      args {
        ...InputValue
      }
    }
  }
}

fragment FullType on __Type {
  kind
  name
  description
  fields(includeDeprecated: true) {
    name
    description
    args {
      ...InputValue
    }
    type {
      ...TypeRef
    }
    isDeprecated
    deprecationReason
  }
  inputFields {
    ...InputValue
  }
  interfaces {
    ...TypeRef
  }
  enumValues(includeDeprecated: true) {
    name
    description
    isDeprecated
    deprecationReason
  }
  possibleTypes {
    ...TypeRef
  }
}

fragment InputValue on __InputValue {
  name
  description
  type {
    ...TypeRef
  }
  defaultValue
}

fragment TypeRef on __Type {
  kind
  name
  ofType {
    kind
    name
    ofType {
      kind
      name
      ofType {
        kind
        name
        ofType {
          kind
          name
          ofType {
            kind
            name
            ofType {
              kind
              name
              ofType {
                kind
                name
                ofType {
                  kind
                  name
                  ofType {
                    kind
                    name
                  }
                }
              }
            }
          }
        }
      }
    }
  }
}
"#;

#[derive(Debug, serde::Deserialize)]
struct IntrospectionResponse {
    #[serde(default)]
    data: Option<IntrospectionData>,
    #[serde(default)]
    errors: Option<Vec<ResponseError>>,
}

#[derive(Debug, serde::Deserialize)]
struct IntrospectionData {
    #[serde(rename = "__schema")]
    schema: WireSchema,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSchema {
    #[serde(default)]
    query_type: Option<RootTypeName>,
    #[serde(default)]
    mutation_type: Option<RootTypeName>,
    #[serde(default)]
    subscription_type: Option<RootTypeName>,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    types: Vec<SchemaType>,
}

#[derive(Debug, serde::Deserialize)]
struct RootTypeName {
    name: String,
}

#[derive(Debug, serde::Deserialize)]
struct ResponseError {
    message: String,
}

/// Decode a raw introspection response body into a [`Schema`].
pub(crate) fn decode_schema(body: &[u8]) -> Result<Schema, SchemaError> {
    let response: IntrospectionResponse = serde_json::from_slice(body)?;

    let data = match (response.data, response.errors) {
        (Some(data), _) => data,
        (None, Some(errors)) if !errors.is_empty() => {
            return Err(SchemaError::IntrospectionErrors(
                errors.into_iter().map(|err| err.message).collect(),
            ));
        },
        (None, _) => return Err(SchemaError::MissingData),
    };

    let WireSchema {
        query_type,
        mutation_type,
        subscription_type,
        types,
    } = data.schema;
    let query_type = query_type.ok_or(SchemaError::NoQueryType)?;

    let mut schema = Schema::from_types(query_type.name, types)?;
    schema.mutation_type = mutation_type.map(|root| root.name);
    schema.subscription_type = subscription_type.map(|root| root.name);
    Ok(schema)
}
