use crate::types::TypeRef;

/// An argument accepted by a [`SchemaField`](crate::types::SchemaField), or a
/// field of an input object type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValue {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(rename = "type")]
    pub(crate) type_ref: TypeRef,
    #[serde(default)]
    pub(crate) default_value: Option<String>,
}
impl InputValue {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }

    /// The default value as GraphQL literal text, exactly as the service
    /// reported it.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }
}
