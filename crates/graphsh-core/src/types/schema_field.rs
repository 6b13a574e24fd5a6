use crate::types::DeprecationState;
use crate::types::InputValue;
use crate::types::TypeRef;

/// A field defined on an object or interface [`SchemaType`](crate::types::SchemaType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaField {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub(crate) args: Vec<InputValue>,
    #[serde(rename = "type")]
    pub(crate) type_ref: TypeRef,
    #[serde(default)]
    pub(crate) is_deprecated: bool,
    #[serde(default)]
    pub(crate) deprecation_reason: Option<String>,
}
impl SchemaField {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            args: vec![],
            type_ref,
            is_deprecated: false,
            deprecation_reason: None,
        }
    }

    /// The arguments this field accepts, in schema-declared order.
    pub fn args(&self) -> &[InputValue] {
        &self.args
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        DeprecationState::from_flags(
            self.is_deprecated,
            self.deprecation_reason.as_deref(),
        )
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// See [`TypeRef::to_human_string()`].
    pub fn human_type_name(&self) -> String {
        self.type_ref.to_human_string()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }

    /// The name of the named type at the bottom of this field's wrapper
    /// chain, or `None` if the chain is malformed.
    pub fn type_name(&self) -> Option<&str> {
        self.type_ref.named_type_name()
    }
}
