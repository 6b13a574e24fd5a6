use crate::TransportError;
use thiserror::Error;

/// Failure to load the introspected schema. Fatal to session start.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Failed to send the introspection query: {0}")]
    Transport(#[from] TransportError),

    #[error("Failed to decode the introspection response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("The introspection query returned errors: {}", .0.join("; "))]
    IntrospectionErrors(Vec<String>),

    #[error("The introspection response contained no `data`")]
    MissingData,

    #[error("The schema does not declare a query root type")]
    NoQueryType,

    #[error("The schema's query root type `{type_name}` is not defined in the schema")]
    MissingQueryType {
        type_name: String,
    },
}
