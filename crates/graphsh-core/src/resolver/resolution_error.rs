use thiserror::Error;

/// The query path refers to something the loaded schema does not define.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ResolutionError {
    #[error("Missing field `{field_name}` from type `{type_name}`")]
    MissingField {
        field_name: String,
        type_name: String,
    },

    #[error("Missing type `{type_name}`")]
    MissingType {
        type_name: String,
    },

    #[error("Field `{field_name}` on type `{type_name}` has a type reference with no named type")]
    MalformedTypeRef {
        field_name: String,
        type_name: String,
    },
}
