mod introspection;
#[allow(clippy::module_inception)]
mod schema;
mod schema_error;
mod schema_model;

pub use introspection::INTROSPECTION_QUERY;
#[cfg(test)]
pub(crate) use introspection::decode_schema;
pub use schema::Schema;
pub use schema_error::SchemaError;
pub use schema_model::SchemaModel;
