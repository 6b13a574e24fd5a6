mod deprecation_state;
mod enum_value;
mod input_value;
mod schema_field;
mod schema_type;
mod type_kind;
mod type_ref;

pub use deprecation_state::DeprecationState;
pub use enum_value::EnumValue;
pub use input_value::InputValue;
pub use schema_field::SchemaField;
pub use schema_type::SchemaType;
pub use type_kind::TypeKind;
pub use type_ref::TypeRef;

/// Introspection reports absent lists as `null`; treat those as empty.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    let value: Option<T> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
