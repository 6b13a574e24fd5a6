use crate::types::EnumValue;
use crate::types::InputValue;
use crate::types::SchemaField;
use crate::types::TypeKind;
use crate::types::TypeRef;
use indexmap::IndexMap;

/// A named type defined within a [`Schema`](crate::schema::Schema).
///
/// Which collections are populated depends on [`SchemaType::kind()`]: fields
/// for `OBJECT`/`INTERFACE`, enum values for `ENUM`, input fields for
/// `INPUT_OBJECT`, and possible types for `UNION`/`INTERFACE`. The others are
/// empty.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaType {
    pub(crate) kind: TypeKind,
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default, deserialize_with = "fields_by_name")]
    pub(crate) fields: IndexMap<String, SchemaField>,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub(crate) input_fields: Vec<InputValue>,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub(crate) interfaces: Vec<TypeRef>,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub(crate) enum_values: Vec<EnumValue>,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub(crate) possible_types: Vec<TypeRef>,
}
impl SchemaType {
    pub fn new(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: None,
            fields: IndexMap::new(),
            input_fields: vec![],
            interfaces: vec![],
            enum_values: vec![],
            possible_types: vec![],
        }
    }

    /// Append a field, replacing any same-named field in place.
    pub fn with_field(mut self, field: SchemaField) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn enum_values(&self) -> &[EnumValue] {
        &self.enum_values
    }

    /// Look up a field by exact (case-sensitive) name.
    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.get(name)
    }

    /// This type's fields in schema-declared order.
    pub fn fields(&self) -> &IndexMap<String, SchemaField> {
        &self.fields
    }

    pub fn input_fields(&self) -> &[InputValue] {
        &self.input_fields
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces
            .iter()
            .filter_map(|iface| iface.named_type_name())
            .collect()
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Names of the concrete object types a value of this (abstract) type
    /// may resolve to.
    pub fn possible_type_names(&self) -> Vec<&str> {
        self.possible_types
            .iter()
            .filter_map(|type_ref| type_ref.named_type_name())
            .collect()
    }
}

fn fields_by_name<'de, D>(
    deserializer: D,
) -> Result<IndexMap<String, SchemaField>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let fields: Vec<SchemaField> = crate::types::null_as_default(deserializer)?;
    Ok(fields.into_iter()
        .map(|field| (field.name.clone(), field))
        .collect())
}
