use crate::schema::SchemaError;
use crate::types::SchemaType;
use std::collections::HashMap;

/// An introspected, immutable GraphQL schema.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) query_type: String,
    pub(crate) mutation_type: Option<String>,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: HashMap<String, SchemaType>,
}
impl Schema {
    /// Assemble a [`Schema`] from its query root type name and the full set
    /// of types. Fails if no type named `query_type` is present.
    pub fn from_types(
        query_type: impl Into<String>,
        types: impl IntoIterator<Item = SchemaType>,
    ) -> Result<Self, SchemaError> {
        let query_type = query_type.into();
        let mut types_map = HashMap::new();
        for schema_type in types {
            let name = schema_type.name().to_string();
            if types_map.insert(name.clone(), schema_type).is_some() {
                log::warn!("Schema defines type `{name}` more than once; keeping the last definition.");
            }
        }

        if !types_map.contains_key(&query_type) {
            return Err(SchemaError::MissingQueryType {
                type_name: query_type,
            });
        }

        Ok(Self {
            query_type,
            mutation_type: None,
            subscription_type: None,
            types: types_map,
        })
    }

    /// Returns a [`HashMap<String, SchemaType>`] containing every type
    /// reported by introspection, keyed by name.
    pub fn all_types(&self) -> &HashMap<String, SchemaType> {
        &self.types
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type.as_deref()
    }

    /// The query root operation type.
    pub fn query_type(&self) -> &SchemaType {
        self.types.get(&self.query_type)
            .expect("query type presence is checked at construction")
    }

    pub fn query_type_name(&self) -> &str {
        self.query_type.as_str()
    }

    pub fn subscription_type_name(&self) -> Option<&str> {
        self.subscription_type.as_deref()
    }

    /// Look up a type by exact name.
    pub fn type_named(&self, name: &str) -> Option<&SchemaType> {
        self.types.get(name)
    }
}
