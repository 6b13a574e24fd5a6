use crate::Querier;
use crate::schema::INTROSPECTION_QUERY;
use crate::schema::Schema;
use crate::schema::SchemaError;
use crate::schema::introspection;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Load-once holder for a session's [`Schema`].
///
/// The first successful [`SchemaModel::load()`] sends the introspection query
/// and stores the decoded schema; every later call returns the stored schema
/// without touching the network. Concurrent callers block until the first
/// load completes. A failed load stores nothing, so a later call retries.
#[derive(Debug, Default)]
pub struct SchemaModel {
    schema: OnceCell<Arc<Schema>>,
}
impl SchemaModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// A model that is already loaded with `schema`.
    pub fn with_schema(schema: Schema) -> Self {
        Self {
            schema: OnceCell::with_value(Arc::new(schema)),
        }
    }

    /// The loaded schema, if [`SchemaModel::load()`] has succeeded.
    pub fn get(&self) -> Option<&Arc<Schema>> {
        self.schema.get()
    }

    pub fn is_loaded(&self) -> bool {
        self.schema.get().is_some()
    }

    pub fn load(&self, querier: &dyn Querier) -> Result<&Arc<Schema>, SchemaError> {
        if let Some(schema) = self.schema.get() {
            log::trace!("Schema already loaded; skipping introspection.");
            return Ok(schema);
        }

        self.schema.get_or_try_init(|| {
            log::debug!("Sending introspection query...");
            let body = querier.query(INTROSPECTION_QUERY)?;
            let schema = introspection::decode_schema(&body)?;
            log::debug!(
                "Loaded schema with {} types (query root: `{}`).",
                schema.all_types().len(),
                schema.query_type_name(),
            );
            Ok(Arc::new(schema))
        })
    }
}
