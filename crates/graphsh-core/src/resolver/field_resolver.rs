use crate::query_path::PathNode;
use crate::query_path::QueryPath;
use crate::resolver::ResolutionError;
use crate::schema::Schema;
use crate::types::SchemaField;
use crate::types::SchemaType;

type Result<T> = std::result::Result<T, ResolutionError>;

/// Answers "which fields exist here?" for a [`QueryPath`] by re-walking it
/// from the schema's query root type.
#[derive(Clone, Copy, Debug)]
pub struct FieldResolver<'schema> {
    schema: &'schema Schema,
}
impl<'schema> FieldResolver<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self { schema }
    }

    /// The fields of the type at the end of `path`, in schema-declared order.
    pub fn fields_at(&self, path: &QueryPath) -> Result<Vec<&'schema SchemaField>> {
        self.fields_along(path.list_nodes())
    }

    /// Like [`FieldResolver::fields_at()`], but for an arbitrary sequence of
    /// nodes walked from the query root type.
    pub fn fields_along<'a>(
        &self,
        nodes: impl IntoIterator<Item = &'a PathNode>,
    ) -> Result<Vec<&'schema SchemaField>> {
        let schema_type = self.type_along(nodes)?;
        Ok(schema_type.fields().values().collect())
    }

    /// Resolve the type reached by walking `nodes` from the query root type.
    ///
    /// A node with a concrete-type override moves straight to that type
    /// instead of resolving its own field.
    pub fn type_along<'a>(
        &self,
        nodes: impl IntoIterator<Item = &'a PathNode>,
    ) -> Result<&'schema SchemaType> {
        nodes.into_iter().try_fold(self.schema.query_type(), |current, node| {
            let next_type_name = match node.concrete_type() {
                Some(concrete_type) => concrete_type,
                None => {
                    let field = current.field(node.name()).ok_or_else(|| {
                        ResolutionError::MissingField {
                            field_name: node.name().to_string(),
                            type_name: current.name().to_string(),
                        }
                    })?;
                    field.type_name().ok_or_else(|| {
                        ResolutionError::MalformedTypeRef {
                            field_name: field.name().to_string(),
                            type_name: current.name().to_string(),
                        }
                    })?
                },
            };

            self.schema.type_named(next_type_name).ok_or_else(|| {
                ResolutionError::MissingType {
                    type_name: next_type_name.to_string(),
                }
            })
        })
    }
}
