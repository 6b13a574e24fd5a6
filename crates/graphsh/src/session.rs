use crate::CommandResult;
use crate::commands::CommandEnum;
use graphsh_core::Querier;
use graphsh_core::query_path::QueryPath;
use graphsh_core::schema::Schema;
use graphsh_core::schema::SchemaError;
use graphsh_core::schema::SchemaModel;
use std::sync::Arc;

/// State shared by every command in one shell session: the transport, the
/// schema loaded through it, and the user's current query path.
pub(crate) struct Session {
    path: QueryPath,
    querier: Box<dyn Querier>,
    schema: Arc<Schema>,
}
impl Session {
    /// Load the schema through `querier` and start a session at the root.
    pub fn new(querier: Box<dyn Querier>) -> Result<Self, SchemaError> {
        let model = SchemaModel::new();
        let schema = Arc::clone(model.load(querier.as_ref())?);
        Ok(Self {
            path: QueryPath::new(),
            querier,
            schema,
        })
    }

    /// Parse `input` into a command and run it.
    pub fn execute(&mut self, input: &str) -> CommandResult {
        let input = input.strip_suffix('\n').unwrap_or(input);
        match CommandEnum::find(input) {
            Ok(command) => {
                log::debug!("Dispatching `{input}` to {command:?}.");
                command.run(self)
            },
            Err(err) => CommandResult::from(err),
        }
    }

    pub fn path(&self) -> &QueryPath {
        &self.path
    }

    pub fn path_mut(&mut self) -> &mut QueryPath {
        &mut self.path
    }

    pub fn querier(&self) -> &dyn Querier {
        self.querier.as_ref()
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }
}
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("path", &self.path)
            .field("schema", &self.schema.query_type_name())
            .finish_non_exhaustive()
    }
}
