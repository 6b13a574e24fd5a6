use crate::CommandResult;
use crate::Session;
use crate::ShellCommand;

#[derive(Debug, thiserror::Error)]
enum QueryError {
    #[error(transparent)]
    Render(#[from] graphsh_core::query_path::RenderError),

    #[error(transparent)]
    Transport(#[from] graphsh_core::TransportError),

    #[error("Response is not valid JSON: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

/// Runs `{ ... }` input as the selection set of the current node.
#[derive(Debug, PartialEq)]
pub(crate) struct QueryCmd {
    fragment: String,
}
impl QueryCmd {
    pub(super) fn parse(input: &str) -> Option<Self> {
        let fragment = input.strip_prefix('{')?.strip_suffix('}')?;
        if fragment.is_empty() {
            return None;
        }
        Some(Self {
            fragment: fragment.to_string(),
        })
    }

    fn run_query(&self, session: &Session) -> Result<String, QueryError> {
        let document = session.path().render_document(&self.fragment)?;
        log::debug!("Sending query:\n{document}");

        let body = session.querier().query(&document)?;
        let response: serde_json::Value = serde_json::from_slice(&body)?;
        Ok(serde_json::to_string_pretty(&response)?)
    }
}

#[inherent::inherent]
impl ShellCommand for QueryCmd {
    pub fn execute(self, session: &mut Session) -> CommandResult {
        match self.run_query(session) {
            Ok(pretty) => CommandResult::stdout(format_args!("{pretty}")),
            Err(err) => CommandResult::from(err),
        }
    }
}
