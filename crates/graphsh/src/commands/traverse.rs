use crate::CommandResult;
use crate::Session;
use crate::ShellCommand;
use graphsh_core::query_path::PathNode;
use graphsh_core::traversal;
use graphsh_core::traversal::ParseError;

/// Descends along a parsed chain of fields. Nothing is checked against the
/// schema until the next `ls` or query.
#[derive(Debug, PartialEq)]
pub(crate) struct TraverseCmd {
    chain: Vec<PathNode>,
}
impl TraverseCmd {
    pub(super) fn parse(input: &str) -> Result<Option<Self>, ParseError> {
        if !input.starts_with('.') {
            return Ok(None);
        }
        let chain = traversal::parse_path(input)?;
        Ok(Some(Self { chain }))
    }
}

#[inherent::inherent]
impl ShellCommand for TraverseCmd {
    pub fn execute(self, session: &mut Session) -> CommandResult {
        session.path_mut().append(self.chain);
        CommandResult::empty()
    }
}
