use crate::CommandResult;
use crate::Session;
use crate::ShellCommand;

#[derive(Debug, PartialEq)]
pub(crate) struct PqCmd;
impl PqCmd {
    pub(super) fn parse(input: &str) -> Option<Self> {
        (input == "pq").then_some(Self)
    }
}

#[inherent::inherent]
impl ShellCommand for PqCmd {
    pub fn execute(self, session: &mut Session) -> CommandResult {
        match session.path().render_document("") {
            Ok(document) => CommandResult::stdout(format_args!("{document}")),
            Err(err) => CommandResult::from(err),
        }
    }
}
