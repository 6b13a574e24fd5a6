use crate::CommandResult;
use crate::Session;
use crate::ShellCommand;

#[derive(Debug, PartialEq)]
pub(crate) struct PpCmd;
impl PpCmd {
    pub(super) fn parse(input: &str) -> Option<Self> {
        (input == "pp").then_some(Self)
    }
}

#[inherent::inherent]
impl ShellCommand for PpCmd {
    pub fn execute(self, session: &mut Session) -> CommandResult {
        match session.path().render_path() {
            Ok(rendered) => CommandResult::stdout(format_args!("{rendered}")),
            Err(err) => CommandResult::from(err),
        }
    }
}
