use crate::CommandResult;
use crate::Session;
use crate::ShellCommand;

#[derive(Debug, PartialEq)]
pub(crate) struct ExitCmd;
impl ExitCmd {
    pub(super) fn parse(input: &str) -> Option<Self> {
        (input == "exit").then_some(Self)
    }
}

#[inherent::inherent]
impl ShellCommand for ExitCmd {
    pub fn execute(self, _session: &mut Session) -> CommandResult {
        CommandResult::exit()
    }
}
