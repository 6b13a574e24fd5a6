use crate::CommandResult;
use crate::Session;
use crate::ShellCommand;
use graphsh_core::traversal;

#[derive(Debug, PartialEq)]
pub(crate) struct UpCmd {
    levels: usize,
}
impl UpCmd {
    pub(super) fn parse(input: &str) -> Option<Self> {
        let levels = traversal::parse_ascend(input).ok()?;
        Some(Self { levels })
    }
}

#[inherent::inherent]
impl ShellCommand for UpCmd {
    pub fn execute(self, session: &mut Session) -> CommandResult {
        session.path_mut().ascend(self.levels);
        CommandResult::empty()
    }
}
