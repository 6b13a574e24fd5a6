use crate::CommandResult;
use crate::Session;

pub(crate) trait ShellCommand: std::fmt::Debug {
    fn execute(self, session: &mut Session) -> CommandResult;
}
