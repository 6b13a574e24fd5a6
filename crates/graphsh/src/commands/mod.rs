mod exit;
mod help;
mod ls;
mod on;
mod pp;
mod pq;
mod query;
mod traverse;
mod up;


use crate::CommandResult;
use crate::Session;
use exit::ExitCmd;
use graphsh_core::traversal::ParseError;
use help::HelpCmd;
use ls::LsCmd;
use on::OnCmd;
use pp::PpCmd;
use pq::PqCmd;
use query::QueryCmd;
use traverse::TraverseCmd;
use up::UpCmd;

#[derive(Debug, PartialEq, thiserror::Error)]
pub(crate) enum FindCommandError {
    #[error("No command for input {input:?}")]
    NoCommand {
        input: String,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, PartialEq)]
pub(crate) enum CommandEnum {
    Exit(ExitCmd),
    Help(HelpCmd),
    Ls(LsCmd),
    On(OnCmd),
    Pp(PpCmd),
    Pq(PqCmd),
    Up(UpCmd),
    Traverse(TraverseCmd),
    Query(QueryCmd),
}
impl CommandEnum {
    /// Match `input` against each command in turn; the first match wins.
    pub(crate) fn find(input: &str) -> Result<Self, FindCommandError> {
        if let Some(cmd) = ExitCmd::parse(input) {
            return Ok(Self::Exit(cmd));
        }
        if let Some(cmd) = HelpCmd::parse(input) {
            return Ok(Self::Help(cmd));
        }
        if let Some(cmd) = LsCmd::parse(input) {
            return Ok(Self::Ls(cmd));
        }
        if let Some(cmd) = OnCmd::parse(input) {
            return Ok(Self::On(cmd));
        }
        if let Some(cmd) = PpCmd::parse(input) {
            return Ok(Self::Pp(cmd));
        }
        if let Some(cmd) = PqCmd::parse(input) {
            return Ok(Self::Pq(cmd));
        }
        if let Some(cmd) = UpCmd::parse(input) {
            return Ok(Self::Up(cmd));
        }
        if let Some(cmd) = TraverseCmd::parse(input)? {
            return Ok(Self::Traverse(cmd));
        }
        if let Some(cmd) = QueryCmd::parse(input) {
            return Ok(Self::Query(cmd));
        }

        Err(FindCommandError::NoCommand {
            input: input.to_string(),
        })
    }

    pub(crate) fn run(self, session: &mut Session) -> CommandResult {
        match self {
            Self::Exit(cmd) => cmd.execute(session),
            Self::Help(cmd) => cmd.execute(session),
            Self::Ls(cmd) => cmd.execute(session),
            Self::On(cmd) => cmd.execute(session),
            Self::Pp(cmd) => cmd.execute(session),
            Self::Pq(cmd) => cmd.execute(session),
            Self::Up(cmd) => cmd.execute(session),
            Self::Traverse(cmd) => cmd.execute(session),
            Self::Query(cmd) => cmd.execute(session),
        }
    }
}
