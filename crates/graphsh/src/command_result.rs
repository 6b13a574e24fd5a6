/// What a [`ShellCommand`](crate::ShellCommand) wants printed, and whether the
/// session should end afterwards.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct CommandResult {
    pub exit_session: bool,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn exit() -> Self {
        Self {
            exit_session: true,
            ..Self::default()
        }
    }

    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_session: false,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_session: false,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }
}
impl<E: std::error::Error> From<E> for CommandResult {
    fn from(err: E) -> Self {
        Self::stderr(format_args!("{err}"))
    }
}
