use crate::CommandResult;
use crate::Session;
use crate::ShellCommand;
use regex::Regex;
use std::sync::OnceLock;

fn on_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^on(?: ([_A-Za-z][_0-9A-Za-z]*))?$").expect("valid regex")
    })
}

/// Applies (or, with no type name, removes) a concrete-type override on the
/// current node so that `ls` and queries see that type's fields.
#[derive(Debug, PartialEq)]
pub(crate) struct OnCmd {
    type_name: Option<String>,
}
impl OnCmd {
    pub(super) fn parse(input: &str) -> Option<Self> {
        let captures = on_pattern().captures(input)?;
        Some(Self {
            type_name: captures.get(1).map(|m| m.as_str().to_string()),
        })
    }
}

#[inherent::inherent]
impl ShellCommand for OnCmd {
    pub fn execute(self, session: &mut Session) -> CommandResult {
        let path = session.path_mut();
        let current = path.current();
        path.set_concrete_type(current, self.type_name.as_deref().unwrap_or_default());
        CommandResult::empty()
    }
}
