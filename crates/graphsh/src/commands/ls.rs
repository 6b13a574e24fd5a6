use crate::CommandResult;
use crate::Session;
use crate::ShellCommand;
use crate::output_utils;
use graphsh_core::resolver::FieldResolver;

#[derive(Debug, PartialEq)]
pub(crate) struct LsCmd;
impl LsCmd {
    pub(super) fn parse(input: &str) -> Option<Self> {
        (input == "ls").then_some(Self)
    }
}

#[inherent::inherent]
impl ShellCommand for LsCmd {
    /// Lists every field selectable at the current position as a
    /// `NAME TYPE DESCRIPTION` table.
    pub fn execute(self, session: &mut Session) -> CommandResult {
        let resolver = FieldResolver::new(session.schema());
        let fields = match resolver.fields_at(session.path()) {
            Ok(fields) => fields,
            Err(err) => return CommandResult::from(err),
        };

        let rows = fields.into_iter().map(|field| [
            field.name().to_string(),
            field.human_type_name(),
            // Keep each field on a single table row.
            field.description().unwrap_or_default().replace('\n', " "),
        ]);

        CommandResult::stdout(format_args!(
            "{}",
            output_utils::format_table(["NAME", "TYPE", "DESCRIPTION"], rows),
        ))
    }
}
