use crate::CommandResult;
use crate::Session;
use crate::ShellCommand;
use crate::output_utils;
use regex::Regex;
use std::sync::OnceLock;

struct HelpEntry {
    command: &'static str,
    usage: &'static str,
    description: &'static str,
}

/// Sorted by command.
const HELP_ENTRIES: &[HelpEntry] = &[
    HelpEntry {
        command: ".",
        usage: ".<field>[...]",
        description: "Traverses through fields of the current query\n\
                      \n\
                      For example, \".foo.bar(first: 10).baz\"",
    },
    HelpEntry {
        command: "..",
        usage: "..[/..]",
        description: "Traverses upwards one or more query nodes",
    },
    HelpEntry {
        command: "exit",
        usage: "exit",
        description: "Exits the graphsh shell",
    },
    HelpEntry {
        command: "help",
        usage: "help | help <command>",
        description: "Displays help for a command",
    },
    HelpEntry {
        command: "ls",
        usage: "ls",
        description: "Lists the fields for the current query node",
    },
    HelpEntry {
        command: "on",
        usage: "on <ConcreteType>",
        description: "Applies a concrete type to the current query node",
    },
    HelpEntry {
        command: "pp",
        usage: "pp",
        description: "Prints the current query path",
    },
    HelpEntry {
        command: "pq",
        usage: "pq",
        description: "Prints the current query",
    },
    HelpEntry {
        command: "{}",
        usage: "{<field>}",
        description: "Execute a query in the current query node\n\
                      \n\
                      For example, to query the current node's URL and its \
                      app name: { url, app { name } }",
    },
];

fn help_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^h(?:elp)?(?: (.+))?$").expect("valid regex")
    })
}

#[derive(Debug, PartialEq)]
pub(crate) struct HelpCmd {
    command: Option<String>,
}
impl HelpCmd {
    pub(super) fn parse(input: &str) -> Option<Self> {
        let captures = help_pattern().captures(input)?;
        Some(Self {
            command: captures.get(1).map(|m| m.as_str().to_string()),
        })
    }
}

#[inherent::inherent]
impl ShellCommand for HelpCmd {
    pub fn execute(self, _session: &mut Session) -> CommandResult {
        let Some(command) = self.command else {
            let rows = HELP_ENTRIES.iter().map(|entry| [
                entry.command.to_string(),
                entry.description.lines().next().unwrap_or_default().to_string(),
            ]);
            return CommandResult::stdout(format_args!(
                "{}",
                output_utils::format_table(["COMMAND", "DESCRIPTION"], rows),
            ));
        };

        match HELP_ENTRIES.iter().find(|entry| entry.command == command) {
            Some(entry) => CommandResult::stdout(format_args!(
                "Usage: {}\n\n{}",
                entry.usage,
                entry.description,
            )),
            None => CommandResult::stderr(format_args!(
                "No such command {command:?} exists",
            )),
        }
    }
}
