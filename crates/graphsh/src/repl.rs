use crate::Session;
use crate::completer::ShellHelper;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

const PROMPT: &str = "\u{203A} ";
const INTERRUPT_HINT: &str =
    "To exit, press ^C again, or press ^D, or use the `exit` command.";

/// Read and execute lines until the user exits.
///
/// A single ^C prints a hint; a second consecutive ^C exits, as does ^D.
pub(crate) fn run(session: &mut Session) -> rustyline::Result<()> {
    let helper = ShellHelper::new(
        session.schema().clone(),
        session.path().clone(),
    );
    let mut editor: Editor<ShellHelper, DefaultHistory> = Editor::new()?;
    editor.set_helper(Some(helper));

    let mut interrupted = false;
    loop {
        if let Some(helper) = editor.helper_mut() {
            helper.set_path(session.path().clone());
        }

        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                if interrupted {
                    break;
                }
                interrupted = true;
                eprintln!("{INTERRUPT_HINT}");
                continue;
            },
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        };
        interrupted = false;

        if line.trim().is_empty() {
            continue;
        }
        editor.add_history_entry(line.as_str())?;

        let result = session.execute(&line);
        if let Some(stdout) = result.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}");
        }
        if result.exit_session {
            break;
        }
    }

    log::debug!("Session ended.");
    Ok(())
}
