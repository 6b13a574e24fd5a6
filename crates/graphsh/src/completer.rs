use graphsh_core::query_path::PathNode;
use graphsh_core::query_path::QueryPath;
use graphsh_core::resolver::FieldResolver;
use graphsh_core::schema::Schema;
use graphsh_core::traversal;
use regex::Regex;
use rustyline::completion::Pair;
use std::sync::Arc;
use std::sync::OnceLock;

fn completable_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\.[A-Za-z0-9_.-]*$").expect("valid regex")
    })
}

/// Line-editor helper that tab-completes field names in traversal input.
///
/// Completion runs against a snapshot of the session's query path, which the
/// REPL refreshes via [`ShellHelper::set_path()`] before every prompt.
pub(crate) struct ShellHelper {
    path: QueryPath,
    schema: Arc<Schema>,
}
impl ShellHelper {
    pub fn new(schema: Arc<Schema>, path: QueryPath) -> Self {
        Self { path, schema }
    }

    pub fn set_path(&mut self, path: QueryPath) {
        self.path = path;
    }

    /// Field names that can follow the last `.` in `line[..pos]`, together
    /// with the byte offset where the partial name starts.
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let input = &line[..pos];
        if !completable_pattern().is_match(input) {
            return (pos, vec![]);
        }

        // The pattern guarantees a leading `.`.
        let last_dot = input.rfind('.').unwrap_or_default();
        let (completed, partial) = (&input[..last_dot], &input[last_dot + 1..]);

        let chain =
            if completed.is_empty() {
                vec![]
            } else {
                match traversal::parse_path(completed) {
                    Ok(chain) => chain,
                    Err(err) => {
                        log::debug!("No completions for `{input}`: {err}");
                        return (pos, vec![]);
                    },
                }
            };

        let nodes: Vec<&PathNode> =
            self.path.list_nodes()
                .into_iter()
                .chain(chain.iter())
                .collect();

        let resolver = FieldResolver::new(&self.schema);
        match resolver.fields_along(nodes) {
            Ok(fields) => (
                last_dot + 1,
                fields.into_iter()
                    .map(|field| field.name())
                    .filter(|name| name.starts_with(partial))
                    .map(str::to_string)
                    .collect(),
            ),
            Err(err) => {
                log::debug!("No completions for `{input}`: {err}");
                (pos, vec![])
            },
        }
    }
}

impl rustyline::Helper for ShellHelper {}

impl rustyline::highlight::Highlighter for ShellHelper {}

impl rustyline::hint::Hinter for ShellHelper {
    type Hint = String;
}

impl rustyline::validate::Validator for ShellHelper {}

impl rustyline::completion::Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, names) = self.candidates(line, pos);
        Ok((
            start,
            names.into_iter()
                .map(|name| Pair {
                    display: name.clone(),
                    replacement: name,
                })
                .collect(),
        ))
    }
}
