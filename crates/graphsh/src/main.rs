mod cli;
mod command;
mod command_result;
mod commands;
mod completer;
mod http_querier;
mod output_utils;
mod repl;
mod session;

#[cfg(test)]
mod test_utils;

use anyhow::Context;
use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::ShellCommand;
pub(crate) use command_result::CommandResult;
use http_querier::HttpQuerier;
pub(crate) use session::Session;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    setup_logger(&cli);

    match run(cli) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", output_utils::RED_X);
            std::process::ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let querier = HttpQuerier::new(&cli.endpoint, &cli.headers)
        .context("Failed to configure the HTTP transport")?;

    log::info!("Loading schema from `{}`...", querier.endpoint());
    let endpoint = querier.endpoint().to_string();
    let mut session = Session::new(Box::new(querier))
        .with_context(|| format!("Failed to load the schema from `{endpoint}`"))?;

    repl::run(&mut session).context("Line editor failed")?;
    Ok(())
}

fn setup_logger(cli: &Cli) {
    let mut log_level_warnings: Vec<String> = vec![];
    let log_level =
        if cli.verbose {
            tracing::Level::DEBUG
        } else {
            let env_val =
                std::env::var("LOG_LEVEL")
                    .map(|s| s.trim().to_string());

            match env_val.as_deref() {
                Ok("DEBUG" | "debug") => tracing::Level::DEBUG,
                Ok("INFO" | "info") => tracing::Level::INFO,
                Ok("TRACE" | "trace") => tracing::Level::TRACE,
                Ok("VERBOSE" | "verbose") => tracing::Level::DEBUG,
                Ok(other) => {
                    log_level_warnings.push(format!(
                        "Invalid `LOG_LEVEL` environment variable value: \
                        `{other}`"
                    ));
                    DEFAULT_LOG_LEVEL
                },
                Err(_) => DEFAULT_LOG_LEVEL,
            }
        };

    // Command output owns stdout.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    for warning in log_level_warnings.drain(..) {
        log::warn!("{warning}");
    }
}
