use std::process;

use clap::CommandFactory;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use wsk::cli::commands;
use wsk::cli::output;
use wsk::cli::{Cli, CliError, CommandRegistry};
use wsk::exitcode;
use wsk::infrastructure::di::bootstrap;

fn main() {
    setup_logging();

    // Startup failures stop the process before any command is registered.
    let ctx = match bootstrap() {
        Ok(ctx) => ctx,
        Err(e) => {
            output::error(&e);
            process::exit(exitcode::CONFIG);
        }
    };

    let mut registry = CommandRegistry::new(Cli::command());
    registry.register(commands::all());

    match registry.execute(&ctx) {
        Ok(()) => {}
        Err(CliError::Clap(e)) => e.exit(),
        Err(e) => {
            output::error(&e);
            process::exit(e.exit_code());
        }
    }
}

fn setup_logging() {
    // RUST_LOG selects the level; default keeps the CLI quiet
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    tracing::debug!("logging initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        let mut registry = CommandRegistry::new(Cli::command());
        registry.register(commands::all());
        registry.command().clone().debug_assert();
    }
}
