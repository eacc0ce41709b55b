//! Hidden commands for inspecting and editing local configuration

use clap::{ArgMatches, FromArgMatches};
use tracing::instrument;

use crate::cli::args::{ConfigArgs, PropsArgs, PropsCommands};
use crate::cli::output;
use crate::cli::CliResult;
use crate::infrastructure::di::AppContext;

/// Print the configuration the client was built with.
#[instrument(skip_all)]
pub fn config(matches: &ArgMatches, ctx: &AppContext) -> CliResult<()> {
    let args = ConfigArgs::from_arg_matches(matches)?;
    let config = if args.reveal {
        ctx.client().config().clone()
    } else {
        ctx.client().config().masked()
    };

    output::field("props file", &ctx.props_path().display());
    let rendered = config.to_toml()?;
    if rendered.trim().is_empty() {
        output::info("(no client configuration)");
    } else {
        output::info(rendered.trim_end());
    }
    Ok(())
}

#[instrument(skip_all)]
pub fn props(matches: &ArgMatches, ctx: &AppContext) -> CliResult<()> {
    let args = PropsArgs::from_arg_matches(matches)?;
    let store = ctx.props_store();
    let path = ctx.props_path();

    match args.command.unwrap_or(PropsCommands::Show) {
        PropsCommands::Show => {
            for (key, value) in &store.read(path)? {
                output::info(&format!("{}={}", key, value));
            }
        }
        PropsCommands::Set { key, value } => {
            store.set(path, &key, &value)?;
            output::success(&format!("{} set in {}", key, path.display()));
        }
        PropsCommands::Unset { key } => {
            if store.unset(path, &key)? {
                output::success(&format!("{} removed from {}", key, path.display()));
            } else {
                output::warning(&format!("{} is not set in {}", key, path.display()));
            }
        }
    }
    Ok(())
}
