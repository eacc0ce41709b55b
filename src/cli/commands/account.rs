//! Credential and namespace commands

use clap::{ArgMatches, FromArgMatches};
use tracing::{debug, instrument};

use crate::cli::args::{AuthArgs, NamespaceArgs, NamespaceCommands};
use crate::cli::output;
use crate::cli::CliResult;
use crate::config::AUTH_KEY;
use crate::infrastructure::client::DEFAULT_NAMESPACE;
use crate::infrastructure::di::AppContext;

/// Persist the authorization key as `AUTH` in the props file.
#[instrument(skip_all)]
pub fn auth(matches: &ArgMatches, ctx: &AppContext) -> CliResult<()> {
    let args = AuthArgs::from_arg_matches(matches)?;
    ctx.props_store()
        .set(ctx.props_path(), AUTH_KEY, &args.key)?;
    output::success(&format!(
        "authorization key saved to {}",
        ctx.props_path().display()
    ));
    Ok(())
}

/// Print the configured namespace, or ask the platform for the key's default one.
#[instrument(skip_all)]
pub fn whoami(_matches: &ArgMatches, ctx: &AppContext) -> CliResult<()> {
    let client = ctx.client();
    if client.namespace() != DEFAULT_NAMESPACE {
        output::info(client.namespace());
        return Ok(());
    }

    debug!("whoami: no namespace configured, asking the platform");
    let namespaces = client.namespaces()?;
    let namespace = namespaces
        .first()
        .map(String::as_str)
        .unwrap_or(DEFAULT_NAMESPACE);
    output::info(namespace);
    Ok(())
}

#[instrument(skip_all)]
pub fn namespace(matches: &ArgMatches, ctx: &AppContext) -> CliResult<()> {
    let args = NamespaceArgs::from_arg_matches(matches)?;
    match args.command {
        NamespaceCommands::List => {
            let namespaces = ctx.client().namespaces()?;
            output::header("namespaces");
            for namespace in &namespaces {
                output::info(namespace);
            }
        }
    }
    Ok(())
}
