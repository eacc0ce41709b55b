//! Entity commands: trigger, action, rule, package and activation

use clap::{ArgMatches, FromArgMatches};
use tracing::instrument;

use crate::cli::args::{ActivationArgs, ActivationCommands, EntityArgs, EntityCommands};
use crate::cli::output;
use crate::cli::CliResult;
use crate::domain::Collection;
use crate::infrastructure::di::AppContext;
use crate::infrastructure::WhiskClient;

pub fn trigger(matches: &ArgMatches, ctx: &AppContext) -> CliResult<()> {
    run_entity(Collection::Triggers, matches, ctx)
}

pub fn action(matches: &ArgMatches, ctx: &AppContext) -> CliResult<()> {
    run_entity(Collection::Actions, matches, ctx)
}

pub fn rule(matches: &ArgMatches, ctx: &AppContext) -> CliResult<()> {
    run_entity(Collection::Rules, matches, ctx)
}

pub fn package(matches: &ArgMatches, ctx: &AppContext) -> CliResult<()> {
    run_entity(Collection::Packages, matches, ctx)
}

#[instrument(skip(matches, ctx))]
fn run_entity(collection: Collection, matches: &ArgMatches, ctx: &AppContext) -> CliResult<()> {
    let args = EntityArgs::from_arg_matches(matches)?;
    let client = ctx.client();

    match args.command {
        EntityCommands::List { limit } => print_collection(client, collection, limit)?,
        EntityCommands::Get { name } => output::json(&client.get(collection, &name)?),
        EntityCommands::Delete { name } => {
            client.delete(collection, &name)?;
            output::success(&format!("deleted {} {}", collection, name));
        }
    }
    Ok(())
}

#[instrument(skip_all)]
pub fn activation(matches: &ArgMatches, ctx: &AppContext) -> CliResult<()> {
    let args = ActivationArgs::from_arg_matches(matches)?;
    let client = ctx.client();

    match args.command {
        ActivationCommands::List { limit } => {
            print_collection(client, Collection::Activations, limit)?
        }
        ActivationCommands::Get { id } => {
            output::json(&client.get(Collection::Activations, &id)?)
        }
    }
    Ok(())
}

/// Print a collection header followed by one line per entity.
pub(super) fn print_collection(
    client: &WhiskClient,
    collection: Collection,
    limit: u32,
) -> CliResult<()> {
    let entities = client.list(collection, limit)?;
    output::header(&collection);
    for entity in &entities {
        output::info(&output::entity_line(entity));
    }
    Ok(())
}
