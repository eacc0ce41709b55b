//! Namespace-wide and platform commands: list, health, clean, sdk, version

use std::path::PathBuf;

use clap::{ArgMatches, FromArgMatches};
use serde_json::Value;
use tracing::{debug, instrument};

use super::entity::print_collection;
use crate::application::IoResultExt;
use crate::cli::args::{CleanArgs, ListArgs, SdkArgs, SdkCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::domain::Collection;
use crate::infrastructure::di::AppContext;

/// Page size used when `clean` enumerates entities.
const CLEAN_PAGE: u32 = 200;

#[instrument(skip_all)]
pub fn list(matches: &ArgMatches, ctx: &AppContext) -> CliResult<()> {
    let args = ListArgs::from_arg_matches(matches)?;
    for collection in Collection::ALL.into_iter().filter(Collection::is_deletable) {
        print_collection(ctx.client(), collection, args.limit)?;
    }
    Ok(())
}

#[instrument(skip_all)]
pub fn health(_matches: &ArgMatches, ctx: &AppContext) -> CliResult<()> {
    let info = ctx.client().info()?;
    output::json(&info);
    Ok(())
}

/// Delete rules first, then triggers, actions and packages, so nothing is
/// deleted while still referenced.
#[instrument(skip_all)]
pub fn clean(matches: &ArgMatches, ctx: &AppContext) -> CliResult<()> {
    let args = CleanArgs::from_arg_matches(matches)?;
    if !args.force {
        return Err(CliError::Usage(
            "clean deletes every entity in the namespace; pass --force to proceed".to_string(),
        ));
    }

    let client = ctx.client();
    let mut deleted = 0usize;
    for collection in Collection::DELETABLE {
        loop {
            let batch = client.list(collection, CLEAN_PAGE)?;
            let mut deleted_in_pass = 0usize;
            for entity in &batch {
                let Some(name) = qualified_name(entity) else {
                    output::warning(&format!("skipping unnamed entity in {}", collection));
                    continue;
                };
                debug!("clean: deleting {} {}", collection, name);
                client.delete(collection, &name)?;
                deleted_in_pass += 1;
            }
            deleted += deleted_in_pass;

            // A full page where nothing could be deleted would come back unchanged
            if batch.len() < CLEAN_PAGE as usize || deleted_in_pass == 0 {
                break;
            }
        }
    }

    output::success(&format!(
        "deleted {} entities from namespace {}",
        deleted,
        client.namespace()
    ));
    Ok(())
}

/// Entity name relative to the namespace: `pkg/name` for packaged entities.
fn qualified_name(entity: &Value) -> Option<String> {
    let name = entity.get("name").and_then(Value::as_str)?;
    let package = entity
        .get("namespace")
        .and_then(Value::as_str)
        .and_then(|ns| ns.split_once('/'))
        .map(|(_, package)| package);

    Some(match package {
        Some(package) => format!("{}/{}", package, name),
        None => name.to_string(),
    })
}

#[instrument(skip_all)]
pub fn sdk(matches: &ArgMatches, ctx: &AppContext) -> CliResult<()> {
    let args = SdkArgs::from_arg_matches(matches)?;
    match args.command {
        SdkCommands::Install { component, dir } => {
            let dir = dir.unwrap_or_else(|| PathBuf::from("."));
            let target = dir.join(component.archive());
            if ctx.fs().exists(&target) {
                return Err(CliError::Usage(format!(
                    "{} already exists; remove it first",
                    target.display()
                )));
            }

            let archive = ctx.client().download(component.archive())?;
            ctx.fs()
                .create_new(&target, &archive)
                .with_path_context("write sdk archive", &target)?;
            output::success(&format!(
                "downloaded {} ({} bytes)",
                target.display(),
                archive.len()
            ));
        }
    }
    Ok(())
}

#[instrument(skip_all)]
pub fn version(_matches: &ArgMatches, ctx: &AppContext) -> CliResult<()> {
    output::field("client", env!("CARGO_PKG_VERSION"));
    if let Some(host) = ctx.client().config().api_host.as_deref() {
        output::field("api host", host);
    }
    Ok(())
}
