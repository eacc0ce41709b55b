//! Command handlers and the fixed command table

mod account;
mod entity;
mod platform;
mod settings;

use clap::Args;

use crate::cli::args::{
    ActivationArgs, AuthArgs, CleanArgs, ConfigArgs, EntityArgs, ListArgs, NamespaceArgs,
    PropsArgs, SdkArgs,
};
use crate::cli::registry::{no_args, CommandDescriptor};

/// Every command the CLI knows, in help order. `config` and `props` are hidden.
pub fn all() -> Vec<CommandDescriptor> {
    vec![
        CommandDescriptor::visible(
            "auth",
            "Save an authorization key to the props file",
            AuthArgs::augment_args,
            account::auth,
        ),
        CommandDescriptor::visible(
            "list",
            "List all entities in the namespace",
            ListArgs::augment_args,
            platform::list,
        ),
        CommandDescriptor::visible(
            "whoami",
            "Show the namespace in use",
            no_args,
            account::whoami,
        ),
        CommandDescriptor::visible(
            "trigger",
            "Work with triggers",
            EntityArgs::augment_args,
            entity::trigger,
        ),
        CommandDescriptor::visible(
            "action",
            "Work with actions",
            EntityArgs::augment_args,
            entity::action,
        ),
        CommandDescriptor::visible(
            "sdk",
            "Download SDK components",
            SdkArgs::augment_args,
            platform::sdk,
        ),
        CommandDescriptor::visible("rule", "Work with rules", EntityArgs::augment_args, entity::rule),
        CommandDescriptor::visible(
            "activation",
            "Work with activations",
            ActivationArgs::augment_args,
            entity::activation,
        ),
        CommandDescriptor::visible(
            "package",
            "Work with packages",
            EntityArgs::augment_args,
            entity::package,
        ),
        CommandDescriptor::visible(
            "health",
            "Check the platform endpoint",
            no_args,
            platform::health,
        ),
        CommandDescriptor::visible(
            "clean",
            "Delete every entity in the namespace",
            CleanArgs::augment_args,
            platform::clean,
        ),
        CommandDescriptor::visible(
            "namespace",
            "Work with namespaces",
            NamespaceArgs::augment_args,
            account::namespace,
        ),
        CommandDescriptor::visible(
            "version",
            "Show client version and API host",
            no_args,
            platform::version,
        ),
        CommandDescriptor::hidden(
            "config",
            "Show the effective client configuration",
            ConfigArgs::augment_args,
            settings::config,
        ),
        CommandDescriptor::hidden(
            "props",
            "Show or edit the props file",
            PropsArgs::augment_args,
            settings::props,
        ),
    ]
}
