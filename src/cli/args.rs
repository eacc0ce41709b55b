//! CLI argument definitions using clap
//!
//! The root command is derived from [`Cli`]; every subcommand's arguments
//! are an `Args` struct attached by its descriptor in the registry.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line client for a serverless actions platform
#[derive(Parser, Debug)]
#[command(name = "wsk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {}

/// Default page size for list commands.
pub const DEFAULT_LIMIT: u32 = 30;

#[derive(Args, Debug)]
pub struct AuthArgs {
    /// Authorization key (`user:key`)
    pub key: String,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Maximum entities listed per collection
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,
}

/// Arguments shared by trigger, action, rule and package.
#[derive(Args, Debug)]
pub struct EntityArgs {
    #[command(subcommand)]
    pub command: EntityCommands,
}

#[derive(Subcommand, Debug)]
pub enum EntityCommands {
    /// List entities
    List {
        /// Maximum entities listed
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
    },

    /// Show an entity
    Get {
        /// Entity name
        name: String,
    },

    /// Delete an entity
    Delete {
        /// Entity name
        name: String,
    },
}

#[derive(Args, Debug)]
pub struct ActivationArgs {
    #[command(subcommand)]
    pub command: ActivationCommands,
}

#[derive(Subcommand, Debug)]
pub enum ActivationCommands {
    /// List recent activations
    List {
        /// Maximum activations listed
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
    },

    /// Show an activation record
    Get {
        /// Activation id
        id: String,
    },
}

#[derive(Args, Debug)]
pub struct NamespaceArgs {
    #[command(subcommand)]
    pub command: NamespaceCommands,
}

#[derive(Subcommand, Debug)]
pub enum NamespaceCommands {
    /// List namespaces available to the current key
    List,
}

#[derive(Args, Debug)]
pub struct SdkArgs {
    #[command(subcommand)]
    pub command: SdkCommands,
}

#[derive(Subcommand, Debug)]
pub enum SdkCommands {
    /// Download an SDK archive
    Install {
        #[arg(value_enum)]
        component: SdkComponent,
        /// Target directory (default: cwd)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SdkComponent {
    /// Docker action skeleton
    Docker,
    /// iOS starter app
    Ios,
}

impl SdkComponent {
    /// Archive name published next to the API.
    pub fn archive(&self) -> &'static str {
        match self {
            SdkComponent::Docker => "blackbox-0.1.0.tar.gz",
            SdkComponent::Ios => "OpenWhiskIOSStarterApp.zip",
        }
    }
}

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Required: clean deletes every action, trigger, rule and package
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Show the auth token unmasked
    #[arg(long)]
    pub reveal: bool,
}

#[derive(Args, Debug)]
pub struct PropsArgs {
    #[command(subcommand)]
    pub command: Option<PropsCommands>,
}

#[derive(Subcommand, Debug)]
pub enum PropsCommands {
    /// Show props file contents (default)
    Show,

    /// Set a property
    Set {
        key: String,
        value: String,
    },

    /// Remove a property
    Unset {
        key: String,
    },
}
