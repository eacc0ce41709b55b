//! CLI layer: argument parsing, command registry and dispatch

pub mod args;
pub mod commands;
pub mod error;
pub mod output;
pub mod registry;

pub use args::Cli;
pub use error::{CliError, CliResult};
pub use registry::{CommandDescriptor, CommandRegistry, Visibility};
