//! Command registry: attaches command descriptors to the root command and dispatches
//!
//! Lifecycle is `unregistered → registered → dispatched`. Registering twice,
//! or executing before registering, is a programming error and panics.

use std::ffi::OsString;
use std::fmt;

use clap::{ArgMatches, Command};
use tracing::debug;

use crate::cli::error::{CliError, CliResult};
use crate::infrastructure::di::AppContext;

/// Handler invoked with the matched subcommand's arguments.
pub type CommandHandler = fn(&ArgMatches, &AppContext) -> CliResult<()>;

/// Whether a command appears in help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Static description of one subcommand.
#[derive(Clone, Copy)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub about: &'static str,
    pub visibility: Visibility,
    /// Attaches the command's arguments, usually `SomeArgs::augment_args`.
    pub args: fn(Command) -> Command,
    pub run: CommandHandler,
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("visibility", &self.visibility)
            .finish_non_exhaustive()
    }
}

impl CommandDescriptor {
    pub const fn visible(
        name: &'static str,
        about: &'static str,
        args: fn(Command) -> Command,
        run: CommandHandler,
    ) -> Self {
        Self {
            name,
            about,
            visibility: Visibility::Visible,
            args,
            run,
        }
    }

    pub const fn hidden(
        name: &'static str,
        about: &'static str,
        args: fn(Command) -> Command,
        run: CommandHandler,
    ) -> Self {
        Self {
            name,
            about,
            visibility: Visibility::Hidden,
            args,
            run,
        }
    }

    fn to_command(&self) -> Command {
        (self.args)(Command::new(self.name).about(self.about))
            .hide(self.visibility == Visibility::Hidden)
    }
}

/// Arguments for commands that take none.
pub fn no_args(cmd: Command) -> Command {
    cmd
}

/// Root dispatcher with its registered commands.
pub struct CommandRegistry {
    root: Command,
    commands: Vec<CommandDescriptor>,
    registered: bool,
}

impl CommandRegistry {
    pub fn new(root: Command) -> Self {
        Self {
            root,
            commands: Vec::new(),
            registered: false,
        }
    }

    /// Attach `commands` to the root command.
    ///
    /// # Panics
    /// If called more than once, or if two descriptors share a name.
    pub fn register(&mut self, commands: impl IntoIterator<Item = CommandDescriptor>) {
        assert!(!self.registered, "commands are already registered");

        for descriptor in commands {
            assert!(
                self.find(descriptor.name).is_none(),
                "duplicate command: {}",
                descriptor.name
            );
            self.commands.push(descriptor);
        }

        let subcommands: Vec<Command> = self.commands.iter().map(|d| d.to_command()).collect();
        self.root = std::mem::take(&mut self.root).subcommands(subcommands);
        self.registered = true;
        debug!("register: {} commands", self.commands.len());
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Root command including registered subcommands.
    pub fn command(&self) -> &Command {
        &self.root
    }

    pub fn descriptors(&self) -> &[CommandDescriptor] {
        &self.commands
    }

    /// Names shown in help output, in registration order.
    pub fn visible_names(&self) -> Vec<&'static str> {
        self.names_with(Visibility::Visible)
    }

    pub fn hidden_names(&self) -> Vec<&'static str> {
        self.names_with(Visibility::Hidden)
    }

    fn names_with(&self, visibility: Visibility) -> Vec<&'static str> {
        self.commands
            .iter()
            .filter(|d| d.visibility == visibility)
            .map(|d| d.name)
            .collect()
    }

    fn find(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands.iter().find(|d| d.name == name)
    }

    /// Parse the process arguments and run the matched command.
    pub fn execute(&self, ctx: &AppContext) -> CliResult<()> {
        self.execute_from(std::env::args_os(), ctx)
    }

    /// Parse `args` (including the binary name) and run the matched command.
    ///
    /// Errors from clap or from the command are returned unchanged.
    ///
    /// # Panics
    /// If no commands were registered.
    pub fn execute_from<I, T>(&self, args: I, ctx: &AppContext) -> CliResult<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        assert!(self.registered, "commands must be registered before execute");

        let matches = self.root.clone().try_get_matches_from(args)?;
        let Some((name, sub_matches)) = matches.subcommand() else {
            return Err(CliError::Usage("no command given".to_string()));
        };
        let descriptor = self
            .find(name)
            .ok_or_else(|| CliError::Usage(format!("unknown command: {name}")))?;

        debug!("execute: {}", name);
        (descriptor.run)(sub_matches, ctx)
    }
}
