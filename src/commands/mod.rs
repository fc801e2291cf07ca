//! Command routing for the dnf-downloader CLI
//!
//! The tool has a single command, described by [`ROOT_COMMAND`]: its name, the
//! minimum number of positional arguments and the handler to run.

pub mod download;

use crate::cli::Cli;
use crate::error::{DownloaderError, Result};

/// Handler invoked once argument count checks pass
pub type Handler = fn(&Cli) -> Result<()>;

/// Routing entry for a command
#[derive(Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub required_args: usize,
    pub handler: Handler,
}

/// The download command, run for `dnf-downloader <package-name> [...]`
pub const ROOT_COMMAND: CommandSpec = CommandSpec {
    name: "dnf-downloader",
    required_args: 1,
    handler: download::run,
};

impl CommandSpec {
    /// Check the positional argument count and run the handler
    pub fn dispatch(&self, cli: &Cli) -> Result<()> {
        let given = cli.packages.len();
        if given < self.required_args {
            return Err(DownloaderError::MissingArguments {
                command: self.name.to_string(),
                required: self.required_args,
                given,
            });
        }
        (self.handler)(cli)
    }
}
