//! Run configuration derived from command line arguments and environment

use std::path::{Path, PathBuf};

use crate::cli::{Cli, DEFAULT_DNF};
use crate::error::{DownloaderError, Result, fs};

/// Extension of the package files collected from the working directory
pub const PACKAGE_EXTENSION: &str = "rpm";

/// Settings for a single download run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadConfig {
    /// Package whose dependencies are downloaded
    pub package: String,
    /// Absolute working directory, used as download cache
    pub workdir: PathBuf,
    /// Package manager executable, absolute unless it is a bare command name
    pub dnf_program: PathBuf,
    /// Extension of package files relocated after fetching
    pub package_extension: String,
}

impl DownloadConfig {
    pub fn new(package: impl Into<String>, workdir: impl Into<PathBuf>) -> Self {
        Self {
            package: package.into(),
            workdir: workdir.into(),
            dnf_program: PathBuf::from(DEFAULT_DNF),
            package_extension: PACKAGE_EXTENSION.to_string(),
        }
    }

    /// Build the configuration for a run from parsed arguments.
    ///
    /// Only the first positional argument is used; any others are ignored.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let Some((package, ignored)) = cli.packages.split_first() else {
            let command = crate::commands::ROOT_COMMAND;
            return Err(DownloaderError::MissingArguments {
                command: command.name.to_string(),
                required: command.required_args,
                given: cli.packages.len(),
            });
        };

        if !ignored.is_empty() {
            tracing::debug!(ignored = ?ignored, "ignoring extra package arguments");
        }

        let workdir = resolve_workdir(cli.workdir.as_deref())?;
        let dnf_program = resolve_program(&cli.dnf)?;

        Ok(Self {
            dnf_program,
            ..Self::new(package.clone(), workdir)
        })
    }
}

/// Resolve the working directory against the process's current directory
fn resolve_workdir(workdir: Option<&Path>) -> Result<PathBuf> {
    match workdir {
        Some(path) if path.is_absolute() => Ok(path.to_path_buf()),
        Some(path) => Ok(current_dir()?.join(path)),
        None => current_dir(),
    }
}

/// Resolve a relative program path against the process's current directory.
///
/// External commands run inside the working directory, so `./bin/dnf` must be
/// fixed before then. Bare names such as `dnf` are left for a `PATH` lookup.
fn resolve_program(program: &str) -> Result<PathBuf> {
    let path = Path::new(program);
    if path.is_relative() && path.components().count() > 1 {
        Ok(current_dir()?.join(path))
    } else {
        Ok(path.to_path_buf())
    }
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| fs::working_directory(&e))
}
