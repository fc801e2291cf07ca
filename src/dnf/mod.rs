//! Package manager integration
//!
//! Dependency resolution and package retrieval are delegated to dnf:
//! - `dnf repoquery --resolve --requires <package>` lists the packages providing
//!   the runtime requirements of `<package>`
//! - `dnf download <name>` fetches one package file into the working directory
//!
//! The [`PackageManager`] trait is the seam between the download pipeline and
//! the external tool.

pub mod command;

use std::path::{Path, PathBuf};

use crate::error::ExternalCommandError;

/// Resolves and downloads packages through an external tool
pub trait PackageManager {
    /// List the package names required by `package`, in the order reported.
    fn resolve(&self, package: &str) -> Result<Vec<String>, ExternalCommandError>;

    /// Download a single package into the working directory.
    fn download(&self, package: &str) -> Result<(), ExternalCommandError>;
}

/// The dnf command line client
#[derive(Debug, Clone)]
pub struct Dnf {
    program: PathBuf,
    workdir: PathBuf,
}

impl Dnf {
    pub fn new(program: impl Into<PathBuf>, workdir: &Path) -> Self {
        Self {
            program: program.into(),
            workdir: workdir.to_path_buf(),
        }
    }
}

impl PackageManager for Dnf {
    fn resolve(&self, package: &str) -> Result<Vec<String>, ExternalCommandError> {
        let output = command::run(
            &self.program,
            &["repoquery", "--resolve", "--requires", package],
            &self.workdir,
        )?;
        Ok(parse_package_list(&String::from_utf8_lossy(&output.stdout)))
    }

    fn download(&self, package: &str) -> Result<(), ExternalCommandError> {
        command::run(&self.program, &["download", package], &self.workdir).map(|_| ())
    }
}

/// Split resolver output into package names.
///
/// Duplicates and ordering are preserved as reported.
pub fn parse_package_list(stdout: &str) -> Vec<String> {
    stdout.split_whitespace().map(str::to_string).collect()
}
