//! Download operation
//!
//! A single forward pipeline:
//! 1. Create the output directory `<workdir>/out/<package>`
//! 2. Resolve the package's runtime dependencies
//! 3. Fetch each resolved name into the working directory
//! 4. Move the fetched package files into the output directory
//!
//! Steps 1, 2 and the package file search in step 4 abort the run on error.
//! Individual fetch and move failures are collected in the [`DownloadReport`].
//! Nothing already created on disk is cleaned up after a fatal error.

pub mod display;
pub mod fetch;
pub mod output_dir;
pub mod relocate;
pub mod resolution;

use std::path::PathBuf;

use crate::config::DownloadConfig;
use crate::dnf::PackageManager;
use crate::error::{DownloaderError, Result};

/// What a completed run did
#[derive(Debug)]
pub struct DownloadReport {
    pub output_dir: PathBuf,
    /// Resolved names, duplicates included
    pub resolved: Vec<String>,
    pub fetched: Vec<String>,
    pub fetch_failures: Vec<DownloaderError>,
    /// Destination paths of relocated files
    pub moved: Vec<PathBuf>,
    pub move_failures: Vec<DownloaderError>,
}

impl DownloadReport {
    pub fn has_failures(&self) -> bool {
        !self.fetch_failures.is_empty() || !self.move_failures.is_empty()
    }
}

/// Orchestrates one download run against a package manager
pub struct DownloadOperation<'a> {
    config: &'a DownloadConfig,
    manager: &'a dyn PackageManager,
}

impl<'a> DownloadOperation<'a> {
    pub fn new(config: &'a DownloadConfig, manager: &'a dyn PackageManager) -> Self {
        Self { config, manager }
    }

    pub fn execute(&self) -> Result<DownloadReport> {
        let output_dir =
            output_dir::create_output_directory(&self.config.workdir, &self.config.package)?;
        display::output_directory_created(&output_dir);

        let resolved = resolution::resolve_dependencies(self.manager, &self.config.package)?;
        let fetch = fetch::fetch_packages(self.manager, &resolved);
        let relocation = relocate::relocate_package_files(
            &self.config.workdir,
            &output_dir,
            &self.config.package_extension,
        )?;

        Ok(DownloadReport {
            output_dir,
            resolved,
            fetched: fetch.fetched,
            fetch_failures: fetch.failures,
            moved: relocation.moved,
            move_failures: relocation.failures,
        })
    }
}
