//! Download command implementation
//!
//! Builds the run configuration, wires the dnf client into the download
//! operation and prints the closing summary. Individual download or move
//! failures leave the exit status at zero.

use crate::cli::Cli;
use crate::config::DownloadConfig;
use crate::dnf::Dnf;
use crate::error::Result;
use crate::operations::download::{DownloadOperation, display};

/// Run download command
pub fn run(cli: &Cli) -> Result<()> {
    let config = DownloadConfig::from_cli(cli)?;
    tracing::debug!(?config, "starting download");

    let dnf = Dnf::new(config.dnf_program.clone(), &config.workdir);
    let report = DownloadOperation::new(&config, &dnf).execute()?;

    display::summary(&report);
    Ok(())
}
