//! dnf-downloader - download an RPM package and its runtime dependencies
//!
//! Dependency resolution and retrieval are delegated to dnf; this tool creates
//! `./out/<package-name>/`, downloads every resolved package into the working
//! directory and moves the resulting `.rpm` files into the output directory.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod config;
mod dnf;
mod error;
mod logging;
mod operations;
mod progress;
#[cfg(test)]
mod test_fixtures;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::ROOT_COMMAND.dispatch(&cli) {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
