//! CLI definitions using clap derive API
//!
//! Argument counts are not enforced here. The positional list is accepted as-is
//! and checked by [`crate::commands::CommandSpec::dispatch`].

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// Default package manager executable
pub const DEFAULT_DNF: &str = "dnf";

/// dnf-downloader - download RPMs for a package and its dependencies
#[derive(Parser, Debug)]
#[command(
    name = "dnf-downloader",
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Download RPMs for a package and its dependencies",
    long_about = "Resolves the runtime requirements of a package with `dnf repoquery`, \
                  downloads every resolved package with `dnf download` into the working \
                  directory and moves the resulting .rpm files into ./out/<package-name>/.",
    after_help = "EXAMPLES:\n  \
                  Download a package and its dependencies:\n    dnf-downloader htop\n\n\
                  Use a different working directory:\n    dnf-downloader -w /srv/mirror htop\n\n\
                  Use a specific dnf executable:\n    dnf-downloader --dnf /usr/bin/dnf5 htop"
)]
pub struct Cli {
    /// Package to download. Only the first name is used
    #[arg(value_name = "PACKAGE_NAME")]
    pub packages: Vec<String>,

    /// Working directory used as download cache (defaults to current directory)
    #[arg(long, short = 'w', env = "DNF_DOWNLOADER_WORKDIR")]
    pub workdir: Option<PathBuf>,

    /// Package manager executable used for resolving and downloading
    #[arg(long, value_name = "PROGRAM", env = "DNF_DOWNLOADER_DNF", default_value = DEFAULT_DNF)]
    pub dnf: String,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
