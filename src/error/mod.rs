//! Error types and handling for dnf-downloader
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`external`]: failures reported by the external package manager commands
//! - [`fs`]: output directory and file relocation errors
//!
//! Two severities flow through [`DownloaderError`]. Working directory lookup,
//! output directory creation, dependency resolution, package file search and
//! argument count errors abort the run. Fetch and relocation errors are
//! collected into the run report and logged as warnings.

pub mod external;
pub mod fs;

pub use external::ExternalCommandError;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for dnf-downloader operations
#[derive(Error, Diagnostic, Debug)]
pub enum DownloaderError {
    // Command routing errors
    #[error("'{command}' requires at least {required} argument(s), got {given}")]
    #[diagnostic(
        code(dnf_downloader::cli::missing_arguments),
        help("Usage: dnf-downloader <package-name>")
    )]
    MissingArguments {
        command: String,
        required: usize,
        given: usize,
    },

    // File system errors
    #[error("Error getting current working directory: {reason}")]
    #[diagnostic(code(dnf_downloader::fs::working_directory))]
    WorkingDirectory { reason: String },

    #[error("Failed to create output directory {path}: {reason}")]
    #[diagnostic(
        code(dnf_downloader::fs::directory_creation),
        help("Check that the working directory exists and is writable")
    )]
    DirectoryCreation { path: String, reason: String },

    #[error("Error searching for package files matching '{pattern}': {reason}")]
    #[diagnostic(code(dnf_downloader::fs::glob))]
    Glob { pattern: String, reason: String },

    #[error("Failed to move {file} to {destination}: {reason}")]
    #[diagnostic(code(dnf_downloader::fs::relocation))]
    Relocation {
        file: String,
        destination: String,
        reason: String,
    },

    // Package manager errors
    #[error("Error resolving dependencies for {package}: {source}")]
    #[diagnostic(
        code(dnf_downloader::dnf::resolution),
        help(
            "Check that dnf is installed, the repositories are reachable and the package name is correct"
        )
    )]
    Resolution {
        package: String,
        source: ExternalCommandError,
    },

    #[error("Failed to download {package}: {source}")]
    #[diagnostic(code(dnf_downloader::dnf::fetch))]
    Fetch {
        package: String,
        source: ExternalCommandError,
    },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DownloaderError>;
