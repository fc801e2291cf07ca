//! External command errors
//!
//! The exit status of the external package manager is the only failure signal
//! available, so every invocation reports through [`ExternalCommandError`].

use std::path::Path;
use std::process::Output;

use miette::Diagnostic;
use thiserror::Error;

/// Number of trailing stderr lines kept for error messages
const STDERR_TAIL_LINES: usize = 3;

/// Failure of a single external command invocation
#[derive(Error, Diagnostic, Debug)]
pub enum ExternalCommandError {
    #[error("failed to start '{program}': {reason}")]
    #[diagnostic(
        code(dnf_downloader::external::spawn_failed),
        help("Check that the program is installed and on PATH")
    )]
    Spawn { program: String, reason: String },

    #[error("`{}` failed with {status}{}", command_line(.program, .args), stderr_suffix(.stderr))]
    #[diagnostic(code(dnf_downloader::external::failed))]
    Failed {
        program: String,
        args: Vec<String>,
        status: String,
        stderr: String,
    },
}

impl ExternalCommandError {
    /// Creates a spawn error for a program that could not be started
    pub fn spawn(program: &Path, err: &std::io::Error) -> Self {
        Self::Spawn {
            program: program.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// Creates an error from the output of a command that exited unsuccessfully
    pub fn failed(program: &Path, args: &[&str], output: &Output) -> Self {
        Self::Failed {
            program: program.display().to_string(),
            args: args.iter().map(ToString::to_string).collect(),
            status: output.status.to_string(),
            stderr: stderr_tail(&output.stderr),
        }
    }
}

/// Render a command line for log and error messages
pub fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

/// Keep the last few non-empty stderr lines, joined on one line
fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("; ")
}
