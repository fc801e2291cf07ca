//! Running external commands
//!
//! Every invocation runs in a given directory with stdin closed and its output
//! captured. A non-zero exit becomes [`ExternalCommandError::Failed`]; no
//! timeout is applied.

use std::path::Path;
use std::process::{Command, Output, Stdio};

use crate::error::ExternalCommandError;
use crate::error::external::command_line;

/// Run `program` with `args` in `cwd` and capture its output.
///
/// A relative `program` containing a path separator is looked up from `cwd`,
/// so callers pass absolute paths for anything but bare command names.
pub fn run(program: &Path, args: &[&str], cwd: &Path) -> Result<Output, ExternalCommandError> {
    tracing::debug!(
        command = %display_command(program, args),
        cwd = %cwd.display(),
        "running external command"
    );

    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| ExternalCommandError::spawn(program, &e))?;

    if !output.status.success() {
        return Err(ExternalCommandError::failed(program, args, &output));
    }

    Ok(output)
}

/// Render a command line for log and error messages
pub fn display_command(program: &Path, args: &[&str]) -> String {
    let args: Vec<String> = args.iter().map(ToString::to_string).collect();
    command_line(&program.display().to_string(), &args)
}
