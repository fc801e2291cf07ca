//! File relocation step
//!
//! Package files are looked up by name directly inside the working directory
//! and moved into the output directory under the same base name. A move that
//! fails is recorded and the remaining files are still processed.

use std::io;
use std::path::{Path, PathBuf};

use wax::{CandidatePath, Glob, Pattern};

use crate::error::{DownloaderError, Result, fs};

use super::display;

/// Result of relocating package files
#[derive(Debug, Default)]
pub struct RelocationOutcome {
    /// Destination paths of files moved successfully
    pub moved: Vec<PathBuf>,
    /// One [`DownloaderError::Relocation`] per failed move
    pub failures: Vec<DownloaderError>,
}

/// Glob pattern matching package files with `extension`
pub fn package_file_pattern(extension: &str) -> String {
    format!("*.{extension}")
}

/// List files in `workdir` whose name matches `*.<extension>`, sorted by path.
///
/// Subdirectories are not searched. Failing to build the pattern or to read
/// the directory is fatal.
pub fn find_package_files(workdir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let pattern = package_file_pattern(extension);
    let glob = Glob::new(&pattern).map_err(|e| fs::glob(&pattern, e))?;
    let entries = std::fs::read_dir(workdir).map_err(|e| fs::glob(&pattern, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| fs::glob(&pattern, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            tracing::debug!(path = %path.display(), "skipping non UTF-8 file name");
            continue;
        };

        if glob.matched(&CandidatePath::from(name)).is_some() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Move `source` to `destination`, replacing any existing file.
///
/// Falls back to copy and delete when the rename crosses filesystems.
pub fn move_file(source: &Path, destination: &Path) -> io::Result<()> {
    move_file_with(source, destination, |from, to| std::fs::rename(from, to))
}

/// [`move_file`] with the rename step supplied by the caller
fn move_file_with<R>(source: &Path, destination: &Path, rename: R) -> io::Result<()>
where
    R: Fn(&Path, &Path) -> io::Result<()>,
{
    match rename(source, destination) {
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            tracing::debug!(
                source = %source.display(),
                destination = %destination.display(),
                "rename crosses filesystems, copying instead"
            );
            std::fs::copy(source, destination)?;
            std::fs::remove_file(source)
        }
        result => result,
    }
}

/// Move every package file in `workdir` into `output_dir`.
pub fn relocate_package_files(
    workdir: &Path,
    output_dir: &Path,
    extension: &str,
) -> Result<RelocationOutcome> {
    let files = find_package_files(workdir, extension)?;
    let mut outcome = RelocationOutcome::default();

    for file in files {
        let Some(file_name) = file.file_name() else {
            continue;
        };
        let destination = output_dir.join(file_name);

        match move_file(&file, &destination) {
            Ok(()) => {
                display::moved(&file, output_dir);
                outcome.moved.push(destination);
            }
            Err(e) => {
                let err = fs::relocation(&file, output_dir, &e);
                tracing::warn!("{err}");
                outcome.failures.push(err);
            }
        }
    }

    Ok(outcome)
}
