//! Output directory setup

use std::path::{Path, PathBuf};

use crate::error::{Result, fs};

/// Name of the directory, below the working directory, holding per-package output
pub const OUTPUT_ROOT: &str = "out";

/// Path of the output directory for `package` below `workdir`
pub fn output_dir_path(workdir: &Path, package: &str) -> PathBuf {
    workdir.join(OUTPUT_ROOT).join(package)
}

/// Create `<workdir>/out/<package>`, including missing parents.
///
/// Succeeds if the directory already exists.
pub fn create_output_directory(workdir: &Path, package: &str) -> Result<PathBuf> {
    let output_dir = output_dir_path(workdir, package);
    std::fs::create_dir_all(&output_dir).map_err(|e| fs::directory_creation(&output_dir, &e))?;
    Ok(output_dir)
}
