//! Dependency resolution step

use crate::dnf::PackageManager;
use crate::error::{DownloaderError, Result};

/// Resolve the runtime dependencies of `package`.
///
/// The list is returned exactly as the package manager reports it, duplicates
/// included. Any failure is fatal for the run.
pub fn resolve_dependencies(manager: &dyn PackageManager, package: &str) -> Result<Vec<String>> {
    let dependencies = manager
        .resolve(package)
        .map_err(|source| DownloaderError::Resolution {
            package: package.to_string(),
            source,
        })?;

    tracing::debug!(
        package,
        count = dependencies.len(),
        "resolved dependencies"
    );
    Ok(dependencies)
}
