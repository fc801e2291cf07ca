//! Package fetch step
//!
//! Downloads run one at a time, in resolution order. A failed download is
//! recorded and the loop moves on; nothing is retried or deduplicated.

use crate::dnf::PackageManager;
use crate::error::DownloaderError;
use crate::progress::FetchProgress;

use super::display;

/// Result of fetching every resolved package
#[derive(Debug, Default)]
pub struct FetchOutcome {
    /// Names downloaded successfully, in attempt order
    pub fetched: Vec<String>,
    /// One [`DownloaderError::Fetch`] per failed attempt
    pub failures: Vec<DownloaderError>,
}

/// Download every package in `packages` into the working directory.
pub fn fetch_packages(manager: &dyn PackageManager, packages: &[String]) -> FetchOutcome {
    let progress = FetchProgress::new(packages.len() as u64);
    let mut outcome = FetchOutcome::default();

    for package in packages {
        progress.start(package);
        match manager.download(package) {
            Ok(()) => {
                progress.suspend(|| display::downloaded(package));
                outcome.fetched.push(package.clone());
            }
            Err(source) => {
                let err = DownloaderError::Fetch {
                    package: package.clone(),
                    source,
                };
                progress.suspend(|| tracing::warn!("{err}"));
                outcome.failures.push(err);
            }
        }
        progress.inc();
    }

    progress.finish();
    outcome
}
