//! Progress bar display for package downloads

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for the fetch loop, one tick per download attempt
pub struct FetchProgress {
    pb: ProgressBar,
}

impl FetchProgress {
    /// Create a new progress display with total package count
    pub fn new(total_packages: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let pb = ProgressBar::new(total_packages);
        pb.set_style(style);
        Self { pb }
    }

    /// Update to show the package currently being downloaded
    pub fn start(&self, package: &str) {
        self.pb.set_message(format!("downloading {package}"));
    }

    /// Run `f` with the bar cleared so printed lines are not overdrawn
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.pb.suspend(f)
    }

    /// Increment package progress
    pub fn inc(&self) {
        self.pb.inc(1);
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}
