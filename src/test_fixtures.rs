//! Test fixtures and utilities for reducing test setup duplication.
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, FakePackageManager};
//!
//! let temp = create_temp_dir();
//! let manager = FakePackageManager::resolving(&["libfoo-1.0", "libbar-2.1"])
//!     .writing_into(temp.path());
//! ```

#![allow(clippy::expect_used)]

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::dnf::PackageManager;
use crate::error::ExternalCommandError;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write an executable `/bin/sh` script named `name` into `dir` and return its path.
///
/// # Panics
///
/// Panics if the script cannot be written.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> String {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to make script executable");
    path.to_str().expect("Non UTF-8 temp path").to_string()
}

/// In-memory package manager that records every call
#[derive(Debug, Default)]
pub struct FakePackageManager {
    resolved: Option<Vec<String>>,
    failing: HashSet<String>,
    workdir: Option<PathBuf>,
    resolve_calls: RefCell<Vec<String>>,
    download_calls: RefCell<Vec<String>>,
}

impl FakePackageManager {
    /// Resolve every package to `names`
    pub fn resolving(names: &[&str]) -> Self {
        Self {
            resolved: Some(names.iter().map(ToString::to_string).collect()),
            ..Self::default()
        }
    }

    /// Fail every resolution as if the tool were missing
    pub fn unresolvable() -> Self {
        Self::default()
    }

    /// Fail downloads of the given names
    pub fn failing_downloads(mut self, names: &[&str]) -> Self {
        self.failing = names.iter().map(ToString::to_string).collect();
        self
    }

    /// Create `<name>.rpm` in `dir` for each successful download
    pub fn writing_into(mut self, dir: &Path) -> Self {
        self.workdir = Some(dir.to_path_buf());
        self
    }

    pub fn resolve_calls(&self) -> Vec<String> {
        self.resolve_calls.borrow().clone()
    }

    pub fn download_calls(&self) -> Vec<String> {
        self.download_calls.borrow().clone()
    }
}

impl PackageManager for FakePackageManager {
    fn resolve(&self, package: &str) -> Result<Vec<String>, ExternalCommandError> {
        self.resolve_calls.borrow_mut().push(package.to_string());
        self.resolved
            .clone()
            .ok_or_else(|| ExternalCommandError::Spawn {
                program: "dnf".to_string(),
                reason: "No such file or directory (os error 2)".to_string(),
            })
    }

    fn download(&self, package: &str) -> Result<(), ExternalCommandError> {
        self.download_calls.borrow_mut().push(package.to_string());
        if self.failing.contains(package) {
            return Err(ExternalCommandError::Failed {
                program: "dnf".to_string(),
                args: vec!["download".to_string(), package.to_string()],
                status: "exit status: 1".to_string(),
                stderr: format!("No package {package} available."),
            });
        }
        if let Some(dir) = &self.workdir {
            std::fs::write(dir.join(format!("{package}.rpm")), package)
                .expect("Failed to write fake package file");
        }
        Ok(())
    }
}
