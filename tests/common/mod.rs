//! Common test utilities for dnf-downloader integration tests

#![allow(dead_code, clippy::expect_used)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A working directory for integration tests, with a fake dnf next to it
pub struct TestWorkspace {
    /// Temporary directory holding `work/` and `bin/`
    pub temp: TempDir,
    /// Working directory the tool runs in
    pub path: PathBuf,
    /// Directory holding the fake dnf script
    pub bin: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("work");
        let bin = temp.path().join("bin");
        std::fs::create_dir_all(&path).expect("Failed to create work directory");
        std::fs::create_dir_all(&bin).expect("Failed to create bin directory");
        Self { temp, path, bin }
    }

    /// Write a file in the working directory
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the working directory
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Sorted file names directly inside `path`, relative to the working directory
    pub fn list_dir(&self, path: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.path.join(path))
            .expect("Failed to read directory")
            .map(|entry| {
                entry
                    .expect("Failed to read directory entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }

    /// Package names passed to `dnf download`, one per attempt
    pub fn fetch_log(&self) -> Vec<String> {
        std::fs::read_to_string(self.temp.path().join("fetch.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Install a fake dnf resolving to `resolved` and failing downloads of `failing`.
    ///
    /// Successful downloads create `<name>.rpm` in the current directory and
    /// every attempt is appended to a log outside the working directory.
    #[cfg(unix)]
    pub fn fake_dnf(&self, resolved: &[&str], failing: &[&str]) -> PathBuf {
        let repoquery = if resolved.is_empty() {
            ":".to_string()
        } else {
            format!("printf '%s\\n' {}", resolved.join(" "))
        };
        let failing = if failing.is_empty() {
            "__none__".to_string()
        } else {
            failing.join("|")
        };
        let log = self.temp.path().join("fetch.log");

        self.fake_dnf_script(&format!(
            r#"case "$1" in
  repoquery)
    {repoquery}
    ;;
  download)
    echo "$2" >> "{log}"
    case "$2" in
      {failing}) echo "No package $2 available." >&2; exit 1 ;;
    esac
    printf '%s' "$2" > "$2.rpm"
    ;;
  *)
    exit 2
    ;;
esac"#,
            log = log.display()
        ))
    }

    /// Install a fake dnf running `body` as a `/bin/sh` script
    #[cfg(unix)]
    pub fn fake_dnf_script(&self, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin.join("dnf");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write fake dnf");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake dnf executable");
        path
    }

    /// Command running the tool in this workspace with the fake dnf
    pub fn cmd(&self) -> Command {
        let mut cmd = dnf_downloader_cmd();
        cmd.current_dir(&self.path)
            .env("DNF_DOWNLOADER_DNF", self.bin.join("dnf"));
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

// `cargo_bin` is deprecated in newer assert_cmd releases but still works for single-package crates
#[allow(deprecated)]
pub fn dnf_downloader_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dnf-downloader").expect("Failed to find binary");
    cmd.env_remove("DNF_DOWNLOADER_WORKDIR")
        .env_remove("DNF_DOWNLOADER_DNF")
        .env_remove("RUST_LOG");
    cmd
}
