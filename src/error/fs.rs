//! File system errors

use std::path::Path;

use super::DownloaderError;

/// Creates a working directory lookup error
pub fn working_directory(err: &std::io::Error) -> DownloaderError {
    DownloaderError::WorkingDirectory {
        reason: err.to_string(),
    }
}

/// Creates an output directory creation error
pub fn directory_creation(path: &Path, err: &std::io::Error) -> DownloaderError {
    DownloaderError::DirectoryCreation {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a package file search error
pub fn glob(pattern: &str, reason: impl ToString) -> DownloaderError {
    DownloaderError::Glob {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a relocation error for a single file
pub fn relocation(file: &Path, destination: &Path, err: &std::io::Error) -> DownloaderError {
    DownloaderError::Relocation {
        file: file.display().to_string(),
        destination: destination.display().to_string(),
        reason: err.to_string(),
    }
}
