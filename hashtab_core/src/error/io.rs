//! I/O related error types

use std::path::PathBuf;
use thiserror::Error;

/// I/O error with the path it concerns
#[derive(Error, Debug)]
#[error("{}", format_io_error(self))]
pub struct IoError {
    /// The kind of I/O error
    pub kind: IoErrorKind,
    /// Path associated with the error (if any)
    pub path: Option<PathBuf>,
    /// Underlying I/O error (if any)
    #[source]
    pub source: Option<std::io::Error>,
}

/// Kind of I/O error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoErrorKind {
    /// File not found
    FileNotFound,
    /// Permission denied
    PermissionDenied,
    /// Path exists but does not name a regular file
    NotRegularFile,
    /// Generic read failure
    Other,
}

impl IoError {
    /// Create a file not found error
    pub fn file_not_found(path: &std::path::Path) -> Self {
        Self {
            kind: IoErrorKind::FileNotFound,
            path: Some(path.to_path_buf()),
            source: None,
        }
    }

    /// Create an error for a path that is not a regular file
    pub fn not_regular_file(path: &std::path::Path) -> Self {
        Self {
            kind: IoErrorKind::NotRegularFile,
            path: Some(path.to_path_buf()),
            source: None,
        }
    }

    /// Create an I/O error from a standard I/O error
    pub fn from_std(source: std::io::Error) -> Self {
        let kind = match source.kind() {
            std::io::ErrorKind::NotFound => IoErrorKind::FileNotFound,
            std::io::ErrorKind::PermissionDenied => IoErrorKind::PermissionDenied,
            _ => IoErrorKind::Other,
        };

        Self {
            kind,
            path: None,
            source: Some(source),
        }
    }

    /// Attach a path to the error
    pub fn with_path(mut self, path: &std::path::Path) -> Self {
        self.path = Some(path.to_path_buf());
        self
    }
}

fn format_io_error(error: &IoError) -> String {
    let what = match error.kind {
        IoErrorKind::FileNotFound => "file not found",
        IoErrorKind::PermissionDenied => "permission denied",
        IoErrorKind::NotRegularFile => "not a regular file",
        IoErrorKind::Other => "read failed",
    };
    match (&error.path, &error.source) {
        (Some(path), _) => format!("{what}: {}", path.display()),
        (None, Some(source)) => format!("{what}: {source}"),
        (None, None) => what.to_string(),
    }
}
