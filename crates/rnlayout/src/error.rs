//! Error types for rnlayout.
//!
//! This module defines all error types used throughout the rnlayout crate,
//! providing detailed context for debugging and user-friendly error messages.
//!
//! Naming violations are deliberately not represented here. They are ordinary
//! data accumulated into a [`crate::report::LintReport`]; only the process
//! exit code reflects whether any were found.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for rnlayout operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Scaffold Errors ===
    /// The scaffold target exists and is non-empty, and merge mode is off.
    #[error("target directory {path} is not empty (pass --merge to scaffold into it)")]
    TargetNotEmpty {
        /// The offending target directory.
        path: PathBuf,
    },

    /// The process lacks permission to create or inspect a path.
    #[error("permission denied for {path}: {source}")]
    PermissionDenied {
        /// Path that could not be accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a placeholder file.
    #[error("failed to create file {path}: {source}")]
    FileCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Lint Errors ===
    /// Walking the lint tree failed.
    #[error("failed to walk {path}: {source}")]
    Walk {
        /// Path at which the walk failed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: walkdir::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for rnlayout operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Wrap an I/O error from a directory create, promoting permission
    /// failures to [`Error::PermissionDenied`].
    #[must_use]
    pub fn directory_create(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            Self::PermissionDenied { path, source }
        } else {
            Self::DirectoryCreate { path, source }
        }
    }

    /// Wrap an I/O error from a file create, promoting permission failures
    /// to [`Error::PermissionDenied`].
    #[must_use]
    pub fn file_create(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            Self::PermissionDenied { path, source }
        } else {
            Self::FileCreate { path, source }
        }
    }

    /// Check if this error is the non-empty-target condition.
    #[must_use]
    pub fn is_target_not_empty(&self) -> bool {
        matches!(self, Self::TargetNotEmpty { .. })
    }

    /// Check if this error is a permission issue.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_not_empty_display() {
        let err = Error::TargetNotEmpty {
            path: PathBuf::from("/tmp/app"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/app"));
        assert!(msg.contains("--merge"));
    }

    #[test]
    fn test_is_target_not_empty() {
        let err = Error::TargetNotEmpty {
            path: PathBuf::from("x"),
        };
        assert!(err.is_target_not_empty());
        assert!(!err.is_permission_denied());
    }

    #[test]
    fn test_directory_create_promotes_permission_denied() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::directory_create(PathBuf::from("/root/forbidden"), io_err);
        assert!(err.is_permission_denied());
        assert!(err.to_string().contains("/root/forbidden"));
    }

    #[test]
    fn test_directory_create_keeps_other_kinds() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = Error::directory_create(PathBuf::from("/tmp/x"), io_err);
        assert!(matches!(err, Error::DirectoryCreate { .. }));
    }

    #[test]
    fn test_file_create_promotes_permission_denied() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::file_create(PathBuf::from("/root/index.js"), io_err);
        assert!(err.is_permission_denied());
    }

    #[test]
    fn test_file_create_keeps_other_kinds() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing parent");
        let err = Error::file_create(PathBuf::from("/tmp/index.js"), io_err);
        assert!(matches!(err, Error::FileCreate { .. }));
    }

    #[test]
    fn test_config_validation_display() {
        let err = Error::ConfigValidation {
            message: "excluded_dirs entry is empty".to_string(),
        };
        assert!(err.to_string().contains("excluded_dirs"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }
}
