//! Scaffold materialization.
//!
//! This module creates the canonical starter tree on disk. The non-empty
//! target check happens before any write, so a refused run leaves the
//! filesystem untouched, and merge mode makes re-runs idempotent.

mod tree;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};

pub use tree::{EntryKind, ScaffoldEntry, ENTRIES};

/// Options controlling a materialization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterializeOptions {
    /// Scaffold into a non-empty target, keeping existing entries.
    pub merge: bool,
    /// Create placeholder files alongside the directories.
    pub placeholder_files: bool,
}

impl From<&crate::config::ScaffoldConfig> for MaterializeOptions {
    fn from(config: &crate::config::ScaffoldConfig) -> Self {
        Self {
            merge: config.merge,
            placeholder_files: config.placeholder_files,
        }
    }
}

/// Summary of a materialization run.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    /// The scaffold target.
    pub root: PathBuf,
    /// Directories created by this run.
    pub created_dirs: usize,
    /// Placeholder files created by this run.
    pub created_files: usize,
    /// Entries that already existed and were left alone.
    pub skipped: usize,
    /// Paths created by this run, in creation order.
    pub created_paths: Vec<PathBuf>,
}

impl ScaffoldReport {
    /// Whether this run created nothing (an idempotent re-run).
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.created_dirs == 0 && self.created_files == 0
    }
}

/// Materializer for the canonical starter tree.
#[derive(Debug)]
pub struct Materializer {
    options: MaterializeOptions,
}

impl Materializer {
    /// Create a materializer with the given options.
    #[must_use]
    pub fn new(options: MaterializeOptions) -> Self {
        Self { options }
    }

    /// Create the canonical tree under `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TargetNotEmpty`] if the target exists, is non-empty,
    /// and merge mode is off; in that case nothing has been written.
    /// Returns [`Error::PermissionDenied`] if the process lacks write access.
    pub fn materialize(&self, target: &Path) -> Result<ScaffoldReport> {
        self.check_target(target)?;

        let mut report = ScaffoldReport {
            root: target.to_path_buf(),
            created_dirs: 0,
            created_files: 0,
            skipped: 0,
            created_paths: Vec::new(),
        };

        fs::create_dir_all(target)
            .map_err(|source| Error::directory_create(target.to_path_buf(), source))?;

        for entry in ENTRIES {
            let path = target.join(entry.path);
            match entry.kind {
                EntryKind::Directory => {
                    if path.is_dir() {
                        report.skipped += 1;
                    } else {
                        fs::create_dir(&path)
                            .map_err(|source| Error::directory_create(path.clone(), source))?;
                        debug!(path = %path.display(), "created directory");
                        report.created_dirs += 1;
                        report.created_paths.push(path);
                    }
                }
                EntryKind::Placeholder => {
                    if !self.options.placeholder_files {
                        continue;
                    }
                    if path.exists() {
                        report.skipped += 1;
                    } else {
                        fs::write(&path, b"")
                            .map_err(|source| Error::file_create(path.clone(), source))?;
                        debug!(path = %path.display(), "created placeholder");
                        report.created_files += 1;
                        report.created_paths.push(path);
                    }
                }
            }
        }

        info!(
            root = %target.display(),
            dirs = report.created_dirs,
            files = report.created_files,
            skipped = report.skipped,
            "scaffold finished"
        );
        Ok(report)
    }

    /// Refuse a non-empty target unless merge mode is on.
    ///
    /// Runs before any write so a refusal leaves no partial tree behind.
    fn check_target(&self, target: &Path) -> Result<()> {
        let metadata = match fs::metadata(target) {
            Ok(metadata) => metadata,
            Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(source) => return Err(io_error(target, source)),
        };

        if !metadata.is_dir() {
            return Err(Error::TargetNotEmpty {
                path: target.to_path_buf(),
            });
        }

        if self.options.merge {
            return Ok(());
        }

        let mut entries = fs::read_dir(target).map_err(|source| io_error(target, source))?;
        if entries.next().is_some() {
            return Err(Error::TargetNotEmpty {
                path: target.to_path_buf(),
            });
        }

        Ok(())
    }
}

/// Map an inspection I/O error, promoting permission failures.
fn io_error(path: &Path, source: io::Error) -> Error {
    if source.kind() == io::ErrorKind::PermissionDenied {
        Error::PermissionDenied {
            path: path.to_path_buf(),
            source,
        }
    } else {
        Error::Io(source)
    }
}
