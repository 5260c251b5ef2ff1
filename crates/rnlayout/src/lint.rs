//! Tree walking and lint orchestration.
//!
//! The linter walks a project tree, classifies every entry by its path role,
//! applies the matching naming rule, and accumulates violations into a
//! [`LintReport`]. The walk never mutates the filesystem.

use std::path::Path;

use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::config::LintConfig;
use crate::error::{Error, Result};
use crate::report::{LintReport, Violation};
use crate::rules::{NameValidator, Validation};

/// Naming linter for project trees.
#[derive(Debug)]
pub struct Linter {
    config: LintConfig,
    validator: NameValidator,
}

impl Linter {
    /// Create a linter with the given configuration.
    #[must_use]
    pub fn new(config: LintConfig) -> Self {
        Self {
            config,
            validator: NameValidator::new(),
        }
    }

    /// Lint the tree rooted at `root`.
    ///
    /// Entries are visited in a stable, name-sorted order so that reports are
    /// deterministic across runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be read or the walk fails partway.
    pub fn run(&self, root: &Path) -> Result<LintReport> {
        let mut report = LintReport::new(root);

        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_excluded(entry));

        for entry in walker {
            let entry = entry.map_err(|source| Error::Walk {
                path: source
                    .path()
                    .map_or_else(|| root.to_path_buf(), Path::to_path_buf),
                source,
            })?;

            let rel_path = entry.path().strip_prefix(root).unwrap_or(entry.path());
            let Some(role) = self
                .validator
                .classify(rel_path, entry.file_type().is_dir())
            else {
                continue;
            };

            report.note_checked();
            if let Validation::Violation {
                rule,
                reason,
                severity,
            } = self.validator.validate(rel_path, role)
            {
                debug!(path = %rel_path.display(), rule, "naming violation");
                report.record(Violation {
                    path: rel_path.to_path_buf(),
                    rule,
                    reason,
                    severity,
                });
            }
        }

        info!(
            checked = report.checked,
            errors = report.error_count(),
            advisories = report.advisory_count(),
            "lint finished"
        );
        Ok(report)
    }

    /// Whether a directory entry should be skipped entirely.
    fn is_excluded(&self, entry: &DirEntry) -> bool {
        if !entry.file_type().is_dir() {
            return false;
        }
        entry
            .file_name()
            .to_str()
            .is_some_and(|name| self.config.excluded_dirs.iter().any(|d| d == name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"").unwrap();
    }

    fn lint(root: &Path) -> LintReport {
        Linter::new(LintConfig::default()).run(root).unwrap()
    }

    #[test]
    fn test_clean_tree_has_no_violations() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "package.json");
        touch(dir.path(), "App.js");
        touch(dir.path(), "src/components/Home.js");
        touch(dir.path(), "src/components/common/Button.js");
        touch(dir.path(), "src/components/index.js");
        touch(dir.path(), "src/lib/constants.js");
        touch(dir.path(), "assets/images/logo.png");

        let report = lint(dir.path());
        assert!(report.violations.is_empty(), "{:?}", report.violations);
        assert!(report.checked > 0);
    }

    #[test]
    fn test_lowercase_component_reports_exactly_one_violation() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/components/home.js");

        let report = lint(dir.path());
        assert_eq!(report.violations.len(), 1);
        assert_eq!(
            report.violations[0].to_line(),
            "src/components/home.js: expected UpperCamelCase"
        );
        assert!(report.has_failures(false));
    }

    #[test]
    fn test_singular_helper_is_advisory_only() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/lib/util.js");

        let report = lint(dir.path());
        assert_eq!(report.violations.len(), 1);
        assert_eq!(
            report.violations[0].to_line(),
            "src/lib/util.js: expected plural helper name"
        );
        assert!(!report.has_failures(false));
        assert!(report.has_failures(true));
    }

    #[test]
    fn test_folder_with_uppercase_is_reported() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/Components")).unwrap();

        let report = lint(dir.path());
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].path, PathBuf::from("src/Components"));
        assert!(report.violations[0]
            .reason
            .contains("expected dash-case folder name"));
    }

    #[test]
    fn test_excluded_dirs_are_skipped() {
        let dir = TempDir::new().unwrap();
        // node_modules itself would fail the dash-case rule, and its contents
        // would fail everything; none of it should be visited
        touch(dir.path(), "node_modules/some_dep/src/components/bad_name.js");
        touch(dir.path(), "ios/MyApp/AppDelegate.m");
        touch(dir.path(), "src/components/Home.js");

        let report = lint(dir.path());
        assert!(report.violations.is_empty(), "{:?}", report.violations);
    }

    #[test]
    fn test_scaffolded_tree_lints_clean() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("app");
        let materializer = crate::scaffold::Materializer::new(crate::scaffold::MaterializeOptions {
            merge: false,
            placeholder_files: true,
        });
        materializer.materialize(&target).unwrap();

        let report = lint(&target);
        assert!(report.violations.is_empty(), "{:?}", report.violations);
    }

    #[test]
    fn test_violations_in_walk_order_are_deterministic() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/components/zulu.js");
        touch(dir.path(), "src/components/alpha.js");

        let first = lint(dir.path());
        let second = lint(dir.path());
        assert_eq!(first.violations, second.violations);
        assert_eq!(first.violations.len(), 2);
        assert!(first.violations[0].path.ends_with("alpha.js"));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");

        let result = Linter::new(LintConfig::default()).run(&missing);
        assert!(matches!(result, Err(Error::Walk { .. })));
    }
}
