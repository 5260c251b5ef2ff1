//! Lint report accumulation and rendering.
//!
//! Naming violations are not errors; they are collected into a [`LintReport`]
//! while the walk continues, and the report decides the process exit code.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;

/// Severity of a naming violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// A hard violation of the naming conventions.
    Error,
    /// A heuristic finding, reported but not enforced.
    Advisory,
}

/// A single naming violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Path of the offending entry, relative to the lint root.
    pub path: PathBuf,

    /// Name of the rule that was violated.
    pub rule: &'static str,

    /// Human-readable reason, e.g. `expected UpperCamelCase`.
    pub reason: String,

    /// Severity of the violation.
    pub severity: Severity,
}

impl Violation {
    /// Render this violation as a single report line.
    #[must_use]
    pub fn to_line(&self) -> String {
        format!("{}: {}", self.path.display(), self.reason)
    }
}

/// The accumulated result of a lint run.
#[derive(Debug, Clone, Serialize)]
pub struct LintReport {
    /// The root directory that was linted.
    pub root: PathBuf,

    /// When the report was generated.
    pub generated_at: DateTime<Utc>,

    /// Number of classified entries that were checked.
    pub checked: usize,

    /// All violations found, in walk order.
    pub violations: Vec<Violation>,
}

impl LintReport {
    /// Create an empty report for the given root.
    #[must_use]
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            generated_at: Utc::now(),
            checked: 0,
            violations: Vec::new(),
        }
    }

    /// Record that an entry was classified and checked.
    pub fn note_checked(&mut self) {
        self.checked += 1;
    }

    /// Add a violation to the report.
    pub fn record(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Number of error-severity violations.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == Severity::Error)
            .count()
    }

    /// Number of advisory violations.
    #[must_use]
    pub fn advisory_count(&self) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == Severity::Advisory)
            .count()
    }

    /// Whether the run should fail the process.
    ///
    /// Advisories only count when `strict` is set.
    #[must_use]
    pub fn has_failures(&self, strict: bool) -> bool {
        if strict {
            !self.violations.is_empty()
        } else {
            self.error_count() > 0
        }
    }

    /// Render the report as plain text, one `path: reason` line per violation.
    #[must_use]
    pub fn to_plain(&self) -> String {
        let mut out = String::new();
        for violation in &self.violations {
            out.push_str(&violation.to_line());
            out.push('\n');
        }
        out
    }

    /// Render the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
