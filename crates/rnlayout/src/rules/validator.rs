//! Path-role classification and name validation.
//!
//! This module maps each filesystem path to the single naming rule that
//! governs it, and checks the name against that rule. Validation is pure:
//! it never touches the filesystem.

use std::path::Path;

use super::patterns::{builtin_rules, NamingRule, CODE_EXTENSIONS};
use super::PathRole;
use crate::report::Severity;

/// Directory prefix that marks component source files.
const COMPONENTS_PREFIX: &str = "src/components";

/// Directory prefix that marks helper source files.
const HELPERS_PREFIX: &str = "src/lib";

/// Directory prefix that marks static assets.
const ASSETS_PREFIX: &str = "assets";

/// Framework-convention directories the folder rule does not apply to.
///
/// `__tests__` and `__mocks__` are Jest conventions and part of the
/// canonical tree itself.
const WELL_KNOWN_DIRS: [&str; 2] = ["__tests__", "__mocks__"];

/// Result of validating a single name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// The name satisfies the rule for its role.
    Passed,

    /// The name violates the rule for its role.
    Violation {
        /// Name of the violated rule.
        rule: &'static str,
        /// Human-readable reason.
        reason: String,
        /// Severity of the violation.
        severity: Severity,
    },
}

/// Validator for layout naming conventions.
#[derive(Debug)]
pub struct NameValidator {
    rules: Vec<NamingRule>,
}

impl NameValidator {
    /// Create a validator with the built-in rule set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    /// Access the rules this validator applies.
    #[must_use]
    pub fn rules(&self) -> &[NamingRule] {
        &self.rules
    }

    /// Classify a path (relative to the lint root) into its role.
    ///
    /// Returns `None` for paths outside the style guide's remit: root-level
    /// files such as `package.json` or `App.js`, files without a source
    /// extension in code directories, and dotfiles like `.gitkeep`.
    #[must_use]
    pub fn classify(&self, rel_path: &Path, is_dir: bool) -> Option<PathRole> {
        let name = rel_path.file_name()?.to_str()?;

        // Dotfiles and dot-directories are tool metadata, not layout
        if name.starts_with('.') {
            return None;
        }

        if is_dir {
            if WELL_KNOWN_DIRS.contains(&name) {
                return None;
            }
            return Some(PathRole::Folder);
        }

        if rel_path.starts_with(ASSETS_PREFIX) {
            return Some(PathRole::Asset);
        }

        let has_code_extension = rel_path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| CODE_EXTENSIONS.contains(&ext));
        if !has_code_extension {
            return None;
        }

        if rel_path.starts_with(COMPONENTS_PREFIX) {
            Some(PathRole::Component)
        } else if rel_path.starts_with(HELPERS_PREFIX) {
            Some(PathRole::Helper)
        } else {
            None
        }
    }

    /// Validate a classified path against the rule for its role.
    #[must_use]
    pub fn validate(&self, rel_path: &Path, role: PathRole) -> Validation {
        match role {
            PathRole::Folder => self.validate_folder(rel_path),
            PathRole::Component => self.validate_component(rel_path),
            PathRole::Helper => self.validate_helper(rel_path),
            PathRole::Asset => self.validate_asset(rel_path),
        }
    }

    /// Look up the single rule for a role.
    fn rule_for(&self, role: PathRole) -> &NamingRule {
        self.rules
            .iter()
            .find(|r| r.role == role)
            .expect("every role has a built-in rule")
    }

    fn validate_folder(&self, rel_path: &Path) -> Validation {
        let rule = self.rule_for(PathRole::Folder);
        let name = file_name(rel_path);

        if rule.matches(name) {
            Validation::Passed
        } else {
            Validation::Violation {
                rule: rule.name,
                reason: "expected dash-case folder name".to_string(),
                severity: Severity::Error,
            }
        }
    }

    fn validate_component(&self, rel_path: &Path) -> Validation {
        // index.js (and sibling extensions) is the directory's public entry
        // point and is accepted regardless of casing rules
        if is_index_file(rel_path) {
            return Validation::Passed;
        }

        let rule = self.rule_for(PathRole::Component);
        if rule.matches(file_stem(rel_path)) {
            Validation::Passed
        } else {
            Validation::Violation {
                rule: rule.name,
                reason: "expected UpperCamelCase".to_string(),
                severity: Severity::Error,
            }
        }
    }

    fn validate_helper(&self, rel_path: &Path) -> Validation {
        if is_index_file(rel_path) {
            return Validation::Passed;
        }

        let rule = self.rule_for(PathRole::Helper);
        let stem = file_stem(rel_path);

        if !rule.matches(stem) {
            return Validation::Violation {
                rule: rule.name,
                reason: "expected lowerCamelCase helper name".to_string(),
                severity: Severity::Error,
            };
        }

        // The guide asks for plural helper names (constants.js, utils.js).
        // "Plural" is a heuristic, so a singular-looking name is advisory.
        if stem.ends_with('s') {
            Validation::Passed
        } else {
            Validation::Violation {
                rule: rule.name,
                reason: "expected plural helper name".to_string(),
                severity: Severity::Advisory,
            }
        }
    }

    fn validate_asset(&self, rel_path: &Path) -> Validation {
        let rule = self.rule_for(PathRole::Asset);
        if rule.matches(file_stem(rel_path)) {
            Validation::Passed
        } else {
            Validation::Violation {
                rule: rule.name,
                reason: "expected lowerCamelCase asset name".to_string(),
                severity: Severity::Error,
            }
        }
    }
}

impl Default for NameValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// The final path component as a string (empty if not valid UTF-8).
fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("")
}

/// The file name without its extension (empty if not valid UTF-8).
fn file_stem(path: &Path) -> &str {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or("")
}

/// Whether the path is an `index` source file.
fn is_index_file(path: &Path) -> bool {
    file_stem(path) == "index"
}
