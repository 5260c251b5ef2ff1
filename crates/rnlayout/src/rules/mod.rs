//! Naming rules for React Native project layouts.
//!
//! This module encodes the style guide's file and folder naming conventions:
//!
//! - **Folders**: dash-case (`user-profile`, not `UserProfile`).
//!
//! - **Components**: UpperCamelCase files under `src/components/`, with
//!   `index.js` (and sibling extensions) always exempt.
//!
//! - **Helpers**: plural lowerCamelCase files under `src/lib/` (`constants.js`,
//!   `utils.js`); the plural part is advisory only.
//!
//! - **Assets**: lowerCamelCase files under `assets/`, density suffixes
//!   (`@2x`, `@3x`) allowed.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use rnlayout::rules::{NameValidator, Validation};
//!
//! let validator = NameValidator::new();
//!
//! let path = Path::new("src/components/home.js");
//! let role = validator.classify(path, false).expect("component role");
//! match validator.validate(path, role) {
//!     Validation::Passed => println!("ok"),
//!     Validation::Violation { reason, .. } => println!("{}: {}", path.display(), reason),
//! }
//! ```

mod patterns;
mod validator;

use std::fmt;

pub use patterns::{builtin_rules, NamingRule, CODE_EXTENSIONS};
pub use validator::{NameValidator, Validation};

/// The role a filesystem path plays in the project layout.
///
/// Every checked path is classified into exactly one role, and each role maps
/// to exactly one naming rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathRole {
    /// A directory anywhere in the tree.
    Folder,
    /// A component source file under `src/components/`.
    Component,
    /// A helper source file under `src/lib/`.
    Helper,
    /// A static asset under `assets/`.
    Asset,
}

impl fmt::Display for PathRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Folder => write!(f, "folder"),
            Self::Component => write!(f, "component"),
            Self::Helper => write!(f, "helper"),
            Self::Asset => write!(f, "asset"),
        }
    }
}
