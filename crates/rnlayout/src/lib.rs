//! `rnlayout` - React Native project layout scaffolder and naming linter
//!
//! This library provides the core functionality behind the `rnlay` binary:
//! materializing the canonical starter tree for a new project and checking
//! existing trees against the style guide's naming conventions.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod lint;
pub mod logging;
pub mod report;
pub mod rules;
pub mod scaffold;

pub use config::Config;
pub use error::{Error, Result};
pub use lint::Linter;
pub use logging::init_logging;
pub use report::{LintReport, Severity, Violation};
pub use rules::{NameValidator, PathRole};
pub use scaffold::{MaterializeOptions, Materializer, ScaffoldReport};
