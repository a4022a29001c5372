#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathpick
//!
//! A library for pulling file paths out of free-form text such as compiler
//! diagnostics, `grep` results, stack traces and VCS status output.
//!
//! Extraction runs an ordered cascade of regular-expression rules over a
//! line. The resulting candidates can be returned as-is, or checked against
//! the filesystem one after another until one exists.
//!
//! ## Core Types
//!
//! - [`pattern`]: the fixed rule cascade
//! - [`matcher`]: running the cascade over one line
//! - [`path`]: project-root discovery and path anchoring
//! - [`PathPicker`] and [`PickOptions`]: choosing one path from a line
//! - [`Config`]: YAML and environment configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathpick::{extract_path, matcher::matcher, PickOptions};
//!
//! let line = "src/parser.rs:118:9: unused variable";
//! assert_eq!(matcher(line, false, false)[0], "src/parser.rs");
//!
//! let picked = extract_path(line, &PickOptions::unvalidated()).unwrap();
//! assert_eq!(picked.as_deref(), Some("src/parser.rs"));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod path;
pub mod pattern;
pub mod picker;

// Re-export key types at crate root for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use matcher::{candidates, Candidate, MatchOptions};
pub use path::{Anchor, PathNormalizer, RootResolver};
pub use pattern::RuleKind;
pub use picker::{extract_path, PathPicker, PickOptions, PickedPath};
