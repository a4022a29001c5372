//! Configuration system for pathpick.
//!
//! # Configuration Precedence
//!
//! Settings are merged from the following sources (highest to lowest):
//!
//! 1. Command-line flags
//! 2. Environment variables (`PATHPICK_*`)
//! 3. An explicit configuration file, or else `~/.pathpick/config.yaml`
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use pathpick::config::{Config, ConfigMerger};
//!
//! let mut config: Config = serde_yaml::from_str("whole_line: true\n").unwrap();
//! let flags = Config { validate_existence: Some(false), ..Default::default() };
//! ConfigMerger::merge_into(&mut config, &flags);
//!
//! let options = config.pick_options();
//! assert!(options.whole_line);
//! assert!(!options.validate_existence);
//! ```

pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, DEFAULT_ROOT_TIMEOUT_MS, DEFAULT_VCS};
pub use validator::ConfigValidator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;
