//! Configuration validation.

use std::collections::HashSet;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates configuration values that the schema alone cannot rule out.
///
/// # Examples
///
/// ```
/// use pathpick::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let zero = Config { root_timeout_ms: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&zero).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(timeout) = config.root_timeout_ms {
            if timeout == 0 {
                return Err(Error::Validation {
                    field: "root_timeout_ms".into(),
                    message: "Timeout must be greater than 0".into(),
                });
            }
        }

        if let Some(ref root) = config.root {
            if root.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "root".into(),
                    message: "Root cannot be empty".into(),
                });
            }
        }

        if let Some(ref vcs) = config.vcs {
            let mut seen = HashSet::new();
            for kind in vcs {
                if !seen.insert(kind) {
                    return Err(Error::Validation {
                        field: "vcs".into(),
                        message: format!("{kind} is listed more than once"),
                    });
                }
            }
        }

        Ok(())
    }
}
