//! Environment variable handling for configuration overrides.
//!
//! `PATHPICK_*` variables override values read from configuration files.

use std::env;
use std::path::PathBuf;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::VcsKind;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathpick::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., invalid boolean, non-numeric timeout, unknown VCS name).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var("PATHPICK_VALIDATE") {
            config.validate_existence = Some(Self::parse_bool("PATHPICK_VALIDATE", &val)?);
        }

        if let Ok(val) = env::var("PATHPICK_WHOLE_LINE") {
            config.whole_line = Some(Self::parse_bool("PATHPICK_WHOLE_LINE", &val)?);
        }

        if let Ok(val) = env::var("PATHPICK_FALLBACK") {
            config.resolve_with_fallback = Some(Self::parse_bool("PATHPICK_FALLBACK", &val)?);
        }

        if let Ok(val) = env::var("PATHPICK_WITH_INPUT") {
            config.resolve_with_input = Some(Self::parse_bool("PATHPICK_WITH_INPUT", &val)?);
        }

        if let Ok(root) = env::var("PATHPICK_ROOT") {
            config.root = Some(PathBuf::from(root));
        }

        if let Ok(ms) = env::var("PATHPICK_ROOT_TIMEOUT_MS") {
            config.root_timeout_ms = Some(ms.trim().parse().map_err(|_| Error::Validation {
                field: "PATHPICK_ROOT_TIMEOUT_MS".into(),
                message: "Must be a positive integer".into(),
            })?);
        }

        if let Ok(vcs) = env::var("PATHPICK_VCS") {
            config.vcs = Some(Self::parse_vcs_list(&vcs)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    /// Parse a comma-separated list of VCS names, skipping empty entries.
    fn parse_vcs_list(s: &str) -> Result<Vec<VcsKind>> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                VcsKind::parse(part).map_err(|message| Error::Validation {
                    field: "PATHPICK_VCS".into(),
                    message,
                })
            })
            .collect()
    }
}
