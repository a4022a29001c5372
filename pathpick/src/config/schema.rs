//! Configuration schema definitions.
//!
//! Every field is optional so that a file, the environment and the command
//! line can each supply only the settings they care about.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::path::{RootResolver, VcsKind};
use crate::picker::PickOptions;

/// Default bound on an external root command, in milliseconds.
pub const DEFAULT_ROOT_TIMEOUT_MS: u64 = 5000;

/// Version-control systems asked for the project root when none are configured.
pub const DEFAULT_VCS: [VcsKind; 2] = [VcsKind::Git, VcsKind::Hg];

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use pathpick::config::Config;
///
/// let config: Config = serde_yaml::from_str("validate_existence: false\nvcs: [hg]\n").unwrap();
/// assert!(!config.pick_options().validate_existence);
/// assert_eq!(config.vcs_order().len(), 1);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Require picked paths to exist on disk.
    pub validate_existence: Option<bool>,

    /// Treat each whole trimmed line as the only candidate.
    pub whole_line: Option<bool>,

    /// Fall back to the trimmed line when nothing else is found.
    pub resolve_with_fallback: Option<bool>,

    /// Report the trimmed input line instead of the path once a path is found.
    pub resolve_with_input: Option<bool>,

    /// Fixed project root; skips version-control discovery.
    pub root: Option<PathBuf>,

    /// Version-control systems to ask for the project root, in order.
    pub vcs: Option<Vec<VcsKind>>,

    /// Bound on each external root command, in milliseconds.
    pub root_timeout_ms: Option<u64>,
}

impl Config {
    /// Pick options with unset fields taken from [`PickOptions::default`].
    #[must_use]
    pub fn pick_options(&self) -> PickOptions {
        let defaults = PickOptions::default();
        PickOptions {
            validate_existence: self
                .validate_existence
                .unwrap_or(defaults.validate_existence),
            whole_line: self.whole_line.unwrap_or(defaults.whole_line),
            resolve_with_fallback: self
                .resolve_with_fallback
                .unwrap_or(defaults.resolve_with_fallback),
            resolve_with_input: self
                .resolve_with_input
                .unwrap_or(defaults.resolve_with_input),
        }
    }

    /// Bound on each external root command.
    #[must_use]
    pub fn root_timeout(&self) -> Duration {
        Duration::from_millis(self.root_timeout_ms.unwrap_or(DEFAULT_ROOT_TIMEOUT_MS))
    }

    /// The configured probe order, or git then Mercurial.
    #[must_use]
    pub fn vcs_order(&self) -> Vec<VcsKind> {
        self.vcs.clone().unwrap_or_else(|| DEFAULT_VCS.to_vec())
    }

    /// Root resolver for this configuration; a pinned root wins over discovery.
    #[must_use]
    pub fn root_resolver(&self) -> RootResolver {
        match &self.root {
            Some(root) => RootResolver::pinned(root.clone()),
            None => RootResolver::for_vcs(&self.vcs_order(), self.root_timeout()),
        }
    }
}
