//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration layers; later layers override earlier ones.
///
/// # Examples
///
/// ```
/// use pathpick::config::{Config, ConfigMerger};
///
/// let file = Config { whole_line: Some(true), ..Default::default() };
/// let flags = Config { whole_line: Some(false), ..Default::default() };
///
/// let mut result = file;
/// ConfigMerger::merge_into(&mut result, &flags);
/// assert_eq!(result.whole_line, Some(false));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Every field is replaced wholesale when set in `source`, including the
    /// `vcs` list.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.validate_existence.is_some() {
            target.validate_existence = source.validate_existence;
        }

        if source.whole_line.is_some() {
            target.whole_line = source.whole_line;
        }

        if source.resolve_with_fallback.is_some() {
            target.resolve_with_fallback = source.resolve_with_fallback;
        }

        if source.resolve_with_input.is_some() {
            target.resolve_with_input = source.resolve_with_input;
        }

        if source.root.is_some() {
            target.root.clone_from(&source.root);
        }

        if source.vcs.is_some() {
            target.vcs.clone_from(&source.vcs);
        }

        if source.root_timeout_ms.is_some() {
            target.root_timeout_ms = source.root_timeout_ms;
        }
    }
}
