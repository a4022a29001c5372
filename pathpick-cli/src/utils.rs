//! Utility functions for CLI operations.
//!
//! Configuration loading and construction of the library's picker and
//! normalizer from global options.

use crate::error::CliError;
use pathpick::config::{Config, ConfigLoader, ConfigMerger};
use pathpick::{PathNormalizer, PathPicker};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // verbose/quiet are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Directory to resolve relative paths and discover the root from.
    pub working_dir: Option<PathBuf>,
}

/// Load configuration and layer command-line `overrides` on top.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Command-line flags (highest priority)
/// 2. Environment variables
/// 3. Configuration file
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions, overrides: &Config) -> Result<Config, CliError> {
    let mut config = ConfigLoader::load(global.config.as_deref())
        .map_err(|e| CliError::Config(e.to_string()))?;
    ConfigMerger::merge_into(&mut config, overrides);
    Ok(config)
}

/// `Some(value)` when a flag was given, so unset flags leave lower layers alone.
pub fn flag(given: bool, value: bool) -> Option<bool> {
    given.then_some(value)
}

/// Build a normalizer for `config` honouring `--working-dir`.
pub fn build_normalizer(global: &GlobalOptions, config: &Config) -> PathNormalizer {
    let normalizer = PathNormalizer::new().with_root_resolver(config.root_resolver());
    match &global.working_dir {
        Some(dir) => normalizer.with_working_dir(dir.clone()),
        None => normalizer,
    }
}

/// Build a picker for `config` honouring `--working-dir`.
pub fn build_picker(global: &GlobalOptions, config: &Config) -> PathPicker {
    PathPicker::with_normalizer(build_normalizer(global, config))
}
