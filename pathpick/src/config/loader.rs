//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};

/// Directory under the home directory holding the user configuration.
pub const USER_CONFIG_DIR: &str = ".pathpick";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from files and the environment.
///
/// # Examples
///
/// ```no_run
/// use pathpick::config::ConfigLoader;
///
/// let config = ConfigLoader::load(None).unwrap();
/// println!("validate: {}", config.pick_options().validate_existence);
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the effective configuration.
    ///
    /// Reads `explicit` when given (it must exist), otherwise
    /// `~/.pathpick/config.yaml` when present. `PATHPICK_*` environment
    /// variables are applied on top and the result is validated.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// value is malformed, or the merged configuration is invalid.
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        let source = match explicit {
            Some(path) => Some(ConfigSource {
                path: path.to_path_buf(),
                precedence: 2,
                config: Self::load_file(path)?,
            }),
            None => Self::load_user_config(None)?,
        };

        let mut config = ConfigMerger::merge(source.into_iter().collect());
        EnvironmentConfig::apply_overrides(&mut config)?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Load the user configuration file if it exists.
    ///
    /// If `data_dir` is provided, loads from `{data_dir}/config.yaml`.
    /// Otherwise uses `~/.pathpick/config.yaml`. A missing home directory
    /// means there is no user configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user_config(data_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match data_dir {
            Some(dir) => dir.join("config.yaml"),
            None => match Self::user_config_path() {
                Ok(path) => path,
                Err(e) => {
                    log::debug!("skipping user configuration: {e}");
                    return Ok(None);
                }
            },
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file is an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        log::debug!("loading configuration from {}", path.display());
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Get the user configuration file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn user_config_path() -> Result<PathBuf> {
        let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
            path: PathBuf::from("~"),
            reason: "Cannot determine home directory".into(),
        })?;
        Ok(home.join(USER_CONFIG_DIR).join("config.yaml"))
    }
}
