//! Command to show how a path is anchored for existence checks.

use crate::error::CliError;
use crate::utils::{build_normalizer, load_configuration, GlobalOptions};
use clap::Args;
use pathpick::config::Config;
use std::path::PathBuf;

/// Show the anchored form of a path.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path text as it appeared in tool output
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Use this directory as the project root instead of discovering it
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

impl NormalizeCommand {
    /// Execute the normalize command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let overrides = Config {
            root: self.root,
            ..Default::default()
        };
        let config = load_configuration(global, &overrides)?;
        let normalizer = build_normalizer(global, &config);

        let normalized = normalizer.normalize(&self.path)?;
        println!("{}", normalized.display());
        Ok(())
    }
}
