//! Command to print the discovered project root.

use crate::error::CliError;
use crate::utils::{build_normalizer, load_configuration, GlobalOptions};
use clap::Args;
use pathpick::config::Config;

/// Print the project root.
///
/// Falls back to `./` when no version-control probe answers.
#[derive(Args)]
pub struct RootCommand {}

impl RootCommand {
    /// Execute the root command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global, &Config::default())?;
        let root = build_normalizer(global, &config).project_root();
        println!("{}", root.display());
        Ok(())
    }
}
