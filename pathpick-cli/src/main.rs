//! Main entry point for the pathpick CLI.
//!
//! Pulls file paths out of compiler, linter, search and VCS output:
//! - `pick`: pick one path per input line
//! - `candidates`: show every candidate the rule cascade finds in a line
//! - `normalize`: show how a path would be anchored for existence checks
//! - `root`: show the discovered project root
//! - `completions`: generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Route library diagnostics to stderr at the requested verbosity
    if let Err(e) = pathpick::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Warning: could not install logger: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        working_dir: cli.working_dir,
    };

    let result = match cli.command {
        cli::Command::Pick(cmd) => cmd.execute(&global),
        cli::Command::Candidates(cmd) => cmd.execute(&global),
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Root(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet || e.exit_code() != 1 {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
