//! Build script for pathpick-cli.
//!
//! Renders the `pathpick.1` man page into `OUT_DIR/man` with clap_mangen.
//! Build scripts cannot depend on the crate being built, so the command
//! tree is described again here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("pathpick")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Pick file paths out of compiler, search and VCS output")
        .long_about(
            "Reads lines of tool output and prints the file path each line refers to, \
             checking candidates against the filesystem and the project root",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file instead of ~/.pathpick/config.yaml")
                .value_name("PATH")
                .global(true)
                .env("PATHPICK_CONFIG"),
        )
        .arg(
            Arg::new("working-dir")
                .long("working-dir")
                .help("Resolve relative paths and discover the project root from this directory")
                .value_name("DIR")
                .global(true),
        )
        .subcommands(vec![
            Command::new("pick")
                .about("Pick one path from each input line")
                .long_about("Pick one path from each argument, or from each line of standard input"),
            Command::new("candidates")
                .about("List every candidate path found in a line")
                .long_about("Show the candidates the rule cascade finds, in the order they are tried"),
            Command::new("normalize")
                .about("Show how a path is anchored for existence checks")
                .long_about("Print the filesystem path a candidate is checked at"),
            Command::new("root")
                .about("Print the discovered project root")
                .long_about("Print the project root, or ./ when no version-control probe answers"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = std::env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::other("OUT_DIR is not set"))?;
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("pathpick.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
