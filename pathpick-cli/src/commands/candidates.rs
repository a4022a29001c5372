//! Command to list every candidate the rule cascade finds in a line.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, ValueEnum};
use pathpick::{candidates, Candidate, MatchOptions};
use std::io::{self, Write};

/// List candidate paths in cascade order.
#[derive(Args)]
pub struct CandidatesCommand {
    /// The line to search
    #[arg(value_name = "LINE")]
    pub line: String,

    /// Include the loose rules used when candidates are checked on disk
    #[arg(long)]
    pub validate: bool,

    /// Treat the whole trimmed line as the only candidate
    #[arg(long)]
    pub whole_line: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

/// Output format for the candidates command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One candidate per line: rule, path and line number, tab-separated
    Text,
    /// JSON array
    Json,
}

impl CandidatesCommand {
    /// Execute the candidates command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let options = MatchOptions {
            validate_existence: self.validate,
            whole_line: self.whole_line,
        };
        let found = candidates(&self.line, options);

        match self.format {
            OutputFormat::Text => format_as_text(&found)?,
            OutputFormat::Json => format_as_json(&found)?,
        }

        Ok(())
    }
}

fn format_as_text(found: &[Candidate]) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    for candidate in found {
        match candidate.line_number {
            Some(n) => writeln!(handle, "{}\t{}\t{n}", candidate.rule, candidate.text)?,
            None => writeln!(handle, "{}\t{}", candidate.rule, candidate.text)?,
        }
    }

    Ok(())
}

fn format_as_json(found: &[Candidate]) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(found)
        .map_err(|e| CliError::InvalidArguments(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
