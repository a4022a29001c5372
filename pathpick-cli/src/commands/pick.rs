//! Command to pick one path from each input line.

use crate::error::CliError;
use crate::utils::{build_picker, flag, load_configuration, GlobalOptions};
use clap::Args;
use pathpick::config::Config;
use pathpick::{PathPicker, PickOptions, PickedPath};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Lines handed to the picker at once when reading standard input.
const BATCH_SIZE: usize = 64;

/// Pick one path from each line.
#[derive(Args)]
pub struct PickCommand {
    /// Lines to pick from (read from stdin when omitted)
    #[arg(value_name = "LINE")]
    pub lines: Vec<String>,

    /// Return the first candidate without checking that it exists
    #[arg(long)]
    pub no_validate: bool,

    /// Treat each whole trimmed line as the only candidate
    #[arg(long)]
    pub whole_line: bool,

    /// Do not fall back to the trimmed line when nothing else is found
    #[arg(long)]
    pub no_fallback: bool,

    /// Print the input line instead of the path when a path is found
    #[arg(long)]
    pub with_input: bool,

    /// Append `:N` when the path was followed by a line number
    #[arg(long)]
    pub line_number: bool,

    /// Use this directory as the project root instead of discovering it
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

impl PickCommand {
    /// Execute the pick command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global, &self.overrides())?;
        let options = config.pick_options();
        let picker = build_picker(global, &config);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let mut found = 0usize;

        if self.lines.is_empty() {
            let stdin = io::stdin();
            let mut batch = Vec::with_capacity(BATCH_SIZE);
            for line in stdin.lock().split(b'\n') {
                let mut line = line?;
                if line.last() == Some(&b'\r') {
                    line.pop();
                }
                batch.push(line);
                if batch.len() == BATCH_SIZE {
                    found += self.pick_batch(&picker, &batch, &options, &mut out)?;
                    batch.clear();
                }
            }
            found += self.pick_batch(&picker, &batch, &options, &mut out)?;
        } else {
            found += self.pick_batch(&picker, &self.lines, &options, &mut out)?;
        }

        out.flush()?;

        if found == 0 {
            return Err(CliError::NoPathFound);
        }
        Ok(())
    }

    /// Command-line flags as a configuration layer.
    fn overrides(&self) -> Config {
        Config {
            validate_existence: flag(self.no_validate, false),
            whole_line: flag(self.whole_line, true),
            resolve_with_fallback: flag(self.no_fallback, false),
            resolve_with_input: flag(self.with_input, true),
            root: self.root.clone(),
            ..Default::default()
        }
    }

    /// Picks from `lines`, printing each result in input order.
    fn pick_batch<L, W>(
        &self,
        picker: &PathPicker,
        lines: &[L],
        options: &PickOptions,
        out: &mut W,
    ) -> Result<usize, CliError>
    where
        L: AsRef<[u8]> + Sync,
        W: Write,
    {
        let mut found = 0;
        for result in picker.pick_many(lines, options) {
            if let Some(picked) = result? {
                writeln!(out, "{}", self.render(&picked))?;
                found += 1;
            }
        }
        Ok(found)
    }

    fn render(&self, picked: &PickedPath) -> String {
        match picked.line_number {
            Some(n) if self.line_number => format!("{}:{n}", picked.path),
            _ => picked.path.clone(),
        }
    }
}
