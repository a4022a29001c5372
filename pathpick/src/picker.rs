//! Choosing one path out of a line of text.
//!
//! Without existence validation the picker returns the matcher's first
//! candidate as written. With validation it walks the candidates in cascade
//! order, normalizes each, and stops at the first one that exists; later
//! candidates are never probed once an earlier one succeeds.
//!
//! Filesystem and process failures met along the way count as "does not
//! exist". The only error a pick can return is for input that is not text.

use std::fs;
use std::panic;
use std::path::{Path, PathBuf};
use std::thread;

use once_cell::unsync::OnceCell;
use serde::Serialize;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::matcher::{candidates, Candidate, MatchOptions};
use crate::path::{Anchor, PathNormalizer, RootResolver, TRUST_MARKER};
use crate::pattern::RuleKind;

/// Options for one pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PickOptions {
    /// Require the picked path to exist on disk.
    pub validate_existence: bool,
    /// Treat the whole trimmed line as the only candidate.
    pub whole_line: bool,
    /// Fall back to the trimmed line when no candidate is found.
    pub resolve_with_fallback: bool,
    /// Report the trimmed line instead of the path once a path is found.
    pub resolve_with_input: bool,
}

impl Default for PickOptions {
    fn default() -> Self {
        Self {
            validate_existence: true,
            whole_line: false,
            resolve_with_fallback: true,
            resolve_with_input: false,
        }
    }
}

impl PickOptions {
    /// Options without existence validation.
    #[must_use]
    pub fn unvalidated() -> Self {
        Self {
            validate_existence: false,
            ..Self::default()
        }
    }

    /// The matcher modes these options imply.
    #[must_use]
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            validate_existence: self.validate_existence,
            whole_line: self.whole_line,
        }
    }
}

/// The outcome of a successful pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickedPath {
    /// The path as it appeared in the line (or the trimmed line itself).
    pub path: String,
    /// Line number that followed the path, if any.
    pub line_number: Option<u32>,
    /// Rule that produced the path; `None` for the whole-line fallback.
    pub rule: Option<RuleKind>,
}

impl PickedPath {
    fn fallback(line: &str) -> Self {
        Self {
            path: line.to_string(),
            line_number: None,
            rule: None,
        }
    }
}

impl From<Candidate> for PickedPath {
    fn from(candidate: Candidate) -> Self {
        Self {
            path: candidate.text,
            line_number: candidate.line_number,
            rule: Some(candidate.rule),
        }
    }
}

/// Picks paths out of lines of text.
///
/// # Examples
///
/// ```
/// use pathpick::{PathPicker, PickOptions};
///
/// let picker = PathPicker::new();
/// let picked = picker
///     .pick_path(" M whatever ./foo/bar", &PickOptions::unvalidated())
///     .unwrap();
/// assert_eq!(picked.as_deref(), Some("./foo/bar"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathPicker {
    normalizer: PathNormalizer,
}

impl PathPicker {
    /// A picker using git/Mercurial root discovery and the user's home directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A picker using the root settings from `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::with_normalizer(PathNormalizer::new().with_root_resolver(config.root_resolver()))
    }

    /// A picker around an existing normalizer.
    #[must_use]
    pub fn with_normalizer(normalizer: PathNormalizer) -> Self {
        Self { normalizer }
    }

    /// Replace the root discovery chain.
    #[must_use]
    pub fn with_root_resolver(mut self, root: RootResolver) -> Self {
        self.normalizer = self.normalizer.with_root_resolver(root);
        self
    }

    /// Override the home directory.
    #[must_use]
    pub fn with_home_dir(mut self, home: Option<PathBuf>) -> Self {
        self.normalizer = self.normalizer.with_home_dir(home);
        self
    }

    /// Probe relative paths and discover the root from `dir`.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.normalizer = self.normalizer.with_working_dir(dir);
        self
    }

    /// The normalizer used for existence probes.
    #[must_use]
    pub fn normalizer(&self) -> &PathNormalizer {
        &self.normalizer
    }

    /// Picks a path out of `line`.
    ///
    /// Returns `Ok(None)` when nothing qualifies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `line` is not valid UTF-8.
    pub fn pick(&self, line: impl AsRef<[u8]>, options: &PickOptions) -> Result<Option<PickedPath>> {
        let line = std::str::from_utf8(line.as_ref()).map_err(|e| Error::InvalidArgument {
            reason: format!("line is not valid UTF-8: {e}"),
        })?;

        let trimmed = line.trim();
        let fallback = (options.resolve_with_fallback && !trimmed.is_empty())
            .then(|| PickedPath::fallback(trimmed));
        let found = candidates(line, options.match_options())
            .into_iter()
            .map(PickedPath::from);

        let picked = if options.validate_existence {
            let root = OnceCell::new();
            found
                .chain(fallback)
                .find(|picked| self.accepts(&picked.path, &root))
        } else {
            found.chain(fallback).next()
        };

        Ok(picked.map(|mut picked| {
            if options.resolve_with_input {
                picked.path = trimmed.to_string();
            }
            picked
        }))
    }

    /// [`pick`](Self::pick), returning only the path text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `line` is not valid UTF-8.
    pub fn pick_path(&self, line: impl AsRef<[u8]>, options: &PickOptions) -> Result<Option<String>> {
        Ok(self.pick(line, options)?.map(|picked| picked.path))
    }

    /// Picks from every line concurrently, keeping input order in the output.
    #[must_use]
    pub fn pick_many<L>(&self, lines: &[L], options: &PickOptions) -> Vec<Result<Option<PickedPath>>>
    where
        L: AsRef<[u8]> + Sync,
    {
        thread::scope(|scope| {
            let handles: Vec<_> = lines
                .iter()
                .map(|line| scope.spawn(move || self.pick(line, options)))
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|payload| panic::resume_unwind(payload))
                })
                .collect()
        })
    }

    /// Whether `raw` names something on disk, or carries the trust marker.
    fn accepts(&self, raw: &str, root: &OnceCell<PathBuf>) -> bool {
        let project_root = || root.get_or_init(|| self.normalizer.project_root()).clone();

        match self.normalizer.normalize_with_root(raw, project_root) {
            Ok(path) if self.exists(&path) => {
                log::debug!("picked {raw:?} ({} exists)", path.display());
                return true;
            }
            Ok(path) => log::trace!("{raw:?}: {} does not exist", path.display()),
            Err(e) => log::trace!("{raw:?}: {e}"),
        }

        if self.normalizer.anchor(raw) == Anchor::ProjectRoot && self.exists(Path::new(raw)) {
            log::debug!("picked {raw:?} relative to the working directory");
            return true;
        }

        if raw.starts_with(TRUST_MARKER) {
            log::debug!("picked {raw:?} on trust");
            return true;
        }

        false
    }

    fn exists(&self, path: &Path) -> bool {
        let path = match self.normalizer.working_dir() {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        };
        fs::metadata(path).is_ok()
    }
}

/// Picks a path from `line` using git/Mercurial root discovery.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `line` is not valid UTF-8.
///
/// # Examples
///
/// ```
/// use pathpick::{extract_path, PickOptions};
///
/// let options = PickOptions { resolve_with_fallback: false, ..PickOptions::unvalidated() };
/// assert_eq!(extract_path("SO.MANY&&PERIODSTXT", &options).unwrap(), None);
///
/// let options = PickOptions::unvalidated();
/// assert_eq!(
///     extract_path("SO.MANY&&PERIODSTXT", &options).unwrap().as_deref(),
///     Some("SO.MANY&&PERIODSTXT")
/// );
/// ```
pub fn extract_path(line: impl AsRef<[u8]>, options: &PickOptions) -> Result<Option<String>> {
    PathPicker::new().pick_path(line, options)
}
