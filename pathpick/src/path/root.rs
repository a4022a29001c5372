//! Project root discovery.
//!
//! The root is found by asking version-control tooling where the working
//! tree starts. Probes are tried in order; the first one that answers wins,
//! and when none does the root is the current directory (`./`).
//!
//! Probe failures never reach the caller. A probe that errors, exits with a
//! non-zero status, prints nothing, or runs past its timeout is treated as
//! not having answered.

use std::env;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Root reported when no probe answers.
pub const DEFAULT_ROOT: &str = "./";

/// Default bound on an external root command.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(5);

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// A version-control system that can report a project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VcsKind {
    /// Git, discovered in-process.
    Git,
    /// Mercurial, via `hg root`.
    Hg,
}

impl VcsKind {
    /// Parses a VCS name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathpick::path::VcsKind;
    ///
    /// assert_eq!(VcsKind::parse("HG").unwrap(), VcsKind::Hg);
    /// assert!(VcsKind::parse("svn").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "git" => Ok(Self::Git),
            "hg" => Ok(Self::Hg),
            _ => Err(format!("unknown version control system: {s}")),
        }
    }

    /// Builds the probe for this system.
    #[must_use]
    pub fn probe(self, timeout: Duration) -> Arc<dyn RootProbe> {
        match self {
            Self::Git => Arc::new(GitRootProbe),
            Self::Hg => Arc::new(CommandRootProbe::hg(timeout)),
        }
    }
}

impl fmt::Display for VcsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Git => write!(f, "git"),
            Self::Hg => write!(f, "hg"),
        }
    }
}

/// One way of asking where the project root is.
#[cfg_attr(test, mockall::automock)]
pub trait RootProbe: Send + Sync {
    /// Short label used in diagnostics.
    fn describe(&self) -> String;

    /// Returns the root as printed by the tool, or `None` if it did not answer.
    ///
    /// The output may carry trailing whitespace.
    fn probe<'a>(&self, working_dir: Option<&'a Path>) -> Option<String>;
}

/// Finds the enclosing git working tree without spawning `git`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitRootProbe;

impl RootProbe for GitRootProbe {
    fn describe(&self) -> String {
        "git".to_string()
    }

    fn probe(&self, working_dir: Option<&Path>) -> Option<String> {
        let start = absolute_start(working_dir)?;

        // Use gix to discover repository - returns (Path, Trust)
        let (repo_path, _trust) = gix::discover::upwards(&start).ok()?;
        let std_path: &Path = repo_path.as_ref();
        let repo = gix::open(std_path).ok()?;

        // Bare repositories have no working tree to anchor paths on
        let work_dir = repo.work_dir()?;
        let work_dir = if work_dir.is_absolute() {
            work_dir.to_path_buf()
        } else {
            start.join(work_dir)
        };

        work_dir.to_str().map(String::from)
    }
}

/// Runs an external command and takes its standard output as the root.
#[derive(Debug, Clone)]
pub struct CommandRootProbe {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandRootProbe {
    /// Creates a probe running `program` with `args`.
    #[must_use]
    pub fn new<I, S>(program: impl Into<String>, args: I, timeout: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            timeout,
        }
    }

    /// `hg root`
    #[must_use]
    pub fn hg(timeout: Duration) -> Self {
        Self::new("hg", ["root"], timeout)
    }

    /// `git rev-parse --show-toplevel`
    #[must_use]
    pub fn git(timeout: Duration) -> Self {
        Self::new("git", ["rev-parse", "--show-toplevel"], timeout)
    }

    fn run(&self, working_dir: Option<&Path>) -> std::io::Result<Option<String>> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());
        if let Some(dir) = working_dir {
            command.current_dir(dir);
        }

        let mut child = command.spawn()?;
        let deadline = Instant::now() + self.timeout;

        let status = loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }
            if Instant::now() >= deadline {
                log::debug!(
                    "{} timed out after {}ms",
                    self.describe(),
                    self.timeout.as_millis()
                );
                let _ = child.kill();
                let _ = child.wait();
                return Ok(None);
            }
            thread::sleep(POLL_INTERVAL);
        };

        if !status.success() {
            return Ok(None);
        }

        let mut stdout = String::new();
        if let Some(mut pipe) = child.stdout.take() {
            pipe.read_to_string(&mut stdout)?;
        }
        Ok(Some(stdout))
    }
}

impl RootProbe for CommandRootProbe {
    fn describe(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }

    fn probe(&self, working_dir: Option<&Path>) -> Option<String> {
        match self.run(working_dir) {
            Ok(Some(stdout)) if !stdout.trim().is_empty() => Some(stdout),
            Ok(_) => None,
            Err(e) => {
                log::debug!("{} failed: {e}", self.describe());
                None
            }
        }
    }
}

/// Always answers with the same directory.
#[derive(Debug, Clone)]
pub struct FixedRootProbe(PathBuf);

impl FixedRootProbe {
    /// Creates a probe that reports `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self(root.into())
    }
}

impl RootProbe for FixedRootProbe {
    fn describe(&self) -> String {
        format!("fixed {}", self.0.display())
    }

    fn probe(&self, _working_dir: Option<&Path>) -> Option<String> {
        self.0.to_str().map(String::from)
    }
}

/// Resolves the project root through an ordered chain of probes.
///
/// Nothing is cached: every call asks the probes again.
///
/// # Examples
///
/// ```
/// use pathpick::path::{RootResolver, DEFAULT_ROOT};
///
/// let resolver = RootResolver::with_probes(Vec::new());
/// assert_eq!(resolver.resolve(None), DEFAULT_ROOT);
/// ```
#[derive(Clone)]
pub struct RootResolver {
    probes: Vec<Arc<dyn RootProbe>>,
}

impl Default for RootResolver {
    fn default() -> Self {
        Self::for_vcs(&[VcsKind::Git, VcsKind::Hg], DEFAULT_COMMAND_TIMEOUT)
    }
}

impl fmt::Debug for RootResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let probes: Vec<String> = self.probes.iter().map(|p| p.describe()).collect();
        f.debug_struct("RootResolver")
            .field("probes", &probes)
            .finish()
    }
}

impl RootResolver {
    /// Git first, then Mercurial.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses exactly `probes`, in order.
    #[must_use]
    pub fn with_probes(probes: Vec<Arc<dyn RootProbe>>) -> Self {
        Self { probes }
    }

    /// One probe per listed system, in order.
    #[must_use]
    pub fn for_vcs(systems: &[VcsKind], timeout: Duration) -> Self {
        Self::with_probes(systems.iter().map(|vcs| vcs.probe(timeout)).collect())
    }

    /// Always resolves to `root`.
    #[must_use]
    pub fn pinned(root: impl Into<PathBuf>) -> Self {
        Self::with_probes(vec![Arc::new(FixedRootProbe::new(root))])
    }

    /// Number of probes in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.probes.len()
    }

    /// Whether the chain has no probes, in which case it always yields `./`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    /// Returns the first answer from the probe chain, or [`DEFAULT_ROOT`].
    ///
    /// The answer is returned as printed and may need trimming.
    #[must_use]
    pub fn resolve(&self, working_dir: Option<&Path>) -> String {
        for probe in &self.probes {
            if let Some(root) = probe.probe(working_dir) {
                log::debug!("project root from {}: {}", probe.describe(), root.trim());
                return root;
            }
            log::trace!("{} reported no root", probe.describe());
        }

        log::debug!("no project root found, using {DEFAULT_ROOT}");
        DEFAULT_ROOT.to_string()
    }

    /// [`resolve`](Self::resolve), trimmed into a path.
    #[must_use]
    pub fn resolve_path(&self, working_dir: Option<&Path>) -> PathBuf {
        PathBuf::from(self.resolve(working_dir).trim())
    }
}

fn absolute_start(working_dir: Option<&Path>) -> Option<PathBuf> {
    match working_dir {
        Some(dir) if dir.is_absolute() => Some(dir.to_path_buf()),
        Some(dir) => env::current_dir().ok().map(|cwd| cwd.join(dir)),
        None => env::current_dir().ok(),
    }
}
