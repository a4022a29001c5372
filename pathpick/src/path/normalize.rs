//! Anchoring extracted path text on the filesystem.
//!
//! Text pulled out of tool output can be absolute, relative to the working
//! directory, relative to the home directory, prefixed with a unified-diff
//! side marker (`a/`, `b/`), or relative to the project root. The normalizer
//! decides which, in a fixed order where the first matching rule wins:
//!
//! 1. empty or single-character text is left alone;
//! 2. `/…`, `./…`, `../…` and `.../…` are left alone;
//! 3. `~/…` is expanded to the home directory;
//! 4. a first segment of `home` is made absolute (`/home/…`);
//! 5. a first segment of `www` is taken as living under the home directory;
//! 6. a bare file name is made explicitly relative (`./name`);
//! 7. `a/…` and `b/…` lose the marker and are joined to the project root;
//! 8. everything else is joined to the project root.
//!
//! The normalized path is only ever used to check existence.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::root::RootResolver;

/// Prefix meaning "already resolved, do not look it up".
pub const TRUST_MARKER: &str = ".../";

/// How a piece of path text gets anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Used exactly as written.
    Unchanged,
    /// `~/…`, expanded to the home directory.
    Home,
    /// First segment `home`, made absolute.
    FilesystemRoot,
    /// First segment `www`, placed under the home directory.
    UnderHome,
    /// Bare file name, made relative to the working directory.
    CurrentDir,
    /// `a/…` or `b/…` from a unified diff, resolved against the project root.
    DiffMarker,
    /// Resolved against the project root.
    ProjectRoot,
}

impl Anchor {
    /// Classifies `raw` without touching the filesystem or running commands.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathpick::path::Anchor;
    ///
    /// assert_eq!(Anchor::of("/etc/hosts"), Anchor::Unchanged);
    /// assert_eq!(Anchor::of("~/notes.txt"), Anchor::Home);
    /// assert_eq!(Anchor::of("b/src/lib.rs"), Anchor::DiffMarker);
    /// assert_eq!(Anchor::of("src/lib.rs"), Anchor::ProjectRoot);
    /// ```
    #[must_use]
    pub fn of(raw: &str) -> Self {
        if raw.chars().nth(1).is_none()
            || raw.starts_with('/')
            || raw.starts_with("./")
            || raw.starts_with("../")
            || raw.starts_with(TRUST_MARKER)
        {
            return Self::Unchanged;
        }
        if raw.starts_with("~/") {
            return Self::Home;
        }

        match raw.split('/').next() {
            Some("home") => return Self::FilesystemRoot,
            Some("www") => return Self::UnderHome,
            _ => {}
        }

        if !raw.contains('/') {
            Self::CurrentDir
        } else if raw.starts_with("a/") || raw.starts_with("b/") {
            Self::DiffMarker
        } else {
            Self::ProjectRoot
        }
    }
}

/// Expand a leading `~/` using `home`.
///
/// Text without a leading `~` is returned unchanged. The `~user` form is not
/// supported.
///
/// # Errors
///
/// Returns an error if the home directory is unknown or `~user` syntax is used.
///
/// # Examples
///
/// ```
/// use pathpick::path::normalize::expand_tilde;
/// use std::path::{Path, PathBuf};
///
/// let home = Path::new("/Users/u");
/// assert_eq!(
///     expand_tilde("~/foo/bar/x.py", Some(home)).unwrap(),
///     PathBuf::from("/Users/u/foo/bar/x.py")
/// );
/// ```
pub fn expand_tilde(raw: &str, home: Option<&Path>) -> Result<PathBuf> {
    if !raw.starts_with('~') {
        return Ok(PathBuf::from(raw));
    }

    let home = home.ok_or_else(|| Error::InvalidPath {
        path: PathBuf::from(raw),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if raw == "~" {
        Ok(home.to_path_buf())
    } else if let Some(rest) = raw.strip_prefix("~/") {
        Ok(home.join(rest))
    } else {
        Err(Error::InvalidPath {
            path: PathBuf::from(raw),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Maps extracted path text to a path that can be checked for existence.
///
/// # Examples
///
/// ```
/// use pathpick::path::{PathNormalizer, RootResolver};
/// use std::path::PathBuf;
///
/// let normalizer = PathNormalizer::new()
///     .with_root_resolver(RootResolver::pinned("/repo"))
///     .with_home_dir(Some(PathBuf::from("/Users/u")));
///
/// assert_eq!(normalizer.normalize("a/src/lib.rs").unwrap(), PathBuf::from("/repo/src/lib.rs"));
/// assert_eq!(normalizer.normalize("~/x.py").unwrap(), PathBuf::from("/Users/u/x.py"));
/// assert_eq!(normalizer.normalize("Makefile").unwrap(), PathBuf::from("./Makefile"));
/// ```
#[derive(Debug, Clone)]
pub struct PathNormalizer {
    root: RootResolver,
    home: Option<PathBuf>,
    working_dir: Option<PathBuf>,
}

impl Default for PathNormalizer {
    fn default() -> Self {
        Self {
            root: RootResolver::default(),
            home: home::home_dir(),
            working_dir: None,
        }
    }
}

impl PathNormalizer {
    /// Git/Mercurial root discovery and the current user's home directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the root discovery chain.
    #[must_use]
    pub fn with_root_resolver(mut self, root: RootResolver) -> Self {
        self.root = root;
        self
    }

    /// Override the home directory; `None` makes home-relative text fail to anchor.
    #[must_use]
    pub fn with_home_dir(mut self, home: Option<PathBuf>) -> Self {
        self.home = home;
        self
    }

    /// Directory root discovery starts from, instead of the process's.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// The root discovery chain.
    #[must_use]
    pub fn root_resolver(&self) -> &RootResolver {
        &self.root
    }

    /// The configured working directory, if any.
    #[must_use]
    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    /// Classifies `raw` without normalizing it.
    #[must_use]
    pub fn anchor(&self, raw: &str) -> Anchor {
        Anchor::of(raw)
    }

    /// Resolves the project root, trimmed.
    #[must_use]
    pub fn project_root(&self) -> PathBuf {
        self.root.resolve_path(self.working_dir.as_deref())
    }

    /// Normalizes `raw`, resolving the project root only if the text needs it.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is home-relative and the home directory is
    /// unknown.
    pub fn normalize(&self, raw: &str) -> Result<PathBuf> {
        self.normalize_with_root(raw, || self.project_root())
    }

    /// Normalizes `raw`, calling `root` at most once if the project root is needed.
    ///
    /// Lets a caller share one root lookup across many candidates.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is home-relative and the home directory is
    /// unknown.
    pub fn normalize_with_root<F>(&self, raw: &str, root: F) -> Result<PathBuf>
    where
        F: FnOnce() -> PathBuf,
    {
        let normalized = match Anchor::of(raw) {
            Anchor::Unchanged => PathBuf::from(raw),
            Anchor::Home => expand_tilde(raw, self.home.as_deref())?,
            Anchor::FilesystemRoot => Path::new("/").join(raw),
            Anchor::UnderHome => expand_tilde(&format!("~/{raw}"), self.home.as_deref())?,
            Anchor::CurrentDir => PathBuf::from(format!("./{raw}")),
            Anchor::DiffMarker => root().join(&raw[2..]),
            Anchor::ProjectRoot => root().join(raw),
        };

        log::trace!("normalized {raw:?} to {}", normalized.display());
        Ok(normalized)
    }
}
