//! Anchoring candidate path text on the filesystem.
//!
//! Two pieces cooperate here:
//!
//! - [`root`] finds the project root by asking each version-control probe in
//!   turn, falling back to `./`.
//! - [`normalize`] turns raw path text into something that can be checked for
//!   existence, consulting the root only when the text is project-relative.
//!
//! # Examples
//!
//! ```
//! use pathpick::path::{PathNormalizer, RootResolver};
//! use std::path::PathBuf;
//!
//! let normalizer = PathNormalizer::new().with_root_resolver(RootResolver::pinned("/repo"));
//! assert_eq!(normalizer.normalize("src/lib.rs").unwrap(), PathBuf::from("/repo/src/lib.rs"));
//! assert_eq!(normalizer.normalize("/etc/hosts").unwrap(), PathBuf::from("/etc/hosts"));
//! ```

pub mod normalize;
pub mod root;

pub use normalize::{expand_tilde, Anchor, PathNormalizer, TRUST_MARKER};
pub use root::{
    CommandRootProbe, FixedRootProbe, GitRootProbe, RootProbe, RootResolver, VcsKind,
    DEFAULT_ROOT,
};

#[cfg(all(test, feature = "property-tests"))]
mod proptests;
