//! Property-based tests for path normalization.

use super::normalize::{Anchor, PathNormalizer};
use super::root::RootResolver;
use proptest::prelude::*;
use std::path::PathBuf;

const ROOT: &str = "/srv/project";
const HOME: &str = "/home/tester";

fn normalizer() -> PathNormalizer {
    PathNormalizer::new()
        .with_root_resolver(RootResolver::pinned(ROOT))
        .with_home_dir(Some(PathBuf::from(HOME)))
}

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}(\\.[a-z]{1,4})?"
}

fn relative_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..6).prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Explicitly anchored text is passed through untouched
    #[test]
    fn explicit_prefixes_pass_through(
        prefix in prop::sample::select(vec!["/", "./", "../", ".../"]),
        rest in relative_strategy(),
    ) {
        let raw = format!("{prefix}{rest}");
        prop_assert_eq!(Anchor::of(&raw), Anchor::Unchanged);
        prop_assert_eq!(normalizer().normalize(&raw).unwrap(), PathBuf::from(&raw));
    }

    // Anything anchored to the project root ends up below it
    #[test]
    fn root_anchored_text_lands_under_root(rest in relative_strategy()) {
        let normalized = normalizer().normalize(&rest).unwrap();
        match Anchor::of(&rest) {
            Anchor::ProjectRoot | Anchor::DiffMarker => {
                prop_assert!(normalized.starts_with(ROOT));
            }
            Anchor::CurrentDir => {
                prop_assert_eq!(normalized, PathBuf::from(format!("./{rest}")));
            }
            Anchor::FilesystemRoot => prop_assert!(normalized.starts_with("/home")),
            Anchor::UnderHome => prop_assert!(normalized.starts_with(HOME)),
            Anchor::Unchanged | Anchor::Home => {
                prop_assert_eq!(normalized, PathBuf::from(&rest));
            }
        }
    }

    // Home-relative text always expands below the home directory
    #[test]
    fn tilde_expands_under_home(rest in relative_strategy()) {
        let raw = format!("~/{rest}");
        let normalized = normalizer().normalize(&raw).unwrap();
        prop_assert_eq!(normalized, PathBuf::from(HOME).join(&rest));
    }

    // Diff markers are stripped before joining
    #[test]
    fn diff_marker_is_stripped(
        side in prop::sample::select(vec!["a/", "b/"]),
        rest in relative_strategy(),
    ) {
        let raw = format!("{side}{rest}");
        prop_assert_eq!(
            normalizer().normalize(&raw).unwrap(),
            PathBuf::from(ROOT).join(&rest)
        );
    }
}
