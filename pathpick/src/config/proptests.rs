//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::Config;
use crate::path::VcsKind;
use proptest::prelude::*;
use std::path::PathBuf;

fn vcs_strategy() -> impl Strategy<Value = Vec<VcsKind>> {
    prop::sample::subsequence(vec![VcsKind::Git, VcsKind::Hg], 0..=2)
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of("/[a-z]{1,10}(/[a-z]{1,10}){0,3}"),
        prop::option::of(vcs_strategy()),
        prop::option::of(1u64..60_000),
    )
        .prop_map(
            |(validate, whole_line, fallback, with_input, root, vcs, timeout)| Config {
                validate_existence: validate,
                whole_line,
                resolve_with_fallback: fallback,
                resolve_with_input: with_input,
                root: root.map(PathBuf::from),
                vcs,
                root_timeout_ms: timeout,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Set fields of the higher layer always win, unset ones keep the lower value
    #[test]
    fn merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.validate_existence, high.validate_existence.or(low.validate_existence));
        prop_assert_eq!(merged.whole_line, high.whole_line.or(low.whole_line));
        prop_assert_eq!(merged.resolve_with_fallback, high.resolve_with_fallback.or(low.resolve_with_fallback));
        prop_assert_eq!(merged.resolve_with_input, high.resolve_with_input.or(low.resolve_with_input));
        prop_assert_eq!(merged.root, high.root.clone().or(low.root.clone()));
        prop_assert_eq!(merged.vcs, high.vcs.clone().or(low.vcs.clone()));
        prop_assert_eq!(merged.root_timeout_ms, high.root_timeout_ms.or(low.root_timeout_ms));
    }

    // Merging a config into itself changes nothing
    #[test]
    fn merge_is_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // Generated configs survive a YAML round trip through the schema
    #[test]
    fn yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
