//! Property-based tests for the matcher.

use super::*;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn nested_path_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(segment_strategy(), 1..5),
        "[a-z]{1,8}",
        "[a-z]{1,4}",
    )
        .prop_map(|(dirs, stem, ext)| format!("{}/{stem}.{ext}", dirs.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Same inputs always yield the same ordered sequence
    #[test]
    fn matcher_is_deterministic(line in ".{0,120}", validate in any::<bool>(), whole in any::<bool>()) {
        prop_assert_eq!(
            matcher(&line, validate, whole),
            matcher(&line, validate, whole)
        );
    }

    // No candidate is ever empty or padded with whitespace
    #[test]
    fn candidates_are_trimmed_and_non_empty(line in ".{0,120}", validate in any::<bool>()) {
        for text in matcher(&line, validate, false) {
            prop_assert!(!text.is_empty());
            prop_assert_eq!(text.trim(), text.as_str());
        }
    }

    // Whole-line mode yields exactly the trimmed line, or nothing for blank input
    #[test]
    fn whole_line_mode_is_trimmed_line(line in "[ \\t]{0,4}[a-z ]{0,20}[ \\t]{0,4}") {
        let found = matcher(&line, false, true);
        let trimmed = line.trim();
        if trimmed.is_empty() {
            prop_assert!(found.is_empty());
        } else {
            prop_assert_eq!(found, vec![trimmed.to_string()]);
        }
    }

    // A nested path surrounded by prose is found first, line number included
    #[test]
    fn nested_path_is_first_candidate(path in nested_path_strategy(), line_no in 1u32..100_000) {
        let line = format!("error: {path}:{line_no}: something went wrong");
        let found = candidates(&line, MatchOptions::default());
        prop_assert!(!found.is_empty());
        prop_assert_eq!(&found[0].text, &path);
        prop_assert_eq!(found[0].line_number, Some(line_no));
    }

    // Validation only ever adds candidates, never removes them
    #[test]
    fn validation_is_a_superset(line in "[a-zA-Z0-9 ./~:_-]{0,60}") {
        let plain = matcher(&line, false, false);
        let validated = matcher(&line, true, false);
        for text in &plain {
            prop_assert!(validated.contains(text));
        }
    }
}
