//! Integration tests for picking paths against real directory trees.
//!
//! Every test builds its own project under a temporary directory, pins the
//! project root there and points the home directory at a sibling, so no test
//! depends on the checkout it runs in.

mod common;

use std::fs;

use common::ProjectFixture;
use pathpick::{extract_path, PickOptions, RuleKind};

fn validated() -> PickOptions {
    PickOptions::default()
}

fn strict() -> PickOptions {
    PickOptions {
        resolve_with_fallback: false,
        ..PickOptions::default()
    }
}

#[test]
fn test_diff_marker_resolves_against_root() {
    let fixture = ProjectFixture::new().project_file("src/lib.rs");
    let picker = fixture.picker();

    assert_eq!(
        picker.pick_path("--- a/src/lib.rs", &strict()).unwrap(),
        Some("a/src/lib.rs".to_string())
    );
    assert_eq!(
        picker.pick_path("+++ b/src/lib.rs", &strict()).unwrap(),
        Some("b/src/lib.rs".to_string())
    );
    assert_eq!(picker.pick_path("+++ b/src/gone.rs", &strict()).unwrap(), None);
}

#[test]
fn test_home_relative_paths() {
    let fixture = ProjectFixture::new()
        .home_file("notes/todo.txt")
        .home_file("www/index.html");
    let picker = fixture.picker();

    let picked = picker
        .pick("see ~/notes/todo.txt:4", &strict())
        .unwrap()
        .unwrap();
    assert_eq!(picked.path, "~/notes/todo.txt");
    assert_eq!(picked.line_number, Some(4));
    assert_eq!(picked.rule, Some(RuleKind::HomeDir));

    assert_eq!(
        picker.pick_path("www/index.html", &strict()).unwrap(),
        Some("www/index.html".to_string())
    );
}

#[test]
fn test_bare_files_checked_in_working_directory() {
    let fixture = ProjectFixture::new()
        .project_file("Cargo.toml")
        .project_file("Gemfile");
    let picker = fixture.picker();

    assert_eq!(
        picker.pick_path("Cargo.toml", &strict()).unwrap(),
        Some("Cargo.toml".to_string())
    );
    assert_eq!(
        picker.pick_path("Gemfile", &strict()).unwrap(),
        Some("Gemfile".to_string())
    );
    assert_eq!(
        picker.pick_path("Gemfilenope", &strict()).unwrap(),
        Some("Gemfile".to_string())
    );
}

#[test]
fn test_working_directory_fallback_for_project_paths() {
    let fixture = ProjectFixture::new();
    let sub = fixture.base().join("elsewhere");
    fs::create_dir_all(sub.join("lib")).unwrap();
    fs::write(sub.join("lib/util.py"), "").unwrap();

    let picker = fixture.picker_in(&sub);
    assert_eq!(
        picker.pick_path("modified: lib/util.py", &strict()).unwrap(),
        Some("lib/util.py".to_string())
    );

    // Same line from the project root finds nothing
    assert_eq!(
        fixture
            .picker()
            .pick_path("modified: lib/util.py", &strict())
            .unwrap(),
        None
    );
}

#[test]
fn test_file_with_spaces() {
    let fixture = ProjectFixture::new().project_file("inputs/evilFile With Space.txt");
    assert_eq!(
        fixture
            .picker()
            .pick_path("M    ./inputs/evilFile With Space.txt", &strict())
            .unwrap(),
        Some("./inputs/evilFile With Space.txt".to_string())
    );
}

#[test]
fn test_earlier_missing_candidates_are_skipped() {
    let fixture = ProjectFixture::new().project_file("src/main.rs");
    let picked = fixture
        .picker()
        .pick("see docs/missing.md then src/main.rs:7", &strict())
        .unwrap()
        .unwrap();
    assert_eq!(picked.path, "src/main.rs");
    assert_eq!(picked.line_number, Some(7));
    assert_eq!(picked.rule, Some(RuleKind::ResultPath));
}

#[test]
fn test_earlier_existing_candidate_wins() {
    let fixture = ProjectFixture::new()
        .project_file("docs/missing.md")
        .project_file("src/main.rs");
    assert_eq!(
        fixture
            .picker()
            .pick_path("see docs/missing.md then src/main.rs:7", &strict())
            .unwrap(),
        Some("docs/missing.md".to_string())
    );
}

#[test]
fn test_absolute_path() {
    let fixture = ProjectFixture::new().project_file("src/abs.rs");
    let absolute = fixture.project().join("src/abs.rs");
    let line = format!("error at {}:12", absolute.display());

    let picked = fixture.picker().pick(&line, &strict()).unwrap().unwrap();
    assert_eq!(picked.path, absolute.display().to_string());
    assert_eq!(picked.line_number, Some(12));
}

#[test]
fn test_trust_marker_needs_no_file() {
    let fixture = ProjectFixture::new();
    assert_eq!(
        fixture
            .picker()
            .pick_path("M diff .../foo/bar", &validated())
            .unwrap(),
        Some(".../foo/bar".to_string())
    );
}

#[test]
fn test_unvalidated_behaviour() {
    let fixture = ProjectFixture::new();
    let picker = fixture.picker();
    let options = PickOptions::unvalidated();

    assert_eq!(
        picker.pick_path(" M whatever ./foo/bar", &options).unwrap(),
        Some("./foo/bar".to_string())
    );
    assert_eq!(
        picker.pick_path("SO.MANY&&PERIODSTXT", &options).unwrap(),
        Some("SO.MANY&&PERIODSTXT".to_string())
    );
    let no_fallback = PickOptions {
        resolve_with_fallback: false,
        ..options
    };
    assert_eq!(
        picker.pick_path("SO.MANY&&PERIODSTXT", &no_fallback).unwrap(),
        None
    );
}

#[test]
fn test_validated_missing_file_finds_nothing() {
    let fixture = ProjectFixture::new();
    let picker = fixture.picker();
    assert_eq!(picker.pick_path(" M whatever ./foo/bar", &strict()).unwrap(), None);
    assert_eq!(
        picker.pick_path(" M whatever ./foo/bar", &validated()).unwrap(),
        None
    );
}

#[test]
fn test_fallback_line_is_probed() {
    let fixture = ProjectFixture::new().project_file("LICENSE");
    let picker = fixture.picker();

    let picked = picker.pick("  LICENSE ", &validated()).unwrap().unwrap();
    assert_eq!(picked.path, "LICENSE");
    assert_eq!(picked.rule, None);

    assert_eq!(picker.pick("LICENSE", &strict()).unwrap(), None);
}

#[test]
fn test_whole_line_mode() {
    let fixture = ProjectFixture::new().project_file("notes with spaces.md");
    let options = PickOptions {
        whole_line: true,
        ..strict()
    };
    let picked = fixture
        .picker()
        .pick("   notes with spaces.md   ", &options)
        .unwrap()
        .unwrap();
    assert_eq!(picked.path, "notes with spaces.md");
    assert_eq!(picked.rule, Some(RuleKind::WholeLine));
}

#[test]
fn test_resolve_with_input() {
    let fixture = ProjectFixture::new().project_file("src/main.rs");
    let options = PickOptions {
        resolve_with_input: true,
        ..strict()
    };
    let picker = fixture.picker();

    let picked = picker
        .pick("  error: src/main.rs:3: boom ", &options)
        .unwrap()
        .unwrap();
    assert_eq!(picked.path, "error: src/main.rs:3: boom");
    assert_eq!(picked.line_number, Some(3));

    assert_eq!(picker.pick("error: src/other.rs:3", &options).unwrap(), None);
}

#[test]
fn test_invalid_utf8_is_the_only_error() {
    let fixture = ProjectFixture::new();
    let err = fixture
        .picker()
        .pick(b"\xc3\x28 src/main.rs", &validated())
        .unwrap_err();
    assert!(err.is_invalid_argument());

    let err = extract_path(b"\xff".as_slice(), &PickOptions::unvalidated()).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_pick_many_matches_individual_picks() {
    let fixture = ProjectFixture::new()
        .project_file("src/main.rs")
        .project_file("Makefile");
    let picker = fixture.picker();
    let lines = vec![
        "src/main.rs:1".to_string(),
        "nothing here at all".to_string(),
        "Makefile".to_string(),
        "+++ b/src/main.rs".to_string(),
    ];

    let batch: Vec<Option<String>> = picker
        .pick_many(&lines, &strict())
        .into_iter()
        .map(|result| result.unwrap().map(|picked| picked.path))
        .collect();
    let single: Vec<Option<String>> = lines
        .iter()
        .map(|line| picker.pick_path(line, &strict()).unwrap())
        .collect();

    assert_eq!(batch, single);
    assert_eq!(
        batch,
        vec![
            Some("src/main.rs".to_string()),
            None,
            Some("Makefile".to_string()),
            Some("b/src/main.rs".to_string()),
        ]
    );
}

#[test]
fn test_extract_path_unvalidated_is_deterministic() {
    let options = PickOptions::unvalidated();
    for line in ["src/lib.rs:1", "Gemfile", "   ", "nothing"] {
        assert_eq!(
            extract_path(line, &options).unwrap(),
            extract_path(line, &options).unwrap()
        );
    }
}
