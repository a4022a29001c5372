//! Runs the rule cascade against one line of text.
//!
//! The matcher is a pure function of its inputs: no I/O and no shared
//! mutable state, so it can be called from any number of threads at once.

use regex::Captures;
use serde::Serialize;

use crate::pattern::{rules, Pattern, Rule, RuleKind};

/// A path-like substring found by one rule.
///
/// Several candidates for the same line may carry equal text; they are kept
/// in cascade order and never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// The captured path text, trimmed of surrounding whitespace.
    pub text: String,
    /// Line number following the path (`path:12` or `path-12`), if captured.
    pub line_number: Option<u32>,
    /// The rule that produced this candidate.
    pub rule: RuleKind,
}

/// Modes for one matcher call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Enable the loose rules that are only useful when every candidate is
    /// later checked against the filesystem.
    pub validate_existence: bool,
    /// Treat the whole trimmed line as the only candidate.
    pub whole_line: bool,
}

/// Returns every candidate for `line`, in cascade order.
///
/// Each candidate is capture group 1 of its rule's match, trimmed of
/// surrounding whitespace; empty captures are dropped.
///
/// # Examples
///
/// ```
/// use pathpick::matcher::{candidates, MatchOptions};
///
/// let found = candidates("src/main.rs:42:5: error", MatchOptions::default());
/// assert_eq!(found[0].text, "src/main.rs");
/// assert_eq!(found[0].line_number, Some(42));
/// ```
#[must_use]
pub fn candidates(line: &str, options: MatchOptions) -> Vec<Candidate> {
    rules()
        .iter()
        .filter(|rule| rule.is_eligible(options.validate_existence, options.whole_line))
        .filter_map(|rule| apply(rule, line))
        .collect()
}

/// Returns the text of every candidate for `line`, in cascade order.
///
/// # Examples
///
/// ```
/// use pathpick::matcher::matcher;
///
/// assert_eq!(matcher("   a", false, true), vec!["a".to_string()]);
/// assert!(matcher("    ", false, true).is_empty());
/// ```
#[must_use]
pub fn matcher(line: &str, validate_existence: bool, whole_line: bool) -> Vec<String> {
    let options = MatchOptions {
        validate_existence,
        whole_line,
    };
    candidates(line, options)
        .into_iter()
        .map(|candidate| candidate.text)
        .collect()
}

fn apply(rule: &Rule, line: &str) -> Option<Candidate> {
    let primary = rule.pattern().regex().captures(line)?;

    let (captures, pattern) = match rule
        .preferred()
        .and_then(|alternate| alternate.regex().captures(line).map(|c| (c, alternate)))
    {
        Some((alternate, pattern)) if match_start(&alternate) < match_start(&primary) => {
            (alternate, pattern)
        }
        _ => (primary, rule.pattern()),
    };

    let text = captures.get(1)?.as_str().trim();
    if text.is_empty() {
        return None;
    }

    Some(Candidate {
        text: text.to_string(),
        line_number: line_number(&captures, pattern),
        rule: rule.kind(),
    })
}

fn match_start(captures: &Captures<'_>) -> usize {
    captures.get(0).map_or(0, |m| m.start())
}

fn line_number(captures: &Captures<'_>, pattern: &Pattern) -> Option<u32> {
    let group = pattern.line_group()?;
    captures.get(group)?.as_str().parse().ok()
}

#[cfg(all(test, feature = "property-tests"))]
mod proptests;
