//! The ordered rule cascade used to spot path-like text.
//!
//! Rules are evaluated top to bottom by the matcher. Each rule is a regular
//! expression whose first capture group is the candidate path, plus flags
//! that decide when the rule takes part:
//!
//! - rules that need existence validation only run when the caller asked for
//!   candidates to be checked against the filesystem, because they are loose
//!   enough to produce noise otherwise;
//! - the whole-line rule runs only in whole-line mode, and is then the only
//!   rule that runs.
//!
//! A rule may also name a preferred alternate pattern. When both match and the
//! alternate starts earlier in the line, the alternate's capture replaces the
//! primary one for that rule.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Nested path with a short alphanumeric extension and optional line number.
const NESTED_PATH: &str =
    r"(/?([a-z.A-Z0-9\-_]+/)+[+@a-zA-Z0-9\-_+.]+\.[a-zA-Z0-9]{1,10})[-:]?(\d+)?";

/// Same as [`NESTED_PATH`] with a longer extension that may contain `-` and `~`.
const NESTED_PATH_LOOSE_EXTENSION: &str =
    r"(/?([a-z.A-Z0-9\-_]+/)+[+@a-zA-Z0-9\-_+.]+\.[a-zA-Z0-9\-~]{1,30})[-:]?(\d+)?";

const HOME_DIR_PATH: &str =
    r"(~/([a-z.A-Z0-9\-_]+/)+[@a-zA-Z0-9\-_+.]+\.[a-zA-Z0-9]{1,10})[-:]?(\d+)?";

/// `dir/.../name:line`, as printed by grep-like search tools. The line number is mandatory.
const RESULT_PATH: &str = r"(/?([a-z.A-Z0-9\-_]+/)+[a-zA-Z0-9_.]{3,})[-:]?(\d+)";

const SPACED_PATH: &str = r"((?:\.?/)?(([a-z.A-Z0-9\-_]|\s[a-zA-Z0-9\-_])+/)+([(),@a-zA-Z0-9\-_+.]|\s[,()@a-zA-Z0-9\-_+.])+\.[a-zA-Z0-9\-]{1,30})[-:]?(\d+)?";

const SPACED_OR_WEIRD_PATH: &str = r"((?:\.?/)?(([a-z.A-Z0-9\-_]|\s[a-zA-Z0-9\-_])+/)+((/?([a-z.A-Z0-9\-_]+/))?\.[a-zA-Z0-9\-_]{3,}[a-zA-Z0-9\-_/]*)|([a-z.A-Z0-9\-_/]+/[a-zA-Z0-9\-_]+)|([A-Z][a-zA-Z]{2,}file))";

const BARE_FILE: &str = r"([@+%a-z.A-Z0-9\-_]+\.[a-zA-Z]{1,10})(\s|$|:)+";

const BARE_FILE_WITH_SPACES: &str = r"([a-zA-Z][@+%a-z. A-Z0-9\-_]+\.[a-zA-Z]{1,10})(\s|$|:)+";

/// Dotfiles, `dir/name` without an extension, and `Makefile`-style names.
const NO_PERIODS: &str = r"(((/?([a-z.A-Z0-9\-_]+/))?\.[a-zA-Z0-9\-_]{3,}[a-zA-Z0-9\-_/]*)|([a-z.A-Z0-9\-_/]+/[a-zA-Z0-9\-_]+)|([A-Z][a-zA-Z]{2,}file))(\s|$|:)+";

const WHOLE_TRIMMED_LINE: &str = r"(\S.*\S|\S)";

/// Identifies a rule of the cascade.
///
/// Variants are listed in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    /// `~/dir/.../file.ext[:line]`
    HomeDir,
    /// `dir/.../file.ext[:line]`, preferring an earlier `dir/.../name:line`.
    NestedPath,
    /// `dir/.../name:line` with no extension restriction.
    ResultPath,
    /// Nested path with an extension of up to 30 characters.
    LooseExtension,
    /// Nested path whose segments may contain spaces, parentheses and commas.
    SpacedPath,
    /// Spaced path, or a dotfile, extensionless or `Xfile` name.
    SpacedOrWeirdPath,
    /// `file.ext` with no directory.
    BareFile,
    /// `some file.ext` with no directory.
    BareFileWithSpaces,
    /// Dotfiles, `dir/name` and `Xfile` names.
    NoPeriods,
    /// The entire trimmed line.
    WholeLine,
}

impl RuleKind {
    /// Stable kebab-case name, matching the serialized form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HomeDir => "home-dir",
            Self::NestedPath => "nested-path",
            Self::ResultPath => "result-path",
            Self::LooseExtension => "loose-extension",
            Self::SpacedPath => "spaced-path",
            Self::SpacedOrWeirdPath => "spaced-or-weird-path",
            Self::BareFile => "bare-file",
            Self::BareFileWithSpaces => "bare-file-with-spaces",
            Self::NoPeriods => "no-periods",
            Self::WholeLine => "whole-line",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A compiled regular expression and the capture group holding a line number.
///
/// The path itself is always capture group 1.
#[derive(Debug)]
pub struct Pattern {
    regex: Regex,
    line_group: Option<usize>,
}

impl Pattern {
    fn new(source: &str, line_group: Option<usize>) -> Self {
        Self {
            regex: Regex::new(source).expect("built-in path pattern is valid"),
            line_group,
        }
    }

    /// The compiled expression.
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Capture group holding the line number, if the pattern has one.
    #[must_use]
    pub fn line_group(&self) -> Option<usize> {
        self.line_group
    }
}

/// One step of the cascade.
#[derive(Debug)]
pub struct Rule {
    kind: RuleKind,
    pattern: Pattern,
    preferred: Option<Pattern>,
    requires_validation: bool,
    whole_line_only: bool,
}

impl Rule {
    fn new(kind: RuleKind, pattern: Pattern) -> Self {
        Self {
            kind,
            pattern,
            preferred: None,
            requires_validation: false,
            whole_line_only: false,
        }
    }

    fn preferring(mut self, alternate: Pattern) -> Self {
        self.preferred = Some(alternate);
        self
    }

    fn validated(mut self) -> Self {
        self.requires_validation = true;
        self
    }

    fn whole_line(mut self) -> Self {
        self.whole_line_only = true;
        self
    }

    /// Which rule this is.
    #[must_use]
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// The primary pattern.
    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The alternate that wins when it matches earlier in the line.
    #[must_use]
    pub fn preferred(&self) -> Option<&Pattern> {
        self.preferred.as_ref()
    }

    /// Whether the rule only runs when existence validation was requested.
    #[must_use]
    pub fn requires_validation(&self) -> bool {
        self.requires_validation
    }

    /// Whether the rule only runs in whole-line mode.
    #[must_use]
    pub fn whole_line_only(&self) -> bool {
        self.whole_line_only
    }

    /// Whether the rule takes part in a call with the given modes.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathpick::pattern::{rules, RuleKind};
    ///
    /// let whole = rules().iter().find(|r| r.kind() == RuleKind::WholeLine).unwrap();
    /// assert!(whole.is_eligible(false, true));
    /// assert!(!whole.is_eligible(false, false));
    /// ```
    #[must_use]
    pub fn is_eligible(&self, validate_existence: bool, whole_line: bool) -> bool {
        if self.whole_line_only != whole_line {
            return false;
        }
        !self.requires_validation || validate_existence
    }
}

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new(RuleKind::HomeDir, Pattern::new(HOME_DIR_PATH, Some(3))),
        Rule::new(RuleKind::NestedPath, Pattern::new(NESTED_PATH, Some(3)))
            .preferring(Pattern::new(RESULT_PATH, Some(3))),
        Rule::new(RuleKind::ResultPath, Pattern::new(RESULT_PATH, Some(3))),
        Rule::new(
            RuleKind::LooseExtension,
            Pattern::new(NESTED_PATH_LOOSE_EXTENSION, Some(3)),
        )
        .validated(),
        Rule::new(RuleKind::SpacedPath, Pattern::new(SPACED_PATH, Some(5))).validated(),
        Rule::new(
            RuleKind::SpacedOrWeirdPath,
            Pattern::new(SPACED_OR_WEIRD_PATH, None),
        )
        .validated(),
        Rule::new(RuleKind::BareFile, Pattern::new(BARE_FILE, None)),
        Rule::new(
            RuleKind::BareFileWithSpaces,
            Pattern::new(BARE_FILE_WITH_SPACES, None),
        )
        .validated(),
        Rule::new(RuleKind::NoPeriods, Pattern::new(NO_PERIODS, None)),
        Rule::new(RuleKind::WholeLine, Pattern::new(WHOLE_TRIMMED_LINE, None)).whole_line(),
    ]
});

/// The cascade, in evaluation order.
///
/// Compiled on first use and shared read-only for the life of the process.
#[must_use]
pub fn rules() -> &'static [Rule] {
    &RULES
}
