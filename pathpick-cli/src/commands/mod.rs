//! CLI command implementations.
//!
//! - `pick`: pick one path per input line
//! - `candidates`: list the rule cascade's candidates for a line
//! - `normalize`: show a path's anchored form
//! - `root`: print the project root
//! - `completions`: generate shell completion scripts

pub mod candidates;
pub mod completions;
pub mod normalize;
pub mod pick;
pub mod root;

pub use candidates::CandidatesCommand;
pub use completions::CompletionsCommand;
pub use normalize::NormalizeCommand;
pub use pick::PickCommand;
pub use root::RootCommand;
