//! Common test utilities for CLI integration tests.
//!
//! Every command runs with `HOME` pointed at a temporary home directory,
//! the project root pinned through `PATHPICK_ROOT`, and the project as its
//! current directory, so results never depend on the machine's own checkout.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PATHPICK_VARS: [&str; 9] = [
    "PATHPICK_CONFIG",
    "PATHPICK_LOG_MODE",
    "PATHPICK_VALIDATE",
    "PATHPICK_WHOLE_LINE",
    "PATHPICK_FALLBACK",
    "PATHPICK_WITH_INPUT",
    "PATHPICK_ROOT",
    "PATHPICK_ROOT_TIMEOUT_MS",
    "PATHPICK_VCS",
];

/// Test environment with an isolated home and project directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Fake home directory
    pub home: PathBuf,
    /// Project root
    pub project: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with empty home and project directories.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let home = temp_dir.path().join("home");
        let project = temp_dir.path().join("project");
        fs::create_dir_all(&home).expect("Failed to create home");
        fs::create_dir_all(&project).expect("Failed to create project");

        Self {
            temp_dir,
            home,
            project,
        }
    }

    /// Get a bare command builder: isolated home, no `PATHPICK_*` variables.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathpick").expect("Failed to find pathpick binary");
        for var in PATHPICK_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", &self.home).current_dir(&self.project);
        cmd
    }

    /// Get a command builder with the project root pinned.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.env("PATHPICK_ROOT", &self.project);
        cmd
    }

    /// The directory holding home and project.
    pub fn base(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a file relative to the project root, including parent directories.
    pub fn project_file(&self, relative: &str) -> PathBuf {
        let path = self.project.join(relative);
        write_file(&path);
        path
    }

    /// Create a file relative to the home directory, including parent directories.
    pub fn home_file(&self, relative: &str) -> PathBuf {
        let path = self.home.join(relative);
        write_file(&path);
        path
    }

    /// Write a configuration file under the base directory and return its path.
    pub fn config_file(&self, contents: &str) -> PathBuf {
        let path = self.base().join("pathpick.yaml");
        fs::write(&path, contents).expect("Failed to write config");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(path, "fixture\n").expect("Failed to write file");
}
