//! Common test utilities for integration tests.
//!
//! Provides a throwaway project tree with a pinned root and home directory,
//! so pick results never depend on the machine running the tests.

use std::fs;
use std::path::{Path, PathBuf};

use pathpick::{PathPicker, RootResolver};
use tempfile::TempDir;

/// A temporary project laid out as `<tmp>/home` and `<tmp>/project`.
#[allow(dead_code)]
pub struct ProjectFixture {
    temp: TempDir,
    home: PathBuf,
    project: PathBuf,
}

#[allow(dead_code)]
impl ProjectFixture {
    /// Creates empty home and project directories.
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("failed to create temp dir");
        let home = temp.path().join("home");
        let project = temp.path().join("project");
        fs::create_dir_all(&home).expect("failed to create home");
        fs::create_dir_all(&project).expect("failed to create project");
        Self {
            temp,
            home,
            project,
        }
    }

    /// The fake home directory.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// The project root.
    pub fn project(&self) -> &Path {
        &self.project
    }

    /// The directory holding both.
    pub fn base(&self) -> &Path {
        self.temp.path()
    }

    /// Writes a file relative to the project root, creating parents.
    pub fn project_file(self, relative: &str) -> Self {
        write_file(&self.project.join(relative));
        self
    }

    /// Writes a file relative to the home directory, creating parents.
    pub fn home_file(self, relative: &str) -> Self {
        write_file(&self.home.join(relative));
        self
    }

    /// A picker rooted at the project, with the fake home, probing from `working_dir`.
    pub fn picker_in(&self, working_dir: &Path) -> PathPicker {
        PathPicker::new()
            .with_root_resolver(RootResolver::pinned(&self.project))
            .with_home_dir(Some(self.home.clone()))
            .with_working_dir(working_dir)
    }

    /// A picker probing from the project root.
    pub fn picker(&self) -> PathPicker {
        self.picker_in(&self.project)
    }
}

fn write_file(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create parent");
    }
    fs::write(path, "fixture\n").expect("failed to write file");
}
