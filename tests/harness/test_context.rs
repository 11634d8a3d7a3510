//! Shared testing harness for `photo-prompt` integration tests.

use assert_cmd::Command;
use assert_fs::fixture::ChildPath;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary within the work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("photo-prompt").expect("Failed to locate binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.home()).env_remove("RUST_LOG");
        cmd
    }

    /// Write a file relative to the work directory and return its path.
    pub(crate) fn write_file(&self, relative: &str, content: &[u8]) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write `photo-prompt.toml` into the work directory.
    pub(crate) fn write_config(&self, content: &str) {
        self.write_file("photo-prompt.toml", content.as_bytes());
    }

    /// Handle to a path in the work directory for `assert_fs` path assertions.
    pub(crate) fn child(&self, relative: &str) -> ChildPath {
        ChildPath::new(self.work_dir.join(relative))
    }
}
