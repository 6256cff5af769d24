//! Shared testing utilities for mmpgen CLI tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::{ChildPath, PathChild};
use std::fs;
use std::path::Path;

/// Testing harness providing an isolated destination directory for CLI
/// exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with an existing `out/` destination.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        fs::create_dir_all(root.path().join("out")).expect("Failed to create destination");
        Self { root }
    }

    /// Destination directory passed to the CLI.
    pub fn dest(&self) -> ChildPath {
        self.root.child("out")
    }

    /// A path inside the temp root that does not exist.
    pub fn missing_dest(&self) -> ChildPath {
        self.root.child("absent")
    }

    /// Build a command for invoking the compiled `mmpgen` binary.
    pub fn cli(&self) -> Command {
        Command::cargo_bin("mmpgen").expect("Failed to locate mmpgen binary")
    }

    /// Write a UID list file under the temp root and return its path.
    pub fn write_uid_file(&self, name: &str, content: &str) -> ChildPath {
        let child = self.root.child(name);
        fs::write(child.path(), content).expect("Failed to write UID file");
        child
    }

    /// Read a generated file from the destination directory.
    pub fn read_generated(&self, name: &str) -> String {
        let path = self.dest().path().join(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Assert the full file-group for a variant index exists.
    pub fn assert_variant_exists(&self, index: usize) {
        for name in [
            format!("ScummVM{index}.rss"),
            format!("ScummVM{index}_loc.rss"),
            format!("ScummVM{index}_reg.rss"),
            format!("ScummVM{index}.mmp"),
        ] {
            assert!(
                self.dest().path().join(&name).exists(),
                "{} should exist in {}",
                name,
                self.dest().path().display()
            );
        }
    }

    /// Number of files in the destination directory.
    pub fn dest_file_count(&self) -> usize {
        count_entries(self.dest().path())
    }
}

fn count_entries(dir: &Path) -> usize {
    fs::read_dir(dir).expect("Failed to read destination directory").count()
}
