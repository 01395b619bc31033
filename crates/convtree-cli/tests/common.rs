use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    /// Write an export file into the fixture directory.
    pub fn write_export(&self, name: &str, json: &serde_json::Value) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, serde_json::to_string_pretty(json).unwrap())
            .expect("failed to write export file");
        path
    }

    /// Write raw (possibly malformed) file content.
    pub fn write_raw(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("failed to write export file");
        path
    }

    pub fn command(&self) -> Command {
        Command::cargo_bin("convtree").expect("binary should build")
    }
}
