#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;

/// Scratch home for one CLI test: a config path that does not exist yet and
/// a preference file next to it.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("preferences.json")
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.config_path(), contents).expect("write config");
    }

    pub fn write_store(&self, contents: &str) {
        std::fs::write(self.store_path(), contents).expect("write store");
    }

    pub fn read_store(&self) -> serde_json::Value {
        let raw = std::fs::read_to_string(self.store_path()).expect("read store");
        serde_json::from_str(&raw).expect("store is JSON")
    }

    /// Command with config and store pinned inside the sandbox.
    pub fn cmd(&self) -> Command {
        let mut cmd = traderisk();
        cmd.current_dir(self.path())
            .arg("--color")
            .arg("never")
            .arg("--config")
            .arg(self.config_path())
            .arg("--store")
            .arg(self.store_path());
        cmd
    }
}

/// Bare command with the environment scrubbed of overrides.
pub fn traderisk() -> Command {
    let mut cmd = cargo_bin_cmd!("traderisk");
    cmd.env_remove("TRADERISK_STORE").env_remove("RUST_LOG");
    cmd
}

/// Run with `--json` and parse stdout.
pub fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.arg("--json").output().expect("run traderisk");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is one JSON document")
}
