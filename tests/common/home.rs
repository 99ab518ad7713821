//! Temporary `$HOME` for running the binaries without touching the real one.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub struct TestHome {
    dir: TempDir,
}

impl TestHome {
    /// A home directory with an existing `Documents` folder.
    pub fn new() -> Self {
        let home = Self::without_documents();
        fs::create_dir(home.documents()).expect("Failed to create Documents");
        home
    }

    pub fn without_documents() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(dir.path().join("data")).expect("Failed to create data dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn documents(&self) -> PathBuf {
        self.path().join("Documents")
    }

    pub fn sample_file(&self) -> PathBuf {
        self.documents().join("python_sample.txt")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.path().join("data")
    }

    pub fn write_config(&self, contents: &str) {
        fs::write(self.data_dir().join("config.toml"), contents).expect("Failed to write config");
    }

    /// Command for `bin` with `HOME` and the data dir pointed here and the
    /// default-application launch turned off.
    pub fn command(&self, bin: &str) -> Command {
        let mut cmd = Command::cargo_bin(bin).expect("binary not built");
        cmd.env("HOME", self.path())
            .env("VARO_FIXTURES_HOME", self.data_dir())
            .env("VARO_FIXTURES_NO_OPEN", "1")
            .env_remove("VARO_FIXTURES_OUTPUT_DIR")
            .env_remove("RUST_LOG");
        cmd
    }
}
