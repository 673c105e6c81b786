//! Isolated environment for CLI integration tests.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary data directory plus helpers to place catalog/config files.
///
/// # Example
/// ```no_run
/// use cinelane_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let catalog = world.write_catalog("mine.toml", cinelane_testing::fixtures::SAMPLE_CATALOG_TOML);
/// assert!(catalog.exists());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".cinelane");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self { temp_dir, data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a catalog file next to the data directory and return its path.
    pub fn write_catalog(&self, file_name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(file_name);
        std::fs::write(&path, content).expect("Failed to write catalog");
        path
    }

    /// Write `<data-dir>/config.toml`.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.data_dir.join("config.toml");
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Point a CLI command at this environment.
    ///
    /// The caller provides the base command (e.g. `cargo_bin_cmd!("cinelane")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .current_dir(self.temp_dir.path())
            .env_remove("CINELANE_PATH")
            .env_remove("RUST_LOG")
    }
}
