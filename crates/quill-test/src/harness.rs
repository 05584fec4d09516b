//! Test harness helpers.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// Create a temporary directory for testing.
///
/// # Panics
///
/// Panics if the temporary directory cannot be created.
#[must_use]
pub fn test_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Set up test logging with the given filter.
///
/// Safe to call from every test; only the first call installs a
/// subscriber.
pub fn setup_test_logging(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_test_writer()
        .try_init();
}

/// A home directory and a workspace directory for configuration tests.
#[derive(Debug)]
pub struct ConfigDirs {
    /// Stand-in for the user's home directory.
    pub home: TempDir,
    /// Stand-in for the workspace root.
    pub workspace: TempDir,
}

impl ConfigDirs {
    /// Create both directories, empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            home: test_dir(),
            workspace: test_dir(),
        }
    }

    /// Write the user configuration file.
    #[must_use]
    pub fn with_user_config(self, content: &str) -> Self {
        write_config(self.home.path(), content);
        self
    }

    /// Write the workspace configuration file.
    #[must_use]
    pub fn with_workspace_config(self, content: &str) -> Self {
        write_config(self.workspace.path(), content);
        self
    }

    /// Home directory path.
    #[must_use]
    pub fn home(&self) -> &Path {
        self.home.path()
    }

    /// Workspace root path.
    #[must_use]
    pub fn workspace(&self) -> &Path {
        self.workspace.path()
    }
}

impl Default for ConfigDirs {
    fn default() -> Self {
        Self::new()
    }
}

/// Write `{root}/.quill/config.toml`, creating the directory.
///
/// # Panics
///
/// Panics if the directory or file cannot be written.
pub fn write_config(root: &Path, content: &str) -> PathBuf {
    let dir = root.join(".quill");
    std::fs::create_dir_all(&dir).expect("Failed to create config directory");
    let path = dir.join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config file");
    path
}
