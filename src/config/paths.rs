//! Path resolution for chatterbox configuration and data files.
//!
//! All chatterbox data is stored in `~/.chatterbox/` (or `$CHATTERBOX_HOME`):
//! - `config.yaml` - Main configuration file
//! - `tasks.txt` - Task list, one task per line
//! - `tags.yaml` - Tag associations
//! - `history.txt` - Console input history

use std::path::PathBuf;

use crate::error::ChatterboxError;

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "CHATTERBOX_HOME";

/// Paths to chatterbox configuration and data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Root directory: `~/.chatterbox/`
    pub root: PathBuf,
    /// Config file: `~/.chatterbox/config.yaml`
    pub config_file: PathBuf,
    /// Task file: `~/.chatterbox/tasks.txt`
    pub task_file: PathBuf,
    /// Tag file: `~/.chatterbox/tags.yaml`
    pub tag_file: PathBuf,
    /// Console history: `~/.chatterbox/history.txt`
    pub history_file: PathBuf,
}

impl Paths {
    /// Create paths based on `$CHATTERBOX_HOME`, else the user's home
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if neither variable is set.
    pub fn new() -> Result<Self, ChatterboxError> {
        if let Ok(root) = std::env::var(HOME_ENV) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME").map_err(|_| {
            ChatterboxError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".chatterbox")))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            task_file: root.join("tasks.txt"),
            tag_file: root.join("tags.yaml"),
            history_file: root.join("history.txt"),
            root,
        }
    }

    /// Point the data files at other names under the root.
    #[must_use]
    pub fn with_data_files(mut self, task_file: &str, tag_file: &str) -> Self {
        self.task_file = self.root.join(task_file);
        self.tag_file = self.root.join(tag_file);
        self
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), ChatterboxError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                ChatterboxError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-chatterbox");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.task_file, root.join("tasks.txt"));
        assert_eq!(paths.tag_file, root.join("tags.yaml"));
        assert_eq!(paths.history_file, root.join("history.txt"));
    }

    #[test]
    fn test_with_data_files() {
        let root = PathBuf::from("/tmp/test-chatterbox");
        let paths = Paths::with_root(root.clone()).with_data_files("duke.txt", "labels.yaml");

        assert_eq!(paths.task_file, root.join("duke.txt"));
        assert_eq!(paths.tag_file, root.join("labels.yaml"));
        assert_eq!(paths.config_file, root.join("config.yaml"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested"));

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
    }
}
