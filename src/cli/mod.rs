//! Command-line surface: argument parsing, export and completions.

pub mod args;
pub mod completions;
pub mod export;

use crate::commands::CommandExecutor;
use crate::config::{Config, Paths};
use crate::error::Result;
use crate::session::Session;
use crate::storage::FileStore;

/// Everything resolved from the command line before a session opens.
#[derive(Debug, Clone)]
pub struct Environment {
    pub paths: Paths,
    pub config: Config,
}

impl Environment {
    /// Resolve paths and load configuration for `cli`.
    ///
    /// `--data-dir` wins over the default location. `--config` wins over
    /// `config.yaml` in the data directory. Data file names come from the
    /// loaded config.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory is unknown or the config file
    /// cannot be parsed.
    pub fn resolve(cli: &args::Cli) -> Result<Self> {
        let paths = match &cli.data_dir {
            Some(dir) => Paths::with_root(dir.clone()),
            None => Paths::new()?,
        };
        let config_file = cli.config.as_ref().unwrap_or(&paths.config_file);
        let config = Config::load_from_path(config_file)?;
        let paths = paths.with_data_files(&config.storage.task_file, &config.storage.tag_file);

        Ok(Self { paths, config })
    }

    /// Open a session over the configured data files.
    #[must_use]
    pub fn open_session(&self) -> Session<FileStore> {
        let executor = CommandExecutor::new(self.config.dates.parser());
        Session::open(FileStore::new(&self.paths), executor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_uses_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().to_str().unwrap();
        let cli = args::Cli::try_parse_from(["chatterbox", "--data-dir", dir]).unwrap();

        let env = Environment::resolve(&cli).unwrap();

        assert_eq!(env.paths.task_file, temp_dir.path().join("tasks.txt"));
        assert_eq!(env.config, Config::default());
    }

    #[test]
    fn test_resolve_applies_storage_names() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("custom.yaml");
        std::fs::write(&config_path, "storage:\n  task_file: duke.txt\n").unwrap();
        let cli = args::Cli::try_parse_from([
            "chatterbox",
            "--data-dir",
            temp_dir.path().to_str().unwrap(),
            "--config",
            config_path.to_str().unwrap(),
        ])
        .unwrap();

        let env = Environment::resolve(&cli).unwrap();

        assert_eq!(env.paths.task_file, temp_dir.path().join("duke.txt"));
        assert_eq!(env.paths.tag_file, temp_dir.path().join("tags.yaml"));
    }

    #[test]
    fn test_open_session_on_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        let env = Environment {
            paths: Paths::with_root(temp_dir.path().to_path_buf()),
            config: Config::default(),
        };

        let mut session = env.open_session();
        assert!(!session.has_tasks());
        session.respond("todo read book");
        assert!(temp_dir.path().join("tasks.txt").exists());
    }
}
