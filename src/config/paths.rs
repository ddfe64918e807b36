//! Path resolution for stint configuration and data files.
//!
//! All stint data is stored in `~/.stint/` (or `$STINT_HOME`):
//! - `config.yaml` - Main configuration file
//! - `stint.db` - `SQLite` database holding the session history
//! - `stint.log` - Log output while the terminal UI is open

use std::path::PathBuf;

use crate::error::StintError;

/// Environment variable that overrides the data directory.
pub const HOME_ENV: &str = "STINT_HOME";

/// Paths to stint configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.stint/`
    pub root: PathBuf,
    /// Config file: `~/.stint/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.stint/stint.db`
    pub database: PathBuf,
    /// Log file: `~/.stint/stint.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on `$STINT_HOME` or the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if neither `STINT_HOME` nor `HOME` is set.
    pub fn new() -> Result<Self, StintError> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME").map_err(|_| {
            StintError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".stint")))
    }

    /// Use `root` if given, otherwise the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the home directory
    /// cannot be determined.
    pub fn resolve(root: Option<PathBuf>) -> Result<Self, StintError> {
        root.map_or_else(Self::new, |root| Ok(Self::with_root(root)))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("stint.db"),
            log_file: root.join("stint.log"),
            root,
        }
    }

    /// Ensure the data directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), StintError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                StintError::Config(format!(
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
        let root = PathBuf::from("/tmp/test-stint");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.database, root.join("stint.db"));
        assert_eq!(paths.log_file, root.join("stint.log"));
    }

    #[test]
    fn test_resolve_prefers_override() {
        let root = PathBuf::from("/tmp/elsewhere");
        let paths = Paths::resolve(Some(root.clone())).unwrap();
        assert_eq!(paths.root, root);
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join("stint"));

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
    }
}
