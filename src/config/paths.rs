//! Path management for expense-dash
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_DASH_HOME` environment variable (if set)
//! 2. The platform config directory reported by the `directories` crate
//!    (`~/.config/expense-dash` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{DashError, DashResult};

/// Environment variable overriding the base directory
pub const HOME_ENV: &str = "EXPENSE_DASH_HOME";

/// Manages all paths used by expense-dash
#[derive(Debug, Clone)]
pub struct DashPaths {
    base_dir: PathBuf,
}

impl DashPaths {
    /// Resolve the base directory from the environment or the platform
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> DashResult<Self> {
        let base_dir = match std::env::var_os(HOME_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "expense-dash")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| DashError::Config("Could not determine home directory".into()))?,
        };

        Ok(Self { base_dir })
    }

    /// Create DashPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Log file used while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("expense-dash.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> DashResult<()> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DashError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if settings have been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DashPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.log_file(), temp_dir.path().join("expense-dash.log"));
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        env::set_var(HOME_ENV, temp_dir.path());
        let paths = DashPaths::new().unwrap();
        env::remove_var(HOME_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let paths = DashPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();
        assert!(nested.is_dir());
    }
}
