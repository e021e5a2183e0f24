//! Tracing subscriber setup
//!
//! `RUST_LOG` wins when set; otherwise the configured filter applies.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context};
use tracing_subscriber::{fmt, EnvFilter};

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Append to a file (used while the TUI owns the terminal)
    File(PathBuf),
}

/// Build the filter from `RUST_LOG`, falling back to `default_filter`
pub fn build_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber
pub fn init_logging(default_filter: &str, target: LogTarget) -> anyhow::Result<()> {
    let filter = build_filter(default_filter);

    match target {
        LogTarget::Stderr => fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .map_err(|e| anyhow!("failed to install logger: {}", e)),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("opening log file {}", path.display()))?;

            fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow!("failed to install logger: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_falls_back() {
        std::env::remove_var("RUST_LOG");
        let filter = build_filter("expense_dash=loud");
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn test_configured_filter() {
        std::env::remove_var("RUST_LOG");
        let filter = build_filter("expense_dash=debug");
        assert_eq!(filter.to_string(), "expense_dash=debug");
    }
}
