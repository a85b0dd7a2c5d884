//! Application logging to disk.
//!
//! The terminal is owned by the TUI, so log output never goes to stdout.
//! When enabled, `tracing` events are appended to `packlist.log` in the
//! configured log directory (default: `~/.local/share/packlist/logs/`).

use crate::config::model::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

/// Install the global tracing subscriber. No-op if logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let log_dir = expand_log_dir(&config.log_dir);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let path = log_dir.join("packlist.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    Ok(())
}

fn expand_log_dir(log_dir: &str) -> PathBuf {
    if log_dir.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(log_dir.trim_start_matches('~').trim_start_matches('/'));
        }
    }
    PathBuf::from(log_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_absolute_dir_unchanged() {
        assert_eq!(expand_log_dir("/var/log/packlist"), PathBuf::from("/var/log/packlist"));
    }

    #[test]
    fn test_expand_tilde_dir() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_log_dir("~/logs"), home.join("logs"));
        }
    }
}
