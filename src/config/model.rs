//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Refresh interval for the render loop, in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Show key hints in the bottom status bar.
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            show_key_hints: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write application logs to disk. The list itself is never persisted.
    #[serde(default)]
    pub enabled: bool,
    /// Directory for the log file. `~` expands to the home directory.
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_true() -> bool {
    true
}

fn default_log_dir() -> String {
    "~/.local/share/packlist/logs".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui.tick_rate_ms, 50);
        assert!(config.ui.show_key_hints);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn test_partial_section_fills_missing_fields() {
        let config: AppConfig = toml::from_str("[ui]\ntick_rate_ms = 100\n").unwrap();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert!(config.ui.show_key_hints);
    }

    #[test]
    fn test_logging_section_round_trips() {
        let config = AppConfig {
            logging: LoggingConfig {
                enabled: true,
                log_dir: "/tmp/packlist".into(),
            },
            ..Default::default()
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert!(parsed.logging.enabled);
        assert_eq!(parsed.logging.log_dir, "/tmp/packlist");
    }
}
