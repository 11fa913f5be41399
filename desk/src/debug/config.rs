//! Logging configuration from environment variables

use std::path::PathBuf;

pub const DEFAULT_LOG_LEVEL: &str = "freight_desk=info,warn";
pub const LOG_FILE_NAME: &str = "freight-desk.log";

/// Log line format of the file layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Debug system configuration
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log level filter (e.g., "freight_desk=debug,info")
    pub log_level: String,
    pub log_format: LogFormat,
    /// Enable the in-window debug overlay
    pub show_debug_ui: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: default_level().to_string(),
            log_format: LogFormat::Text,
            show_debug_ui: cfg!(feature = "debug-mode"),
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            log_dir: std::env::var("FREIGHT_DESK_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: std::env::var("FREIGHT_DESK_LOG_FORMAT")
                .map(|v| parse_format(&v))
                .unwrap_or(defaults.log_format),
            show_debug_ui: std::env::var("FREIGHT_DESK_DEBUG_UI")
                .map(|v| v == "1")
                .unwrap_or(defaults.show_debug_ui),
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

fn default_level() -> &'static str {
    if cfg!(feature = "debug-mode") {
        "freight_desk=debug,info"
    } else {
        DEFAULT_LOG_LEVEL
    }
}

fn parse_format(value: &str) -> LogFormat {
    if value.trim().eq_ignore_ascii_case("json") {
        LogFormat::Json
    } else {
        LogFormat::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_in_log_dir() {
        let config = DebugConfig {
            log_dir: PathBuf::from("/tmp/desk-logs"),
            ..DebugConfig::default()
        };
        assert_eq!(config.log_file(), PathBuf::from("/tmp/desk-logs/freight-desk.log"));
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(parse_format("JSON"), LogFormat::Json);
        assert_eq!(parse_format("text"), LogFormat::Text);
        assert_eq!(parse_format("whatever"), LogFormat::Text);
    }
}
