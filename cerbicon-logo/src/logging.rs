use std::path::PathBuf;

use color_eyre::Report;
use directories::ProjectDirs;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    Layer, filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

const LOG_FILE_PREFIX: &str = "cerbicon-logo.log";

/// Configuration for the logging system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level for file output
    pub file_level: Level,
    /// Log level for console output
    pub console_level: Level,
    /// Directory where log files should be written; `None` disables file logging
    pub log_dir: Option<PathBuf>,
    /// Whether to write file logs as JSON
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file_level: Level::DEBUG,
            console_level: Level::WARN,
            log_dir: Some(Self::default_log_dir()),
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Get the OS-appropriate default log directory
    pub fn default_log_dir() -> PathBuf {
        // ~/.cache/cerbicon on Linux, ~/Library/Caches/cerbicon on macOS
        ProjectDirs::from("", "", "cerbicon")
            .map(|dirs| dirs.cache_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("cerbicon-logs"))
    }

    /// Create logging configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create logging configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let level = |key: &str| lookup(key).and_then(|v| v.parse::<Level>().ok());

        if let Some(parsed_level) = level("CERBICON_LOG_LEVEL") {
            config.file_level = parsed_level;
            config.console_level = parsed_level;
        }

        if let Some(parsed_level) = level("CERBICON_FILE_LOG_LEVEL") {
            config.file_level = parsed_level;
        }

        if let Some(parsed_level) = level("CERBICON_CONSOLE_LOG_LEVEL") {
            config.console_level = parsed_level;
        }

        if let Some(log_dir) = lookup("CERBICON_LOG_DIR") {
            config.log_dir = Some(PathBuf::from(log_dir));
        }

        if lookup("CERBICON_NO_FILE_LOGS").is_some() {
            config.log_dir = None;
        }

        if lookup("CERBICON_JSON_LOGS").is_some() {
            config.json_format = true;
        }

        config
    }
}

/// Initialize the logging system with the given configuration.
///
/// The returned guard flushes the file appender when dropped and must be
/// held until the program exits.
pub fn init_logging(config: LoggingConfig) -> Result<Option<WorkerGuard>, Report> {
    let mut layers = vec![];
    let mut guard = None;

    if let Some(log_dir) = &config.log_dir {
        std::fs::create_dir_all(log_dir)?;

        let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
        let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);
        guard = Some(file_guard);

        let file_filter = EnvFilter::builder()
            .with_default_directive(config.file_level.into())
            .from_env_lossy();

        let file_layer = if config.json_format {
            fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_filter(file_filter)
                .boxed()
        } else {
            fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_filter(file_filter)
                .boxed()
        };

        layers.push(file_layer);
    }

    let console_filter = EnvFilter::builder()
        .with_default_directive(config.console_level.into())
        .from_env_lossy();

    // stdout carries the preview and the report
    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(console_filter)
        .boxed();

    layers.push(console_layer);

    tracing_subscriber::registry().with(layers).try_init()?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> LoggingConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        LoggingConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_variables() {
        assert_eq!(config_from(&[]), LoggingConfig::default());
    }

    #[test]
    fn test_specific_levels_override_global() {
        let config = config_from(&[
            ("CERBICON_LOG_LEVEL", "info"),
            ("CERBICON_CONSOLE_LOG_LEVEL", "error"),
        ]);

        assert_eq!(config.file_level, Level::INFO);
        assert_eq!(config.console_level, Level::ERROR);
    }

    #[test]
    fn test_invalid_level_is_ignored() {
        let config = config_from(&[("CERBICON_LOG_LEVEL", "loud")]);
        assert_eq!(config.file_level, Level::DEBUG);
        assert_eq!(config.console_level, Level::WARN);
    }

    #[test]
    fn test_file_logging_switches() {
        let config = config_from(&[("CERBICON_LOG_DIR", "/tmp/cerbicon-logs")]);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/cerbicon-logs")));

        let config = config_from(&[
            ("CERBICON_LOG_DIR", "/tmp/cerbicon-logs"),
            ("CERBICON_NO_FILE_LOGS", "1"),
            ("CERBICON_JSON_LOGS", "1"),
        ]);
        assert_eq!(config.log_dir, None);
        assert!(config.json_format);
    }
}
