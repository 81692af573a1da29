//! Shared logging setup for the Intake binary.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_LOG_FILTER: &str = "intake=info,intake_db=info";
const MAX_LOG_FILES: usize = 5;

/// Environment variable that relocates the Intake home directory.
pub const HOME_ENV: &str = "INTAKE_HOME";

/// Logging configuration for one process.
pub struct LogConfig<'a> {
    pub app_name: &'a str,
    pub verbose: bool,
    /// Full-screen mode: keep the console quiet so the terminal UI is not
    /// overwritten.
    pub tui_mode: bool,
}

/// Initialize tracing with a daily rolling file writer and stderr output.
pub fn init_logging(config: LogConfig<'_>) -> Result<()> {
    let log_dir = ensure_logs_dir().context("Failed to ensure log directory")?;
    let file_writer = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(sanitize_name(config.app_name))
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(&log_dir)
        .with_context(|| format!("Failed to open log file in {}", log_dir.display()))?;

    let file_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let console_filter = if config.verbose {
        file_filter.clone()
    } else if config.tui_mode {
        EnvFilter::new("error")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_filter(file_filter),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(console_filter),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Get the Intake home directory: `$INTAKE_HOME` or `~/.intake`.
pub fn intake_home() -> PathBuf {
    resolve_home(std::env::var_os(HOME_ENV).map(PathBuf::from), dirs::home_dir())
}

fn resolve_home(override_path: Option<PathBuf>, user_home: Option<PathBuf>) -> PathBuf {
    if let Some(path) = override_path {
        return path;
    }
    user_home
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".intake")
}

/// Get the logs directory: `<home>/logs`
pub fn logs_dir() -> PathBuf {
    intake_home().join("logs")
}

/// Ensure the logs directory exists.
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = logs_dir();
    fs::create_dir_all(&logs)
        .with_context(|| format!("Failed to create logs directory: {}", logs.display()))?;
    Ok(logs)
}

fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|ch| if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' { ch } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let home = resolve_home(Some(PathBuf::from("/tmp/custom")), Some(PathBuf::from("/home/u")));
        assert_eq!(home, PathBuf::from("/tmp/custom"));
    }

    #[test]
    fn test_default_home_under_user_dir() {
        let home = resolve_home(None, Some(PathBuf::from("/home/u")));
        assert_eq!(home, PathBuf::from("/home/u/.intake"));
    }

    #[test]
    fn test_missing_user_dir_falls_back_to_cwd() {
        let home = resolve_home(None, None);
        assert_eq!(home, PathBuf::from("./.intake"));
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("intake"), "intake");
        assert_eq!(sanitize_name("intake form/v1"), "intake_form_v1");
    }
}
