//! Logging initialization.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `DEMO_CONSOLE_LOG` environment variable, falling back to the configured
//! `[logging] level`.
//!
//! ```bash
//! DEMO_CONSOLE_LOG=debug demo-console play serial
//! DEMO_CONSOLE_LOG=demo_console::console=trace,warn demo-console tui
//! ```
//!
//! Headless commands log to stderr unless a file is configured. The TUI owns
//! the terminal, so it only logs when a file is configured.

use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::schema::LoggingConfig;
use crate::config::xdg;

/// Environment variable holding filter directives.
pub const LOG_ENV_VAR: &str = "DEMO_CONSOLE_LOG";

/// Which front end is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// Line-oriented commands; stderr is free.
    Headless,
    /// Full-screen UI; stderr would corrupt the display.
    Tui,
}

/// Builds the filter from `DEMO_CONSOLE_LOG`, else the configured level.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(config.level.as_str()))
}

/// Initialize the tracing subscriber.
///
/// Returns an error only if the configured log file cannot be opened. A
/// subscriber that is already installed is left in place.
pub fn init(config: &LoggingConfig, mode: LogMode) -> std::io::Result<()> {
    let filter = build_filter(config);

    let result = if !config.file.is_empty() {
        let path = xdg::expand_tilde(&config.file);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
    } else if mode == LogMode::Headless {
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
    } else {
        return Ok(());
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}
