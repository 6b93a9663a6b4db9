/// Default configuration template and file creation.
pub mod default;

/// Configuration error types.
pub mod error;

/// Configuration file loader.
pub mod loader;

/// TOML configuration schema types.
pub mod schema;

/// XDG Base Directory path resolution utilities.
pub mod xdg;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::{Config, LogLevel, LoggingConfig, TimingConfig, TuiConfig};

use std::time::Duration;

/// Largest duration accepted for any timing field.
pub const MAX_DURATION: Duration = Duration::from_secs(60 * 60);

/// Parses a human-readable duration (`"500ms"`, `"4s"`) from config field
/// `field`. Values above [`MAX_DURATION`] are rejected.
pub(crate) fn parse_duration(field: &str, value: &str) -> Result<Duration, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidDuration {
        field: field.to_string(),
        value: value.to_string(),
        message,
    };
    let duration = humantime::parse_duration(value).map_err(|e| invalid(e.to_string()))?;
    if duration > MAX_DURATION {
        return Err(invalid(format!(
            "must be at most {}",
            humantime::format_duration(MAX_DURATION)
        )));
    }
    Ok(duration)
}

/// Like [`parse_duration`], but zero is rejected too.
pub(crate) fn parse_nonzero_duration(field: &str, value: &str) -> Result<Duration, ConfigError> {
    let duration = parse_duration(field, value)?;
    if duration.is_zero() {
        return Err(ConfigError::InvalidDuration {
            field: field.to_string(),
            value: value.to_string(),
            message: "must be non-zero".to_string(),
        });
    }
    Ok(duration)
}

/// Test helper: runs `f` with env vars temporarily set, then restores them.
///
/// Callers must be `#[serial]`.
#[cfg(test)]
pub(crate) fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
    let originals: Vec<_> = vars
        .iter()
        .map(|(k, _)| (*k, std::env::var(k).ok()))
        .collect();

    for (k, v) in vars {
        match v {
            Some(val) => std::env::set_var(k, val),
            None => std::env::remove_var(k),
        }
    }

    f();

    for (k, original) in &originals {
        match original {
            Some(val) => std::env::set_var(k, val),
            None => std::env::remove_var(k),
        }
    }
}
