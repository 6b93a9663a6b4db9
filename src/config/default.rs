//! Default configuration template and file creation.
//!
//! Provides a commented TOML template that matches `Config::default()` and a
//! function to write it to the config path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

// ---------------------------------------------------------------------------
// Default TOML template
// ---------------------------------------------------------------------------

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Demo Console Configuration
#
# This file was generated with default values.
# All values shown below are the built-in defaults.
#
# Location: $XDG_CONFIG_HOME/demo-console/config.toml

# ==============================================================================
# TUI
# ==============================================================================

[tui]

# How often the screen redraws while idle, as a human-readable duration.
# Lower values make line fades smoother at the cost of CPU.
# Examples: "50ms", "100ms", "250ms"
tick_rate = "100ms"

# ==============================================================================
# Timing
# ==============================================================================

[timing]

# Delay between opening a demo and its first line.
initial_delay = "500ms"

# Delay between consecutive lines.
step_interval = "800ms"

# Delay between the last line and the completion message.
completion_delay = "1s"

# Extra presentation delay per line index (line N waits N x this).
reveal_stagger = "100ms"

# How long a new line is drawn dimmed before it settles.
line_fade = "500ms"

# How long a notification stays on screen.
toast_duration = "4s"

# Length of a notification's exit fade before it is removed.
toast_exit = "300ms"

# ==============================================================================
# Logging
# ==============================================================================

[logging]

# Logging verbosity. Overridden by the DEMO_CONSOLE_LOG environment variable.
# Options: "error", "warn", "info", "debug", "trace"
level = "warn"

# Path to log file. Empty string means stderr for headless commands.
# The TUI only logs when a file is set.
# Tilde (~) is expanded to the user's home directory.
file = ""

# ==============================================================================
# Scenarios
# ==============================================================================
#
# Each [[scenarios]] entry is one demo. `id` is used on the command line
# (`demo-console play <id>`), `title` is shown in the console header and
# `steps` are revealed one by one. Listing any scenario here replaces the
# whole built-in set, so keep the ones you want.

[[scenarios]]
id = "interface"
title = "Main Interface"
steps = [
    "Loading main interface...",
    "Listing available macOS versions...",
    "macOS Sonoma 14.2.1 - Available",
    "macOS Ventura 13.6.3 - Available",
    "macOS Monterey 12.7.2 - Available",
    "Filters applied successfully",
    "Interface loaded - Ready to download!",
]

[[scenarios]]
id = "downloads"
title = "Download Manager"
steps = [
    "Starting macOS Sonoma download...",
    "Speed: 45.2 MB/s",
    "Progress: 15% (1.2 GB of 8.1 GB)",
    "Download paused by user",
    "Download resumed",
    "Verifying file integrity...",
    "SHA256 checksum verified successfully!",
    "Download complete!",
]

[[scenarios]]
id = "serial"
title = "Serial Generator"
steps = [
    "Starting serial generator...",
    "Email: demo@example.com",
    "Generating unique serial...",
    "Serial generated: A3F2-B8C1-9D4E-7F6A",
    "Validating serial...",
    "Serial is valid and unique",
    "Exporting to CSV...",
    "File saved: serials_demo.csv",
    "Licensing system active!",
]
"#;

// ---------------------------------------------------------------------------
// File creation
// ---------------------------------------------------------------------------

/// Writes the default template to `path`, or to the XDG config path.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
///
/// Returns the path where the config was written.
pub fn create_default_config(path: Option<&Path>, force: bool) -> Result<PathBuf, ConfigError> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(xdg::config_path);

    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists { path });
        }
        let backup_path = path.with_extension("toml.backup");
        fs::rename(&path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(&path)?;
    tracing::info!("Created default configuration at {}", path.display());
    Ok(path)
}

/// Writes the template to `path`, creating parent dirs and setting 0600 permissions.
fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        xdg::ensure_dir(parent).map_err(write_err)?;
    }
    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(write_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(write_err)?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
