//! TOML configuration schema types for the demo console.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so a partial file fills in everything it omits.
//!
//! Duration fields use human-readable strings (e.g. `"500ms"`, `"4s"`) parsed
//! by the `humantime` crate through the accessor methods below.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

use crate::config::error::ConfigError;
use crate::config::{parse_duration, parse_nonzero_duration};
use crate::scheduler::StepTiming;
use crate::toast::ToastTiming;
use crate::{builtin_scenarios, find_scenario, Scenario};

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration encompassing all sections.
///
/// ```toml
/// [tui]
/// [timing]
/// [logging]
/// [[scenarios]]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Terminal UI settings.
    pub tui: TuiConfig,
    /// Console and toast timing.
    pub timing: TimingConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
    /// Scenarios offered by the picker and the `play` command. A file that
    /// lists any scenarios replaces the built-in set.
    pub scenarios: Vec<Scenario>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tui: TuiConfig::default(),
            timing: TimingConfig::default(),
            logging: LoggingConfig::default(),
            scenarios: builtin_scenarios(),
        }
    }
}

impl Config {
    /// Checks that every duration parses and is in range, and that scenario
    /// ids are present and unique.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tui.tick_rate()?;
        self.timing.step_timing()?;
        self.timing.toast_timing()?;
        self.timing.line_fade()?;

        let mut seen = HashSet::new();
        for scenario in &self.scenarios {
            if scenario.id.trim().is_empty() {
                return Err(ConfigError::EmptyScenarioId {
                    title: scenario.title.clone(),
                });
            }
            if !seen.insert(scenario.id.to_lowercase()) {
                return Err(ConfigError::DuplicateScenario {
                    id: scenario.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Looks up a scenario by id.
    pub fn scenario(&self, id: &str) -> Result<&Scenario, ConfigError> {
        find_scenario(&self.scenarios, id).ok_or_else(|| ConfigError::UnknownScenario {
            id: id.to_string(),
            available: self
                .scenarios
                .iter()
                .map(|s| s.id.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

// ---------------------------------------------------------------------------
// TUI
// ---------------------------------------------------------------------------

/// Terminal UI configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TuiConfig {
    /// Render tick rate as a human-readable duration (e.g. `"100ms"`).
    pub tick_rate: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate: "100ms".to_string(),
        }
    }
}

impl TuiConfig {
    /// Parsed tick rate. Must be non-zero.
    pub fn tick_rate(&self) -> Result<Duration, ConfigError> {
        parse_nonzero_duration("tui.tick_rate", &self.tick_rate)
    }
}

// ---------------------------------------------------------------------------
// Timing
// ---------------------------------------------------------------------------

/// Console and toast timing from the `[timing]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay before the first console line.
    pub initial_delay: String,
    /// Delay between console lines.
    pub step_interval: String,
    /// Delay between the last line and the completion line.
    pub completion_delay: String,
    /// Extra presentation delay per line index.
    pub reveal_stagger: String,
    /// How long a new line is drawn in the "typing" style.
    pub line_fade: String,
    /// How long a toast stays visible.
    pub toast_duration: String,
    /// Length of a toast's exit transition.
    pub toast_exit: String,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            initial_delay: "500ms".to_string(),
            step_interval: "800ms".to_string(),
            completion_delay: "1s".to_string(),
            reveal_stagger: "100ms".to_string(),
            line_fade: "500ms".to_string(),
            toast_duration: "4s".to_string(),
            toast_exit: "300ms".to_string(),
        }
    }
}

impl TimingConfig {
    /// Scheduler timing.
    pub fn step_timing(&self) -> Result<StepTiming, ConfigError> {
        Ok(StepTiming {
            initial_delay: parse_duration("timing.initial_delay", &self.initial_delay)?,
            step_interval: parse_duration("timing.step_interval", &self.step_interval)?,
            completion_delay: parse_duration("timing.completion_delay", &self.completion_delay)?,
            reveal_stagger: parse_duration("timing.reveal_stagger", &self.reveal_stagger)?,
        })
    }

    /// Toast lifetimes.
    pub fn toast_timing(&self) -> Result<ToastTiming, ConfigError> {
        Ok(ToastTiming {
            duration: parse_duration("timing.toast_duration", &self.toast_duration)?,
            exit: parse_duration("timing.toast_exit", &self.toast_exit)?,
        })
    }

    /// Typing-style window for freshly revealed lines.
    pub fn line_fade(&self) -> Result<Duration, ConfigError> {
        parse_duration("timing.line_fade", &self.line_fade)
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Log output from the `[logging]` section.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Logging verbosity, used when `DEMO_CONSOLE_LOG` is not set.
    pub level: LogLevel,
    /// Path to log file. Empty string means stderr for headless commands and
    /// no logging for the TUI.
    pub file: String,
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings (default).
    #[default]
    Warn,
    /// Informational messages.
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// Filter directive for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
