//! Configuration error types for loading and validating TOML config files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading, validating or writing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read configuration file: {path}")]
    ReadError {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("Invalid configuration at {path}:{line}:{column}: {message}")]
    ParseError {
        /// Path to the file containing the error.
        path: PathBuf,
        /// One-based line index of the error (0 if unknown).
        line: usize,
        /// One-based column index of the error (0 if unknown).
        column: usize,
        /// Human-readable description of the parse failure.
        message: String,
    },

    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file not found: {path}")]
    NotFound {
        /// Path that was requested but does not exist.
        path: PathBuf,
    },

    /// A configuration file already exists at the target path.
    #[error("Configuration file already exists: {path}")]
    AlreadyExists {
        /// Path where the file already exists.
        path: PathBuf,
    },

    /// Failed to write a configuration file to disk.
    #[error("Failed to write configuration file: {path}")]
    WriteError {
        /// Path to the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A duration field does not hold a valid human-readable duration.
    #[error("Invalid duration for `{field}`: {value:?} ({message})")]
    InvalidDuration {
        /// Dotted field name, e.g. `timing.step_interval`.
        field: String,
        /// Value found in the file.
        value: String,
        /// Parser message.
        message: String,
    },

    /// No scenario with the requested id.
    #[error("Unknown scenario '{id}' (available: {available})")]
    UnknownScenario {
        /// Requested id.
        id: String,
        /// Comma-separated ids that do exist.
        available: String,
    },

    /// Two scenarios share an id.
    #[error("Duplicate scenario id '{id}'")]
    DuplicateScenario {
        /// The repeated id.
        id: String,
    },

    /// A scenario has an empty id.
    #[error("Scenario '{title}' has an empty id")]
    EmptyScenarioId {
        /// Title of the offending scenario.
        title: String,
    },
}
