//! Tests for the crate-level types.
//!
//! - `severity` - Severity default and display
//! - `scenario` - Scenario data and lookup
