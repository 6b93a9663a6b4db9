//! TUI module for the demo console.
//!
//! Provides a terminal user interface built on ratatui and crossterm: a
//! scenario picker page, the console overlay and the toast stack.

pub mod app;
pub mod event;
pub mod theme;
pub mod ui;
pub mod views;

#[cfg(test)]
pub(crate) mod test_utils;
