//! Shared test utilities for TUI testing with ratatui TestBackend.
//!
//! Provides helpers for creating test terminals, extracting buffer content
//! and asserting colors.

#![cfg(test)]

use crate::tui::app::App;
use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};

/// Creates a Terminal with TestBackend at the specified dimensions.
pub fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("failed to create test terminal")
}

/// Extracts all text from a specific row in the buffer as a single String.
pub fn row_text(buffer: &Buffer, row: u16) -> String {
    let area = buffer.area();
    if row >= area.height {
        return String::new();
    }
    (0..area.width)
        .map(|col| {
            buffer
                .cell((col, row))
                .map(|cell| cell.symbol())
                .unwrap_or(" ")
        })
        .collect()
}

/// Checks if a specific row contains the given substring.
pub fn row_contains(buffer: &Buffer, row: u16, text: &str) -> bool {
    row_text(buffer, row).contains(text)
}

/// Finds the first row index that contains the given text, or None if not found.
pub fn find_row_with_text(buffer: &Buffer, text: &str) -> Option<u16> {
    (0..buffer.area().height).find(|&row| row_contains(buffer, row, text))
}

/// Asserts that the cell at (col, row) has the specified foreground color.
pub fn assert_fg_color(buffer: &Buffer, col: u16, row: u16, color: Color) {
    let cell = buffer
        .cell((col, row))
        .unwrap_or_else(|| panic!("cell at ({}, {}) does not exist", col, row));
    assert_eq!(
        cell.fg, color,
        "expected fg color {:?} at ({}, {}), got {:?}",
        color, col, row, cell.fg
    );
}

/// Asserts that the cell at (col, row) has the specified background color.
pub fn assert_bg_color(buffer: &Buffer, col: u16, row: u16, color: Color) {
    let cell = buffer
        .cell((col, row))
        .unwrap_or_else(|| panic!("cell at ({}, {}) does not exist", col, row));
    assert_eq!(
        cell.bg, color,
        "expected bg color {:?} at ({}, {}), got {:?}",
        color, col, row, cell.bg
    );
}

/// Finds `text` in `row` and checks the foreground color of its first cell.
///
/// Column lookup is by byte offset, so `text` and everything before it on
/// the row must be ASCII.
pub fn assert_text_fg_in_row(buffer: &Buffer, row: u16, text: &str, color: Color) {
    let row_string = row_text(buffer, row);
    let col = row_string
        .find(text)
        .unwrap_or_else(|| panic!("text '{}' not found in row {}: '{}'", text, row, row_string));
    assert_fg_color(buffer, col as u16, row, color);
}

/// Finds `text` in `row` and checks the background color of its first cell.
pub fn assert_text_bg_in_row(buffer: &Buffer, row: u16, text: &str, color: Color) {
    let row_string = row_text(buffer, row);
    let col = row_string
        .find(text)
        .unwrap_or_else(|| panic!("text '{}' not found in row {}: '{}'", text, row, row_string));
    assert_bg_color(buffer, col as u16, row, color);
}

/// Renders the full UI to a buffer and returns the buffer for inspection.
pub fn render_app_to_buffer(app: &mut App, width: u16, height: u16) -> Buffer {
    let mut terminal = test_terminal(width, height);
    terminal
        .draw(|frame| crate::tui::ui::render(frame, app))
        .expect("draw failed");
    terminal.backend().buffer().clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_row_text_extracts_row_content() {
        let mut terminal = test_terminal(20, 5);
        terminal
            .draw(|frame| frame.render_widget(Paragraph::new("Hello World"), frame.area()))
            .expect("draw failed");
        assert!(row_text(terminal.backend().buffer(), 0).contains("Hello World"));
        assert_eq!(row_text(terminal.backend().buffer(), 9), "");
    }

    #[test]
    fn test_find_row_with_text_returns_row_index() {
        let mut terminal = test_terminal(40, 10);
        terminal
            .draw(|frame| {
                frame.render_widget(Paragraph::new("First Line\nTarget Row"), frame.area())
            })
            .expect("draw failed");
        let buffer = terminal.backend().buffer();
        assert_eq!(find_row_with_text(buffer, "Target Row"), Some(1));
        assert_eq!(find_row_with_text(buffer, "Missing"), None);
    }
}
