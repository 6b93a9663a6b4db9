//! Main rendering orchestration for the TUI.
//!
//! Composes the page (header, scenario list, footer), then the console
//! overlay and finally the toast stack on top of everything.

use crate::tui::app::App;
use crate::tui::theme;
use crate::tui::views::{console::render_console, page::render_page, toast::render_toasts};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tokio::time::Instant;

/// Header text displayed at the top of the page.
const HEADER_TEXT: &str = "Demo Console";

/// Footer text showing available keybindings.
const FOOTER_TEXT: &str = "[j/k] Select  [Enter/1-9] Run demo  [d] Download  [q] Quit";

/// Footer text while the console is open.
const CONSOLE_FOOTER_TEXT: &str = "[Esc] Close  [click outside] Close  [q] Quit";

/// Version string shown in the header (right-aligned).
const VERSION_TEXT: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Renders one frame.
///
/// Records the page and overlay rectangles on `app` for mouse hit-testing.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let now = Instant::now();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(3),    // page
            Constraint::Length(1), // footer
        ])
        .split(area);

    let header_width = chunks[0].width as usize;
    let padding_len = header_width
        .saturating_sub(HEADER_TEXT.len())
        .saturating_sub(VERSION_TEXT.len());
    let header = Paragraph::new(Line::from(vec![
        Span::styled(HEADER_TEXT, Style::default().fg(theme::ACCENT)),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(VERSION_TEXT, Style::default().fg(theme::MUTED)),
    ]));
    frame.render_widget(header, chunks[0]);

    app.page_areas = Some(render_page(
        frame,
        chunks[1],
        &app.scenarios,
        app.selected_index,
    ));

    let footer_text = if app.console.is_open() {
        CONSOLE_FOOTER_TEXT
    } else {
        FOOTER_TEXT
    };
    frame.render_widget(
        Paragraph::new(footer_text).style(Style::default().fg(theme::MUTED)),
        chunks[2],
    );

    let layout = app.console.session().and_then(|session| {
        render_console(frame, area, session, now, app.line_fade)
            .map_err(|e| tracing::debug!("console overlay skipped: {}", e))
            .ok()
    });
    app.console.set_layout(layout);

    render_toasts(frame, area, app.toasts.toasts());
}
