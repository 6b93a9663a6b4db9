//! Console overlay rendering.
//!
//! Dims the page behind the overlay, then draws the content box: a header
//! row with the session title and the `[x]` close control, and the console
//! body with every line visible so far. The newest lines stay in view.

use crate::console::{ConsoleLayout, ConsoleSession, LayoutError};
use crate::tui::theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Duration;
use tokio::time::Instant;

/// Text of the close control.
pub const CLOSE_LABEL: &str = "[x]";

/// Renders `session` over `area` and returns the layout used.
///
/// Fails without drawing anything when `area` is too small for the overlay.
pub fn render_console(
    frame: &mut Frame,
    area: Rect,
    session: &ConsoleSession,
    now: Instant,
    line_fade: Duration,
) -> Result<ConsoleLayout, LayoutError> {
    let layout = ConsoleLayout::compute(area)?;

    frame.buffer_mut().set_style(layout.overlay, theme::backdrop());
    frame.render_widget(Clear, layout.content);
    frame.render_widget(Block::default().style(theme::content()), layout.content);

    render_header(frame, &layout, &session.heading());

    let block = Block::default()
        .borders(Borders::ALL)
        .style(theme::console_body())
        .border_style(theme::console_body());
    let inner = block.inner(layout.body);
    frame.render_widget(block, layout.body);

    let visible: Vec<Line> = session
        .transcript
        .visible(now)
        .map(|line| {
            Line::from(Span::styled(
                line.prompt(),
                theme::console_line(line.kind, line.is_typing(now, line_fade)),
            ))
        })
        .collect();
    let skip = visible.len().saturating_sub(inner.height as usize);
    let lines: Vec<Line> = visible.into_iter().skip(skip).collect();
    frame.render_widget(Paragraph::new(lines), inner);

    Ok(layout)
}

fn render_header(frame: &mut Frame, layout: &ConsoleLayout, heading: &str) {
    let title_width = layout.header.width.saturating_sub(layout.close.width + 2) as usize;
    let title: String = heading.chars().take(title_width).collect();
    let header = Paragraph::new(Line::from(vec![Span::raw(" "), Span::raw(title)]))
        .style(theme::header());
    frame.render_widget(header, layout.header);
    frame.render_widget(
        Paragraph::new(CLOSE_LABEL).style(theme::close_control()),
        layout.close,
    );
}
