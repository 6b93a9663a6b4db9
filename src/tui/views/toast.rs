//! Toast stack rendering.
//!
//! Toasts are anchored to the top-right corner. The toast in slot `i` is
//! drawn `i` toast-heights below the first one, so concurrent toasts never
//! overlap.

use crate::toast::Toast;
use crate::tui::theme;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Height of one toast, border included.
pub const TOAST_HEIGHT: u16 = 3;

/// Widest a toast gets, border included.
pub const TOAST_MAX_WIDTH: u16 = 52;

/// Gap between the toast stack and the frame edge.
const MARGIN: u16 = 1;

/// Rectangle for the toast in `slot` with a message `text_width` columns wide.
///
/// Returns `None` if the slot falls below the frame.
pub fn toast_area(area: Rect, slot: usize, text_width: usize) -> Option<Rect> {
    let width = (text_width as u16)
        .saturating_add(4)
        .min(TOAST_MAX_WIDTH)
        .min(area.width.saturating_sub(MARGIN));
    let y = u16::try_from(slot)
        .ok()
        .and_then(|s| s.checked_mul(TOAST_HEIGHT))
        .and_then(|offset| offset.checked_add(area.y + MARGIN))?;
    if width == 0 || y.saturating_add(TOAST_HEIGHT) > area.bottom() {
        return None;
    }
    let x = area.right().saturating_sub(width + MARGIN).max(area.x);
    Some(Rect::new(x, y, width, TOAST_HEIGHT))
}

/// Draws `toasts` in order, oldest on top.
pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &[Toast]) {
    for (slot, toast) in toasts.iter().enumerate() {
        let Some(rect) = toast_area(area, slot, toast.message.chars().count()) else {
            break;
        };
        let style = theme::toast(toast.severity, toast.phase);
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(format!(" {}", toast.message))
                .style(style)
                .block(Block::default().borders(Borders::ALL).style(style)),
            rect,
        );
    }
}
