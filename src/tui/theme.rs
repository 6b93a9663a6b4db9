//! Static presentation rules, keyed by variant.
//!
//! Every style the overlay and the toasts use lives here; renderers never
//! build ad-hoc styles for them.

use crate::scheduler::LineKind;
use crate::toast::ToastPhase;
use crate::Severity;
use ratatui::style::{Color, Modifier, Style};

/// Console text.
pub const CONSOLE_FG: Color = Color::Rgb(0, 255, 0);
/// Console body background.
pub const CONSOLE_BG: Color = Color::Black;
/// Completion line text.
pub const COMPLETION_FG: Color = Color::Rgb(255, 255, 0);
/// Content box background.
pub const CONTENT_BG: Color = Color::Rgb(30, 30, 30);
/// Header row background.
pub const HEADER_BG: Color = Color::Rgb(45, 45, 45);

/// Page title and accents.
pub const ACCENT: Color = Color::Cyan;
/// Secondary text.
pub const MUTED: Color = Color::DarkGray;

/// Background and foreground of a toast for `severity`.
pub const fn toast_colors(severity: Severity) -> (Color, Color) {
    match severity {
        Severity::Success => (Color::Rgb(40, 167, 69), Color::White),
        Severity::Info => (Color::Rgb(0, 122, 255), Color::White),
        Severity::Warning => (Color::Rgb(255, 193, 7), Color::Black),
        Severity::Error => (Color::Rgb(220, 53, 69), Color::White),
    }
}

/// Toast style; exiting toasts are dimmed.
pub fn toast(severity: Severity, phase: ToastPhase) -> Style {
    let (bg, fg) = toast_colors(severity);
    let style = Style::default().bg(bg).fg(fg);
    match phase {
        ToastPhase::Visible => style,
        ToastPhase::Exiting => style.add_modifier(Modifier::DIM),
    }
}

/// Applied over the page while the overlay is open.
pub fn backdrop() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

/// Content box behind header and body.
pub fn content() -> Style {
    Style::default().bg(CONTENT_BG)
}

/// Header row.
pub fn header() -> Style {
    Style::default()
        .bg(HEADER_BG)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// The `[x]` close control.
pub fn close_control() -> Style {
    Style::default().bg(HEADER_BG).fg(Color::White)
}

/// Console body and its border.
pub fn console_body() -> Style {
    Style::default().bg(CONSOLE_BG).fg(CONSOLE_FG)
}

/// A revealed console line. `typing` is true during its fade-in window.
pub fn console_line(kind: LineKind, typing: bool) -> Style {
    let style = match kind {
        LineKind::Step => Style::default().fg(CONSOLE_FG),
        LineKind::Completed => Style::default()
            .fg(COMPLETION_FG)
            .add_modifier(Modifier::BOLD),
    };
    if typing {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

/// Selected row on the scenario page.
pub fn selected() -> Style {
    Style::default().fg(Color::Black).bg(ACCENT)
}
