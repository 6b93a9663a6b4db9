//! Scenario picker page.
//!
//! Lists the scenarios with their number key and shows the download button.
//! Returns the rectangles it drew so clicks can be mapped back.

use crate::tui::theme;
use crate::Scenario;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Label of the download button.
pub const DOWNLOAD_LABEL: &str = "[ Download ]";

/// Rectangles of the rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageAreas {
    /// Inside of the scenario list; row `i` is scenario `i`.
    pub list_inner: Rect,
    /// The whole download button, border included.
    pub download_button: Rect,
}

/// Renders the scenario list and the download button into `area`.
pub fn render_page(
    frame: &mut Frame,
    area: Rect,
    scenarios: &[Scenario],
    selected: Option<usize>,
) -> PageAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let list_block = Block::default()
        .borders(Borders::ALL)
        .title(" Demos ")
        .border_style(Style::default().fg(theme::MUTED));
    let list_inner = list_block.inner(chunks[0]);

    let lines: Vec<Line> = if scenarios.is_empty() {
        vec![Line::from(Span::styled(
            "No scenarios configured",
            Style::default().fg(theme::MUTED),
        ))]
    } else {
        scenarios
            .iter()
            .enumerate()
            .map(|(i, scenario)| scenario_line(i, scenario, selected == Some(i)))
            .collect()
    };
    frame.render_widget(Paragraph::new(lines).block(list_block), chunks[0]);

    let button = Paragraph::new(Line::from(vec![
        Span::styled(DOWNLOAD_LABEL, Style::default().fg(theme::ACCENT)),
        Span::styled("  (d)", Style::default().fg(theme::MUTED)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::MUTED)),
    );
    frame.render_widget(button, chunks[1]);

    PageAreas {
        list_inner,
        download_button: chunks[1],
    }
}

fn scenario_line(index: usize, scenario: &Scenario, is_selected: bool) -> Line<'static> {
    let key = if index < 9 {
        format!("{}.", index + 1)
    } else {
        "  ".to_string()
    };
    let text = format!(
        " {} {}  ({} steps)",
        key,
        scenario.title,
        scenario.steps.len()
    );
    if is_selected {
        Line::from(Span::styled(text, theme::selected()))
    } else {
        Line::from(text)
    }
}
