pub(crate) use super::*;
pub(crate) use crate::config::Config;
pub(crate) use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};


pub(crate) fn make_app() -> App {
    App::new(&Config::default()).expect("default config is valid")
}

pub(crate) fn make_app_with_scenarios(scenarios: Vec<Scenario>) -> App {
    let config = Config {
        scenarios,
        ..Config::default()
    };
    App::new(&config).expect("config is valid")
}

pub(crate) fn make_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub(crate) fn click(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

pub(crate) fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}
