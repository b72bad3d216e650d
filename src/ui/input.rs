//! Keyboard handling for both screens.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::api::TodoApi;
use crate::ui::app::App;

pub fn handle_key<A: TodoApi>(app: &mut App<A>, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Esc | KeyCode::Backspace => app.back(),
        KeyCode::Char('r') => app.retry(),
        _ => {}
    }
}
