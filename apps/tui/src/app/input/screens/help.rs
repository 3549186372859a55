use crate::app::state::{App, InputState};
use crossterm::event::KeyCode;

const fn opens_help(key: KeyCode) -> bool {
    matches!(key, KeyCode::F(1) | KeyCode::Char('?'))
}

const fn closes_help(key: KeyCode) -> bool {
    matches!(
        key,
        KeyCode::Esc | KeyCode::Enter | KeyCode::F(1) | KeyCode::Char('?')
    )
}

/// Owns the keyboard while the help popup is up. Returns true when the key
/// was consumed here.
pub fn handle_help_input(app: &mut App, key: KeyCode) -> bool {
    if app.show_help {
        if closes_help(key) {
            app.show_help = false;
        }
        return true;
    }

    // The budget editor keeps its keys; help only opens from the radar view
    if app.input_state == InputState::Viewing && opens_help(key) {
        app.show_help = true;
        return true;
    }

    false
}
