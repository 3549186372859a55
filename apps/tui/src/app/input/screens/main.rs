use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_main_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(' ' | 'p') => app.toggle_play(),
        KeyCode::Char('r') => app.reset_map(),
        KeyCode::Char('b') => app.begin_budget_edit(),
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(-1.0, 0.0),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(1.0, 0.0),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(0.0, -1.0),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(0.0, 1.0),
        KeyCode::Tab => app.focus_next_visible(),
        KeyCode::Char('q') => {
            app.running = false;
        }
        _ => {}
    }
}
