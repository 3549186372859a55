use crate::app::state::App;
use crossterm::event::KeyCode;

const MAX_BUDGET_DIGITS: usize = 9;

pub fn handle_budget_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.cancel_budget_edit(),
        KeyCode::Enter => app.apply_budget_input(),
        KeyCode::Backspace => {
            app.budget_input.pop();
        }
        KeyCode::Char(ch) if ch.is_ascii_digit() || ch == '-' => {
            if app.budget_input.len() < MAX_BUDGET_DIGITS {
                app.budget_input.push(ch);
            }
        }
        _ => {}
    }
}
