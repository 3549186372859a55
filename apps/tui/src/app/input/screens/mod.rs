use crate::app::state::{App, InputState};
use crossterm::event::KeyCode;

mod budget;
mod help;
mod main;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_input(app, key) {
        return;
    }

    match app.input_state {
        InputState::EditingBudget => budget::handle_budget_input(app, key),
        InputState::Viewing => main::handle_main_input(app, key),
    }
}
