// App module for ufo_radar
// Holds the radar session and the terminal-side state around it

pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{App, InputState};
