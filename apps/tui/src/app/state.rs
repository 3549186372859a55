use std::time::Instant;
use ufo_radar::config::RadarConfig;
use ufo_radar::radar::{FrameClock, RadarSession};
use ufo_radar::{Position, SightingDetails};

const CURSOR_STEP: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    Viewing,
    EditingBudget,
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub session: RadarSession,
    pub input_state: InputState,
    pub budget_input: String,
    pub status_message: String,
    pub show_help: bool,
    pub cursor: Position,
    pub focused_point: Option<usize>,
    pub hover_radius: f64,
    pub dataset_name: String,
    clock: FrameClock,
    started: Instant,
}

impl App {
    pub fn new(session: RadarSession, config: &RadarConfig) -> Self {
        let cursor = session.geometry().center;
        let dataset_name = config
            .dataset_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("dataset")
            .to_string();

        Self {
            running: true,
            session,
            input_state: InputState::Viewing,
            budget_input: String::new(),
            status_message: String::new(),
            show_help: false,
            cursor,
            focused_point: None,
            hover_radius: config.hover_radius,
            dataset_name,
            clock: FrameClock::new(config.tick_rate),
            started: Instant::now(),
        }
    }

    /// Runs every tick that came due since the previous frame.
    pub fn update(&mut self) {
        let now = self.started.elapsed().as_secs_f64();
        self.update_at(now);
    }

    pub fn update_at(&mut self, now_seconds: f64) -> u32 {
        let ticks = self.clock.advance(now_seconds);
        for _ in 0..ticks {
            self.session.tick();
        }
        ticks
    }

    pub const fn tick_rate(&self) -> f64 {
        self.clock.tick_rate()
    }

    pub const fn play_label(&self) -> &'static str {
        if self.session.sweep().is_playing() {
            "Pause"
        } else {
            "Play"
        }
    }

    pub fn toggle_play(&mut self) {
        self.session.toggle();
        self.status_message = if self.session.sweep().is_playing() {
            "Sweep running".to_string()
        } else {
            "Sweep paused".to_string()
        };
    }

    pub fn reset_map(&mut self) {
        self.session.reset();
        self.focused_point = None;
        self.status_message = "Radar reset".to_string();
    }

    pub fn begin_budget_edit(&mut self) {
        self.input_state = InputState::EditingBudget;
        self.budget_input = self.session.reveal_budget().to_string();
    }

    pub fn cancel_budget_edit(&mut self) {
        self.input_state = InputState::Viewing;
        self.budget_input.clear();
    }

    /// Applies the typed budget. Bad input is dropped and the old budget kept.
    pub fn apply_budget_input(&mut self) {
        match self.session.set_reveal_budget(&self.budget_input) {
            Ok(budget) => {
                self.focused_point = None;
                self.status_message = format!("Reveal budget set to {budget} per sweep");
            }
            Err(_) => {
                self.status_message = format!(
                    "Reveal budget unchanged ({})",
                    self.session.reveal_budget()
                );
            }
        }
        self.cancel_budget_edit();
    }

    pub fn move_cursor(&mut self, dx: f64, dy: f64) {
        let geometry = self.session.geometry();
        let min_x = geometry.center.x - geometry.radius;
        let max_x = geometry.center.x + geometry.radius;
        let min_y = geometry.center.y - geometry.radius;
        let max_y = geometry.center.y + geometry.radius;

        self.cursor = Position::new(
            dx.mul_add(CURSOR_STEP, self.cursor.x).clamp(min_x, max_x),
            dy.mul_add(CURSOR_STEP, self.cursor.y).clamp(min_y, max_y),
        );
        self.focused_point = None;
    }

    /// Jumps the cursor to the next visible sighting, if any.
    pub fn focus_next_visible(&mut self) {
        let store = self.session.store();
        match store.next_visible(self.focused_point) {
            Some(index) => {
                self.cursor = store.points()[index].position;
                self.focused_point = Some(index);
            }
            None => {
                self.status_message = "No visible sightings".to_string();
            }
        }
    }

    pub fn hovered(&self) -> Vec<&SightingDetails> {
        self.session.points_near(self.cursor, self.hover_radius)
    }
}
