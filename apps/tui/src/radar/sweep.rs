use std::f64::consts::TAU;

pub const DEFAULT_SWEEP_SPEED: f64 = 0.02;

/// Sweep angle, play state and the reveal counter of the current rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepController {
    angle: f64,
    speed: f64,
    playing: bool,
    revealed_this_rotation: usize,
    rotations: u64,
}

impl SweepController {
    pub const fn new(speed: f64) -> Self {
        Self {
            angle: 0.0,
            speed,
            playing: false,
            revealed_this_rotation: 0,
            rotations: 0,
        }
    }

    pub const fn angle(&self) -> f64 {
        self.angle
    }

    pub const fn speed(&self) -> f64 {
        self.speed
    }

    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    pub const fn revealed_this_rotation(&self) -> usize {
        self.revealed_this_rotation
    }

    pub const fn rotations(&self) -> u64 {
        self.rotations
    }

    /// Moves the sweep one tick. Returns true when the sweep wrapped to 0.
    pub fn advance(&mut self) -> bool {
        if !self.playing {
            return false;
        }

        self.angle += self.speed;
        if self.angle >= TAU {
            self.angle = 0.0;
            self.revealed_this_rotation = 0;
            self.rotations += 1;
            return true;
        }

        false
    }

    pub const fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    pub const fn reset(&mut self) {
        self.angle = 0.0;
        self.playing = false;
        self.revealed_this_rotation = 0;
        self.rotations = 0;
    }

    pub(crate) const fn remaining_budget(&self, budget: usize) -> usize {
        budget.saturating_sub(self.revealed_this_rotation)
    }

    pub(crate) const fn record_reveal(&mut self) {
        self.revealed_this_rotation += 1;
    }
}

impl Default for SweepController {
    fn default() -> Self {
        Self::new(DEFAULT_SWEEP_SPEED)
    }
}
