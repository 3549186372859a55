use crate::domain::{AngularDistance, Position, SightingDetails, SightingRow};
use crate::error::{RadarError, Result};
use crate::radar::projection::{CoordinateProjector, RadarGeometry};
use crate::radar::reveal::{RevealEngine, TickReport, DEFAULT_FADE_STEP, DEFAULT_SWEEP_WIDTH};
use crate::radar::store::{LoadReport, SightingPoint, SightingStore};
use crate::radar::sweep::{SweepController, DEFAULT_SWEEP_SPEED};
use serde::Serialize;

pub const DEFAULT_REVEAL_BUDGET: usize = 100;

/// Tunables for one radar session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    pub geometry: RadarGeometry,
    pub sweep_speed: f64,
    pub sweep_width: f64,
    pub fade_step: u8,
    pub reveal_budget: usize,
    pub angular_distance: AngularDistance,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            geometry: RadarGeometry::default(),
            sweep_speed: DEFAULT_SWEEP_SPEED,
            sweep_width: DEFAULT_SWEEP_WIDTH,
            fade_step: DEFAULT_FADE_STEP,
            reveal_budget: DEFAULT_REVEAL_BUDGET,
            angular_distance: AngularDistance::default(),
        }
    }
}

/// Accepts only whole positive numbers.
pub fn parse_reveal_budget(input: &str) -> Result<usize> {
    match input.trim().parse::<usize>() {
        Ok(budget) if budget > 0 => Ok(budget),
        _ => Err(RadarError::invalid_config("reveal budget", input)),
    }
}

/// Everything a renderer needs to paint one frame.
#[derive(Debug, Serialize)]
pub struct RadarSnapshot<'a> {
    pub sweep_angle: f64,
    pub center: Position,
    pub radius: f64,
    pub playing: bool,
    pub reveal_budget: usize,
    pub revealed_this_rotation: usize,
    pub rotations: u64,
    pub points: &'a [SightingPoint],
}

/// The radar simulation: sightings, sweep and reveal rules.
#[derive(Debug, Clone)]
pub struct RadarSession {
    geometry: RadarGeometry,
    store: SightingStore,
    sweep: SweepController,
    engine: RevealEngine,
    reveal_budget: usize,
    load_report: LoadReport,
}

impl RadarSession {
    pub fn new(settings: SessionSettings, rows: impl IntoIterator<Item = SightingRow>) -> Self {
        let projector = CoordinateProjector::new(settings.geometry);
        let (store, load_report) = SightingStore::from_rows(rows, &projector);
        log::debug!(
            "loaded {} of {} sightings ({} malformed, {} outside radar)",
            load_report.accepted,
            load_report.rows,
            load_report.malformed,
            load_report.outside_radar
        );

        let mut session = Self::with_store(settings, store);
        session.load_report = load_report;
        session
    }

    pub fn with_store(settings: SessionSettings, store: SightingStore) -> Self {
        Self {
            geometry: settings.geometry,
            load_report: LoadReport {
                rows: store.len(),
                accepted: store.len(),
                ..LoadReport::default()
            },
            store,
            sweep: SweepController::new(settings.sweep_speed),
            engine: RevealEngine::new(
                settings.geometry,
                settings.sweep_width,
                settings.fade_step,
                settings.angular_distance,
            ),
            reveal_budget: settings.reveal_budget.max(1),
        }
    }

    pub const fn geometry(&self) -> RadarGeometry {
        self.geometry
    }

    pub const fn store(&self) -> &SightingStore {
        &self.store
    }

    pub const fn sweep(&self) -> &SweepController {
        &self.sweep
    }

    pub const fn engine(&self) -> &RevealEngine {
        &self.engine
    }

    pub const fn reveal_budget(&self) -> usize {
        self.reveal_budget
    }

    pub const fn load_report(&self) -> LoadReport {
        self.load_report
    }

    pub(crate) fn record_undecodable(&mut self, count: usize) {
        self.load_report = self.load_report.with_undecodable(count);
    }

    /// Advances the sweep, then fades and reveals against the new angle.
    pub fn tick(&mut self) -> TickReport {
        if self.sweep.advance() {
            log::trace!("sweep rotation {} complete", self.sweep.rotations());
        }
        self.engine
            .apply(&mut self.sweep, &mut self.store, self.reveal_budget)
    }

    pub const fn toggle(&mut self) {
        self.sweep.toggle();
    }

    pub fn reset(&mut self) {
        self.sweep.reset();
        self.store.clear_visibility();
    }

    /// Replaces the budget and resets the map. Bad input leaves every piece
    /// of state as it was.
    pub fn set_reveal_budget(&mut self, input: &str) -> Result<usize> {
        let budget = parse_reveal_budget(input).inspect_err(|e| {
            log::debug!("ignoring reveal budget input: {e}");
        })?;

        self.reveal_budget = budget;
        self.reset();
        Ok(budget)
    }

    pub fn points_near(&self, cursor: Position, threshold: f64) -> Vec<&SightingDetails> {
        self.store.points_near(cursor, threshold)
    }

    pub fn snapshot(&self) -> RadarSnapshot<'_> {
        RadarSnapshot {
            sweep_angle: self.sweep.angle(),
            center: self.geometry.center,
            radius: self.geometry.radius,
            playing: self.sweep.is_playing(),
            reveal_budget: self.reveal_budget,
            revealed_this_rotation: self.sweep.revealed_this_rotation(),
            rotations: self.sweep.rotations(),
            points: self.store.points(),
        }
    }
}
