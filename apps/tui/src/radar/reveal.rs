use crate::domain::AngularDistance;
use crate::radar::projection::RadarGeometry;
use crate::radar::store::SightingStore;
use crate::radar::sweep::SweepController;
use serde::Serialize;

pub const DEFAULT_SWEEP_WIDTH: f64 = 0.2;
pub const DEFAULT_FADE_STEP: u8 = 2;

/// What one tick changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TickReport {
    pub revealed: usize,
    pub faded_out: usize,
}

/// Reveals points under the sweep beam and fades the ones already shown.
#[derive(Debug, Clone, Copy)]
pub struct RevealEngine {
    geometry: RadarGeometry,
    sweep_width: f64,
    fade_step: u8,
    distance: AngularDistance,
}

impl RevealEngine {
    pub const fn new(
        geometry: RadarGeometry,
        sweep_width: f64,
        fade_step: u8,
        distance: AngularDistance,
    ) -> Self {
        Self {
            geometry,
            sweep_width,
            fade_step,
            distance,
        }
    }

    pub const fn sweep_width(&self) -> f64 {
        self.sweep_width
    }

    pub const fn distance(&self) -> AngularDistance {
        self.distance
    }

    pub fn in_beam(&self, point_angle: f64, sweep_angle: f64) -> bool {
        self.distance.between(point_angle, sweep_angle) < self.sweep_width
    }

    /// Runs one fade pass then one reveal pass. Paused sweeps are left alone.
    ///
    /// Fading first means a point revealed this tick keeps the full 255 until
    /// the next tick. Only hidden points are eligible, and each reveal is
    /// charged against the rotation's budget.
    pub fn apply(
        &self,
        sweep: &mut SweepController,
        store: &mut SightingStore,
        budget: usize,
    ) -> TickReport {
        let mut report = TickReport::default();
        if !sweep.is_playing() {
            return report;
        }

        for point in store.points_mut().iter_mut().filter(|point| point.visible) {
            point.decay(self.fade_step);
            if !point.visible {
                report.faded_out += 1;
            }
        }

        let sweep_angle = sweep.angle();
        for point in store.points_mut().iter_mut() {
            if sweep.remaining_budget(budget) == 0 {
                break;
            }
            if point.visible {
                continue;
            }

            let point_angle = self.geometry.angle_of(point.position);
            if self.in_beam(point_angle, sweep_angle) {
                point.reveal();
                sweep.record_reveal();
                report.revealed += 1;
            }
        }

        report
    }
}

impl Default for RevealEngine {
    fn default() -> Self {
        Self::new(
            RadarGeometry::default(),
            DEFAULT_SWEEP_WIDTH,
            DEFAULT_FADE_STEP,
            AngularDistance::default(),
        )
    }
}
