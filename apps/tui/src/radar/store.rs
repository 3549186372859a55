use crate::domain::{Position, SightingDetails, SightingRow};
use crate::radar::projection::{CoordinateProjector, Rejection};
use serde::Serialize;

pub const FADE_MAX: u8 = u8::MAX;

/// A projected sighting. Position and details never change after load;
/// `visible` and `fade` belong to the reveal engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SightingPoint {
    pub position: Position,
    pub details: SightingDetails,
    pub visible: bool,
    pub fade: u8,
}

impl SightingPoint {
    pub const fn new(position: Position, details: SightingDetails) -> Self {
        Self {
            position,
            details,
            visible: false,
            fade: 0,
        }
    }

    pub(crate) const fn reveal(&mut self) {
        self.visible = true;
        self.fade = FADE_MAX;
    }

    pub(crate) const fn decay(&mut self, step: u8) {
        self.fade = self.fade.saturating_sub(step);
        if self.fade == 0 {
            self.visible = false;
        }
    }

    pub(crate) const fn hide(&mut self) {
        self.visible = false;
        self.fade = 0;
    }
}

/// Counts produced while building a store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub rows: usize,
    pub accepted: usize,
    pub malformed: usize,
    pub outside_radar: usize,
}

impl LoadReport {
    pub const fn dropped(&self) -> usize {
        self.malformed + self.outside_radar
    }

    /// Folds in rows the CSV reader could not decode at all.
    pub const fn with_undecodable(mut self, count: usize) -> Self {
        self.rows += count;
        self.malformed += count;
        self
    }
}

/// Ordered collection of sightings that fell inside the radar.
#[derive(Debug, Clone, Default)]
pub struct SightingStore {
    points: Vec<SightingPoint>,
}

impl SightingStore {
    pub fn from_rows(
        rows: impl IntoIterator<Item = SightingRow>,
        projector: &CoordinateProjector,
    ) -> (Self, LoadReport) {
        let mut report = LoadReport::default();
        let mut points = Vec::new();

        for row in rows {
            report.rows += 1;
            match projector.project_row(row) {
                Ok(point) => {
                    report.accepted += 1;
                    points.push(point);
                }
                Err(Rejection::Malformed(e)) => {
                    log::debug!("dropping row {}: {e}", report.rows);
                    report.malformed += 1;
                }
                Err(Rejection::OutsideRadar(position)) => {
                    log::debug!(
                        "dropping row {}: ({:.1}, {:.1}) is outside the radar",
                        report.rows,
                        position.x,
                        position.y
                    );
                    report.outside_radar += 1;
                }
            }
        }

        (Self { points }, report)
    }

    pub fn from_points(points: Vec<SightingPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[SightingPoint] {
        &self.points
    }

    pub(crate) fn points_mut(&mut self) -> &mut [SightingPoint] {
        &mut self.points
    }

    pub fn visible_count(&self) -> usize {
        self.points.iter().filter(|point| point.visible).count()
    }

    pub fn clear_visibility(&mut self) {
        for point in &mut self.points {
            point.hide();
        }
    }

    /// Index of the first visible point after `after`, wrapping around.
    pub fn next_visible(&self, after: Option<usize>) -> Option<usize> {
        let len = self.points.len();
        let start = after.map_or(0, |index| index + 1);
        (0..len)
            .map(|offset| (start + offset) % len)
            .find(|&index| self.points[index].visible)
    }

    /// Details of visible points strictly closer than `threshold` to `cursor`.
    pub fn points_near(&self, cursor: Position, threshold: f64) -> Vec<&SightingDetails> {
        self.points
            .iter()
            .filter(|point| point.visible && point.position.distance_to(cursor) < threshold)
            .map(|point| &point.details)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(latitude: &str, longitude: &str, city: &str) -> SightingRow {
        SightingRow {
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
            city: city.to_string(),
            ..SightingRow::default()
        }
    }

    fn visible_at(x: f64, y: f64, city: &str) -> SightingPoint {
        let mut point = SightingPoint::new(
            Position::new(x, y),
            SightingDetails {
                city: city.to_string(),
                ..SightingDetails::default()
            },
        );
        point.reveal();
        point
    }

    #[test]
    fn from_rows_keeps_order_and_counts_drops() {
        let rows = vec![
            row("10", "10", "first"),
            row("oops", "10", "bad"),
            row("85", "175", "corner"),
            row("-10", "-10", "second"),
        ];
        let (store, report) = SightingStore::from_rows(rows, &CoordinateProjector::default());

        let cities = store
            .points()
            .iter()
            .map(|point| point.details.city.as_str())
            .collect::<Vec<_>>();
        assert_eq!(cities, vec!["first", "second"]);
        assert_eq!(
            report,
            LoadReport {
                rows: 4,
                accepted: 2,
                malformed: 1,
                outside_radar: 1,
            }
        );
        assert_eq!(report.dropped(), 2);
    }

    #[test]
    fn decay_hides_point_at_zero() {
        let mut point = visible_at(0.0, 0.0, "x");
        point.fade = 3;
        point.decay(2);
        assert!(point.visible);
        assert_eq!(point.fade, 1);
        point.decay(2);
        assert!(!point.visible);
        assert_eq!(point.fade, 0);
    }

    #[test]
    fn points_near_only_returns_visible_points_within_threshold() {
        let mut hidden = visible_at(500.0, 500.0, "hidden");
        hidden.hide();
        let store = SightingStore::from_points(vec![
            visible_at(503.0, 500.0, "close"),
            hidden,
            visible_at(506.0, 500.0, "edge"),
            visible_at(520.0, 520.0, "far"),
        ]);

        let near = store.points_near(Position::new(500.0, 500.0), 6.0);
        let cities = near.iter().map(|d| d.city.as_str()).collect::<Vec<_>>();
        assert_eq!(cities, vec!["close"]);
    }

    #[test]
    fn next_visible_wraps_and_skips_hidden() {
        let mut hidden = visible_at(0.0, 0.0, "hidden");
        hidden.hide();
        let store = SightingStore::from_points(vec![
            visible_at(0.0, 0.0, "a"),
            hidden,
            visible_at(0.0, 0.0, "c"),
        ]);
        assert_eq!(store.next_visible(None), Some(0));
        assert_eq!(store.next_visible(Some(0)), Some(2));
        assert_eq!(store.next_visible(Some(2)), Some(0));
        assert_eq!(SightingStore::default().next_visible(None), None);
    }

    #[test]
    fn clear_visibility_resets_every_point() {
        let mut store =
            SightingStore::from_points(vec![visible_at(1.0, 1.0, "a"), visible_at(2.0, 2.0, "b")]);
        store.clear_visibility();
        assert_eq!(store.visible_count(), 0);
        assert!(store.points().iter().all(|point| point.fade == 0));
    }
}
