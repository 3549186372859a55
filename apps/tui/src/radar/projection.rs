use crate::domain::{Position, SightingRow};
use crate::error::{RadarError, Result};
use crate::radar::store::SightingPoint;

/// Center and radius of the radar face in surface units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    pub center: Position,
    pub radius: f64,
}

impl RadarGeometry {
    pub const fn new(center: Position, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Angle of `position` around the center, in [0, 2π).
    pub fn angle_of(&self, position: Position) -> f64 {
        let angle = (position.y - self.center.y).atan2(position.x - self.center.x);
        if angle < 0.0 {
            angle + std::f64::consts::TAU
        } else {
            angle
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.distance_to(self.center) <= self.radius
    }

    /// Tip of a line from the center at `angle`.
    pub fn point_at(&self, angle: f64, length: f64) -> Position {
        Position::new(
            angle.cos().mul_add(length, self.center.x),
            angle.sin().mul_add(length, self.center.y),
        )
    }
}

impl Default for RadarGeometry {
    fn default() -> Self {
        Self::new(Position::new(500.0, 500.0), 400.0)
    }
}

/// Why a row did not become a point.
#[derive(Debug)]
pub enum Rejection {
    Malformed(RadarError),
    OutsideRadar(Position),
}

fn map_range(value: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    (value - from.0) / (from.1 - from.0) * (to.1 - to.0) + to.0
}

fn parse_coordinate(field: &'static str, raw: &str, limit: f64) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| RadarError::malformed(format!("{field} {raw:?} is not a number")))?;

    if !value.is_finite() || value < -limit || value > limit {
        return Err(RadarError::malformed(format!(
            "{field} {value} outside [-{limit}, {limit}]"
        )));
    }

    Ok(value)
}

/// Maps latitude/longitude onto the radar face.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinateProjector {
    geometry: RadarGeometry,
}

impl CoordinateProjector {
    pub const fn new(geometry: RadarGeometry) -> Self {
        Self { geometry }
    }

    pub const fn geometry(&self) -> RadarGeometry {
        self.geometry
    }

    /// Linear equirectangular mapping. Latitude is inverted so north is up.
    pub fn project(&self, latitude: f64, longitude: f64) -> Position {
        let RadarGeometry { center, radius } = self.geometry;
        let x = map_range(
            longitude,
            (-180.0, 180.0),
            (center.x - radius, center.x + radius),
        );
        let y = map_range(
            latitude,
            (-90.0, 90.0),
            (center.y + radius, center.y - radius),
        );
        Position::new(x, y)
    }

    pub fn project_row(&self, row: SightingRow) -> std::result::Result<SightingPoint, Rejection> {
        let latitude =
            parse_coordinate("latitude", &row.latitude, 90.0).map_err(Rejection::Malformed)?;
        let longitude =
            parse_coordinate("longitude", &row.longitude, 180.0).map_err(Rejection::Malformed)?;

        let position = self.project(latitude, longitude);
        if !self.geometry.contains(position) {
            return Err(Rejection::OutsideRadar(position));
        }

        Ok(SightingPoint::new(position, row.into_details()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-9,
            "expected {expected}, got {actual}, diff {diff}"
        );
    }

    fn row(latitude: &str, longitude: &str) -> SightingRow {
        SightingRow {
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
            city: "lubbock".to_string(),
            ..SightingRow::default()
        }
    }

    #[test]
    fn origin_projects_to_center() {
        let projector = CoordinateProjector::default();
        let position = projector.project(0.0, 0.0);
        assert_close(position.x, 500.0);
        assert_close(position.y, 500.0);
    }

    #[test]
    fn latitude_is_inverted_and_longitude_spans_the_diameter() {
        let projector = CoordinateProjector::default();
        let north = projector.project(90.0, 0.0);
        let east = projector.project(0.0, 180.0);
        assert_close(north.y, 100.0);
        assert_close(east.x, 900.0);
    }

    #[test]
    fn angle_is_normalized_into_full_turn() {
        let geometry = RadarGeometry::default();
        assert_close(geometry.angle_of(Position::new(900.0, 500.0)), 0.0);
        let above = geometry.angle_of(Position::new(500.0, 100.0));
        assert_close(above, 3.0 * std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn valid_row_becomes_hidden_point_with_details() {
        let projector = CoordinateProjector::default();
        match projector.project_row(row(" 33.58 ", "-101.85")) {
            Ok(point) => {
                assert!(!point.visible);
                assert_eq!(point.fade, 0);
                assert_eq!(point.details.city, "lubbock");
            }
            Err(rejection) => panic!("unexpected {rejection:?}"),
        }
    }

    #[test]
    fn malformed_and_out_of_range_rows_are_rejected() {
        let projector = CoordinateProjector::default();
        for (latitude, longitude) in [
            ("abc", "10"),
            ("", "10"),
            ("NaN", "10"),
            ("inf", "10"),
            ("90.5", "0"),
            ("0", "-180.01"),
        ] {
            assert!(
                matches!(
                    projector.project_row(row(latitude, longitude)),
                    Err(Rejection::Malformed(RadarError::MalformedRecord { .. }))
                ),
                "{latitude}, {longitude} should be malformed"
            );
        }
    }

    #[test]
    fn corners_fall_outside_the_circle() {
        let projector = CoordinateProjector::default();
        assert!(matches!(
            projector.project_row(row("80", "170")),
            Err(Rejection::OutsideRadar(_))
        ));
    }

    #[test]
    fn every_valid_coordinate_is_inside_or_rejected() {
        let projector = CoordinateProjector::default();
        let geometry = projector.geometry();
        for lat_step in -18..=18 {
            for lon_step in -36..=36 {
                let latitude = f64::from(lat_step) * 5.0;
                let longitude = f64::from(lon_step) * 5.0;
                match projector.project_row(row(&latitude.to_string(), &longitude.to_string())) {
                    Ok(point) => assert!(geometry.contains(point.position)),
                    Err(Rejection::OutsideRadar(position)) => {
                        assert!(!geometry.contains(position));
                    }
                    Err(Rejection::Malformed(e)) => panic!("unexpected {e}"),
                }
            }
        }
    }
}
