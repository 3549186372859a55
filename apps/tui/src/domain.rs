use serde::{Deserialize, Serialize};

/// One row of the sightings dataset, exactly as it was read. Every field is
/// kept as text; only latitude and longitude are ever interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SightingRow {
    #[serde(default)]
    pub latitude: String,
    #[serde(default)]
    pub longitude: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub shape: String,
    #[serde(rename = "duration (seconds)", default)]
    pub duration_seconds: String,
    #[serde(rename = "duration (hours/min)", default)]
    pub duration_hours_min: String,
    #[serde(rename = "date posted", default)]
    pub date_posted: String,
    #[serde(default)]
    pub comments: String,
}

impl SightingRow {
    pub fn into_details(self) -> SightingDetails {
        SightingDetails {
            city: self.city,
            state: self.state,
            shape: self.shape,
            date_posted: self.date_posted,
            duration_seconds: self.duration_seconds,
            duration_hours_min: self.duration_hours_min,
            comments: self.comments,
        }
    }
}

/// Display-only metadata carried by a sighting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SightingDetails {
    pub city: String,
    pub state: String,
    pub shape: String,
    pub date_posted: String,
    pub duration_seconds: String,
    pub duration_hours_min: String,
    pub comments: String,
}

impl SightingDetails {
    pub fn duration_label(&self) -> String {
        if self.duration_hours_min.is_empty() {
            format!("{} sec", self.duration_seconds)
        } else {
            self.duration_hours_min.clone()
        }
    }

    /// Lines shown in the hover panel. Comments are omitted when empty.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("City: {}", self.city),
            format!("State: {}", self.state),
            format!("Shape: {}", self.shape),
            format!("Date: {}", self.date_posted),
            format!("Duration: {}", self.duration_label()),
        ];

        if !self.comments.is_empty() {
            lines.push(format!("Comments: {}", self.comments));
        }

        lines
    }
}

/// A point on the radar surface. `y` grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// How far a point is from the sweep line, in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AngularDistance {
    /// Plain `|a - b|`. Points just past 0 are not adjacent to a sweep just
    /// below 2π.
    #[default]
    Linear,
    /// Shortest way around the circle, `min(d, 2π - d)`.
    Wrapped,
}

impl AngularDistance {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Wrapped => "wrapped",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "linear" | "raw" => Some(Self::Linear),
            "wrapped" | "wrap" => Some(Self::Wrapped),
            _ => None,
        }
    }

    pub fn between(self, a: f64, b: f64) -> f64 {
        let diff = (a - b).abs();
        match self {
            Self::Linear => diff,
            Self::Wrapped => diff.min(std::f64::consts::TAU - diff),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    fn details(hours_min: &str, comments: &str) -> SightingDetails {
        SightingDetails {
            city: "roswell".to_string(),
            state: "nm".to_string(),
            shape: "disk".to_string(),
            date_posted: "7/8/1947".to_string(),
            duration_seconds: "120".to_string(),
            duration_hours_min: hours_min.to_string(),
            comments: comments.to_string(),
        }
    }

    #[test]
    fn summary_prefers_hours_min_duration() {
        let lines = details("2 minutes", "bright light").summary_lines();
        assert_eq!(lines[4], "Duration: 2 minutes");
        assert_eq!(lines[5], "Comments: bright light");
    }

    #[test]
    fn summary_falls_back_to_seconds_and_skips_empty_comments() {
        let lines = details("", "").summary_lines();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "City: roswell");
        assert_eq!(lines[4], "Duration: 120 sec");
    }

    #[test]
    fn angular_distance_parse_accepts_aliases() {
        assert_eq!(AngularDistance::parse(" Wrapped "), Some(AngularDistance::Wrapped));
        assert_eq!(AngularDistance::parse("raw"), Some(AngularDistance::Linear));
        assert_eq!(AngularDistance::parse("modular"), None);
    }

    #[test]
    fn linear_distance_ignores_the_seam() {
        let near_zero = 0.01;
        let near_full = TAU - 0.01;
        assert!(AngularDistance::Linear.between(near_zero, near_full) > 6.0);
        assert!(AngularDistance::Wrapped.between(near_zero, near_full) < 0.021);
    }
}
