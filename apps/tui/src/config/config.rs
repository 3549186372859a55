use crate::domain::AngularDistance;
use crate::error::{RadarError, Result};
use crate::radar::clock::DEFAULT_TICK_RATE;
use crate::radar::{parse_reveal_budget, SessionSettings};
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_DATASET: &str = "ufo_sightings_scrubbed.csv";
pub const DEFAULT_HOVER_RADIUS: f64 = 6.0;
pub const MAX_TICK_RATE: f64 = 1000.0;

/// Settings for one run of the radar.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarConfig {
    pub dataset_path: PathBuf,
    pub session: SessionSettings,
    pub tick_rate: f64,
    pub hover_radius: f64,
    pub log_file: Option<PathBuf>,
    pub debug: bool,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET),
            session: SessionSettings::default(),
            tick_rate: DEFAULT_TICK_RATE,
            hover_radius: DEFAULT_HOVER_RADIUS,
            log_file: None,
            debug: false,
        }
    }
}

/// Initializes the application configuration from `.env` and the process
/// environment.
pub fn init_app_config() -> Result<RadarConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    RadarConfig::from_lookup(|key| env::var(key).ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn parse_positive<T>(key: &'static str, value: Option<String>, default: T) -> Result<T>
where
    T: FromStr + PartialOrd + Default,
{
    let Some(raw) = non_empty(value) else {
        return Ok(default);
    };

    match raw.trim().parse::<T>() {
        Ok(parsed) if parsed > T::default() => Ok(parsed),
        _ => Err(RadarError::invalid_config(key, raw)),
    }
}

fn parse_positive_finite(key: &'static str, value: Option<String>, default: f64) -> Result<f64> {
    let parsed = parse_positive(key, value, default)?;
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(RadarError::invalid_config(key, parsed.to_string()))
    }
}

fn parse_tick_rate(value: Option<String>, default: f64) -> Result<f64> {
    let rate = parse_positive_finite("RADAR_TICK_RATE", value, default)?;
    if rate > MAX_TICK_RATE {
        return Err(RadarError::invalid_config("RADAR_TICK_RATE", rate.to_string()));
    }
    Ok(rate)
}

impl RadarConfig {
    /// Builds a config from a key lookup, falling back to defaults for unset
    /// keys. Set-but-unusable values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let session_defaults = defaults.session;

        let reveal_budget = match non_empty(lookup("RADAR_REVEAL_BUDGET")) {
            Some(raw) => parse_reveal_budget(&raw)
                .map_err(|_| RadarError::invalid_config("RADAR_REVEAL_BUDGET", raw))?,
            None => session_defaults.reveal_budget,
        };

        let angular_distance = match non_empty(lookup("RADAR_ANGULAR_DISTANCE")) {
            Some(raw) => AngularDistance::parse(&raw)
                .ok_or_else(|| RadarError::invalid_config("RADAR_ANGULAR_DISTANCE", raw))?,
            None => session_defaults.angular_distance,
        };

        let session = SessionSettings {
            geometry: session_defaults.geometry,
            sweep_speed: parse_positive_finite(
                "RADAR_SWEEP_SPEED",
                lookup("RADAR_SWEEP_SPEED"),
                session_defaults.sweep_speed,
            )?,
            sweep_width: parse_positive_finite(
                "RADAR_SWEEP_WIDTH",
                lookup("RADAR_SWEEP_WIDTH"),
                session_defaults.sweep_width,
            )?,
            fade_step: parse_positive(
                "RADAR_FADE_STEP",
                lookup("RADAR_FADE_STEP"),
                session_defaults.fade_step,
            )?,
            reveal_budget,
            angular_distance,
        };

        Ok(Self {
            dataset_path: non_empty(lookup("RADAR_DATASET"))
                .map_or(defaults.dataset_path, PathBuf::from),
            session,
            tick_rate: parse_tick_rate(lookup("RADAR_TICK_RATE"), defaults.tick_rate)?,
            hover_radius: parse_positive_finite(
                "RADAR_HOVER_RADIUS",
                lookup("RADAR_HOVER_RADIUS"),
                defaults.hover_radius,
            )?,
            log_file: non_empty(lookup("RADAR_LOG_FILE")).map(PathBuf::from),
            debug: non_empty(lookup("DEBUG")).is_some_and(|value| value != "0"),
        })
    }
}
