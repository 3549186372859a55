#[allow(clippy::module_inception)]
mod config;

pub use config::{init_app_config, RadarConfig, DEFAULT_DATASET, DEFAULT_HOVER_RADIUS};
