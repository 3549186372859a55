// Export our modules for use in binaries and tests
pub mod config;
pub mod dataset;
pub mod domain;
pub mod error;
pub mod radar;

pub use domain::{AngularDistance, Position, SightingDetails, SightingRow};
pub use error::RadarError;
