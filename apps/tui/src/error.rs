use thiserror::Error;

/// Errors raised while loading sightings or configuring the radar.
#[derive(Debug, Error)]
pub enum RadarError {
    /// A dataset row with an unusable latitude/longitude or an undecodable shape.
    #[error("malformed record: {reason}")]
    MalformedRecord { reason: String },

    /// A setting that could not be applied. The previous value stays in effect.
    #[error("invalid configuration for {key}: {value:?}")]
    InvalidConfiguration { key: &'static str, value: String },

    #[error("dataset error: {0}")]
    Dataset(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl RadarError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            reason: reason.into(),
        }
    }

    pub fn invalid_config(key: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            key,
            value: value.into(),
        }
    }
}

pub type Result<T, E = RadarError> = std::result::Result<T, E>;
