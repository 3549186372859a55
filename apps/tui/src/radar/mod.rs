// Radar module for ufo_radar
// Projection, sweep and reveal rules behind the display

pub mod clock;
pub mod projection;
pub mod reveal;
pub mod session;
pub mod store;
pub mod sweep;

pub use clock::FrameClock;
pub use projection::{CoordinateProjector, RadarGeometry};
pub use reveal::{RevealEngine, TickReport};
pub use session::{parse_reveal_budget, RadarSession, RadarSnapshot, SessionSettings};
pub use store::{LoadReport, SightingPoint, SightingStore, FADE_MAX};
pub use sweep::SweepController;
