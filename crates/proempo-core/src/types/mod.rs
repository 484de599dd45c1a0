//! Core types for ROI projections.

mod coefficients;
mod engine_state;
mod profile;
mod projection;
mod proptests;

pub use coefficients::ImprovementCoefficients;
pub use engine_state::EngineState;
pub use profile::HotelOperatingProfile;
pub use projection::{NotComputableReason, Projection, ProjectionFigures};
