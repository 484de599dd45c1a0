#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Pro Empo Core Library
//!
//! Types, input normalization, and the pure projection calculator for the
//! Pro Empo ROI projection engine.

pub mod calculator;
pub mod error;
pub mod normalize;
pub mod types;

// Re-exports for convenience
pub use error::{Error, Result};
pub use types::{
    EngineState, HotelOperatingProfile, ImprovementCoefficients, NotComputableReason, Projection,
    ProjectionFigures,
};
