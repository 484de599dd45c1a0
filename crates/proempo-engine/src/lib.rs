#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Pro Empo Engine Library
//!
//! Reactive recompute scheduling on top of the pure calculator.

pub mod error;
pub mod scheduler;

// Re-exports for convenience
pub use error::{Error, Result};
pub use scheduler::{DEFAULT_SETTLE_DELAY, EngineConfig, EngineSnapshot, ProjectionEngine};

// Core types consumers of the engine always need
pub use proempo_core::{EngineState, Projection};
