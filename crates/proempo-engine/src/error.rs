//! Error types for the projection engine.

/// Errors that can occur when talking to a projection engine.
///
/// The engine itself never fails: invalid input is coerced upstream and
/// undefined projections surface as a `NotComputable` result variant, not
/// an error.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The engine's actor task has stopped and no longer accepts edits.
    #[error("Projection engine stopped")]
    EngineStopped,
}

/// Convenience `Result` type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
