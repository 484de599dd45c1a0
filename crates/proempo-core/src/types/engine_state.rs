//! Engine lifecycle state.

use serde::{Deserialize, Serialize};

/// The lifecycle state of a projection engine instance.
///
/// While `Calculating`, any previously settled projection is provisional
/// and must not be rendered as current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EngineState {
    /// No edits have been received yet.
    Idle,

    /// An edit arrived and the settle timer is running.
    Calculating,

    /// The settle timer expired and a fresh projection was published.
    Settled,
}

impl EngineState {
    /// Returns `true` if the engine has not seen any edits.
    pub fn is_idle(&self) -> bool {
        matches!(self, EngineState::Idle)
    }

    /// Returns `true` if a recomputation is pending.
    pub fn is_calculating(&self) -> bool {
        matches!(self, EngineState::Calculating)
    }

    /// Returns `true` if the latest published projection is authoritative.
    pub fn is_settled(&self) -> bool {
        matches!(self, EngineState::Settled)
    }
}

impl std::fmt::Display for EngineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineState::Idle => write!(f, "idle"),
            EngineState::Calculating => write!(f, "calculating"),
            EngineState::Settled => write!(f, "settled"),
        }
    }
}
