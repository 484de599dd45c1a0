//! The recompute scheduler.
//!
//! A [`ProjectionEngine`] re-architects the framework-driven "recompute on
//! state change" pattern as an explicit Idle/Calculating/Settled state
//! machine with a cancellable settle timer, independent of any UI framework.
//! One actor task owns the profile timeline; consumers observe it through a
//! watch channel of [`EngineSnapshot`] values.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use proempo_core::{
    EngineState, HotelOperatingProfile, ImprovementCoefficients, Projection, calculator,
};

use crate::error::{Error, Result};

/// Default settle delay between the last edit and publication of a result.
///
/// The delay smooths the UI during bursts of edits; it carries no
/// correctness weight.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Configuration for a projection engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// How long the engine waits after the last edit before computing.
    pub settle_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

/// One observation of the engine's lifecycle.
///
/// Snapshots are published whole on every state transition. The projection
/// field is private so that staleness gating cannot be bypassed by
/// accident: use [`EngineSnapshot::projection`] for the authoritative value
/// and [`EngineSnapshot::last_projection`] for the provisional one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Current lifecycle state
    pub state: EngineState,

    /// The most recent profile edit, if any
    pub profile: Option<HotelOperatingProfile>,

    /// When the projection was last computed
    pub computed_at: Option<DateTime<Utc>>,

    /// Total profile edits received over the engine's lifetime
    pub edits_seen: u64,

    /// Total calculator runs over the engine's lifetime
    pub computations: u64,

    projection: Option<Projection>,
}

impl EngineSnapshot {
    fn idle() -> Self {
        Self {
            state: EngineState::Idle,
            profile: None,
            computed_at: None,
            edits_seen: 0,
            computations: 0,
            projection: None,
        }
    }

    /// Returns the current projection, but only while the engine is settled.
    ///
    /// During `Calculating` the previously settled value is stale and this
    /// returns `None`.
    pub fn projection(&self) -> Option<&Projection> {
        if self.state.is_settled() {
            self.projection.as_ref()
        } else {
            None
        }
    }

    /// Returns the most recently computed projection regardless of state.
    ///
    /// While `Calculating` this is the provisional previous value; treat it
    /// as not authoritative.
    pub fn last_projection(&self) -> Option<&Projection> {
        self.projection.as_ref()
    }
}

/// A reactive projection engine owning one profile timeline.
///
/// Dropping the engine closes the edit queue; the actor task then drains
/// and exits on its own. Use [`ProjectionEngine::shutdown`] to wait for it.
#[derive(Debug)]
pub struct ProjectionEngine {
    edits: mpsc::UnboundedSender<HotelOperatingProfile>,
    snapshots: watch::Receiver<EngineSnapshot>,
    actor: JoinHandle<()>,
}

impl ProjectionEngine {
    /// Spawns a new engine with the given coefficients and configuration.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(coefficients: ImprovementCoefficients, config: EngineConfig) -> Self {
        let (edit_tx, edit_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(EngineSnapshot::idle());
        let actor = tokio::spawn(run(edit_rx, snapshot_tx, coefficients, config.settle_delay));
        Self {
            edits: edit_tx,
            snapshots: snapshot_rx,
            actor,
        }
    }

    /// Submits a profile edit.
    ///
    /// Rapid successive edits collapse: only the final profile of a burst
    /// inside the settle window is ever computed.
    pub fn submit(&self, profile: HotelOperatingProfile) -> Result<()> {
        self.edits.send(profile).map_err(|_| Error::EngineStopped)
    }

    /// Returns a receiver that observes every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<EngineSnapshot> {
        self.snapshots.clone()
    }

    /// Returns the latest published snapshot.
    pub fn snapshot(&self) -> EngineSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.snapshots.borrow().state
    }

    /// Stops accepting edits and waits for the actor task to finish.
    pub async fn shutdown(self) {
        drop(self.edits);
        if let Err(error) = self.actor.await {
            tracing::warn!(%error, "projection engine task ended abnormally");
        }
    }
}

/// Actor loop: consume edits, debounce with a resettable settle timer,
/// compute once per settle on the latest profile.
async fn run(
    mut edits: mpsc::UnboundedReceiver<HotelOperatingProfile>,
    snapshots: watch::Sender<EngineSnapshot>,
    coefficients: ImprovementCoefficients,
    settle_delay: Duration,
) {
    let settle = tokio::time::sleep(settle_delay);
    tokio::pin!(settle);
    let mut armed = false;

    let mut latest: Option<HotelOperatingProfile> = None;
    let mut current = EngineSnapshot::idle();

    loop {
        tokio::select! {
            edit = edits.recv() => match edit {
                Some(profile) => {
                    current.edits_seen += 1;
                    current.state = EngineState::Calculating;
                    current.profile = Some(profile.clone());
                    latest = Some(profile);

                    tracing::debug!(
                        edits_seen = current.edits_seen,
                        state = %current.state,
                        "profile edit received, settle timer re-armed"
                    );

                    if snapshots.send(current.clone()).is_err() {
                        break;
                    }

                    // Cancels any pending settle: the old deadline can
                    // never fire once the timer is reset.
                    settle.as_mut().reset(Instant::now() + settle_delay);
                    armed = true;
                }
                None => break,
            },
            () = &mut settle, if armed => {
                armed = false;
                let Some(profile) = latest.as_ref() else {
                    continue;
                };

                let projection = calculator::project(profile, &coefficients);
                current.computations += 1;
                current.state = EngineState::Settled;
                current.computed_at = Some(Utc::now());

                tracing::info!(
                    computations = current.computations,
                    edits_seen = current.edits_seen,
                    computed = projection.is_computed(),
                    "projection settled"
                );

                current.projection = Some(projection);
                if snapshots.send(current.clone()).is_err() {
                    break;
                }
            }
        }
    }

    tracing::debug!(
        edits_seen = current.edits_seen,
        computations = current.computations,
        "projection engine stopped"
    );
}
