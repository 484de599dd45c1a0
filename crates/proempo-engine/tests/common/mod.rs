//! Common test utilities and harness for projection engine integration tests.

use std::time::Duration;

use proempo_core::{HotelOperatingProfile, ImprovementCoefficients};
use proempo_engine::{EngineConfig, EngineSnapshot, ProjectionEngine};
use tokio::sync::watch;

/// Settle delay used throughout the integration tests.
pub const SETTLE: Duration = Duration::from_millis(50);

/// Test harness owning a projection engine with a short settle delay.
pub struct TestHarness {
    /// The engine under test
    pub engine: ProjectionEngine,
}

impl TestHarness {
    /// Spawns an engine with the default product coefficients.
    pub fn spawn() -> Self {
        Self::with_coefficients(ImprovementCoefficients::default())
    }

    /// Spawns an engine with custom coefficients.
    pub fn with_coefficients(coefficients: ImprovementCoefficients) -> Self {
        Self {
            engine: ProjectionEngine::spawn(
                coefficients,
                EngineConfig {
                    settle_delay: SETTLE,
                },
            ),
        }
    }
}

/// Shorthand profile constructor.
pub fn profile(
    rooms: u32,
    occupancy: f64,
    adr: f64,
    monthly_cost: f64,
) -> HotelOperatingProfile {
    HotelOperatingProfile::new(rooms, occupancy, adr, monthly_cost)
}

/// Waits for the next published snapshot.
pub async fn next_transition(rx: &mut watch::Receiver<EngineSnapshot>) -> EngineSnapshot {
    rx.changed().await.expect("engine closed unexpectedly");
    rx.borrow_and_update().clone()
}

/// Waits until the engine publishes a settled snapshot.
///
/// Under a paused clock the runtime auto-advances to the settle deadline
/// once every task is waiting on time.
pub async fn wait_for_settled(rx: &mut watch::Receiver<EngineSnapshot>) -> EngineSnapshot {
    loop {
        let snapshot = next_transition(rx).await;
        if snapshot.state.is_settled() {
            return snapshot;
        }
    }
}
