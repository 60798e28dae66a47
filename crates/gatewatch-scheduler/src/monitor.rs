//! The gate monitor loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use gatewatch_core::{Endpoint, GateMetrics};
use gatewatch_probe::Prober;
use gatewatch_state::{GateSnapshot, GateStore};

/// Drives probe rounds on a fixed cadence and publishes the results.
///
/// The monitor is the only writer of the `GateStore`; rounds are
/// serialized by the loop itself, so at most one round is in flight.
pub struct Monitor {
    endpoints: Vec<Endpoint>,
    interval: Duration,
    prober: Prober,
    sink: Arc<dyn GateMetrics>,
    store: GateStore,
}

impl Monitor {
    pub fn new(
        endpoints: Vec<Endpoint>,
        interval: Duration,
        prober: Prober,
        sink: Arc<dyn GateMetrics>,
        store: GateStore,
    ) -> Self {
        Self {
            endpoints,
            interval,
            prober,
            sink,
            store,
        }
    }

    /// Run one round and publish its snapshot.
    ///
    /// The gate gauge write happens before the store replace; a sink
    /// failure is logged and never blocks the snapshot update. If
    /// anything in a round does fail, the previous snapshot stays
    /// authoritative.
    pub async fn run_once(&self) -> anyhow::Result<GateSnapshot> {
        let outcome = self
            .prober
            .run_round(&self.endpoints, self.sink.as_ref())
            .await;

        if let Err(e) = self.sink.set_gate(outcome.overall_ok) {
            warn!(error = %e, "failed to record gate gauge");
        }

        let snapshot = GateSnapshot::from_round(outcome.overall_ok, epoch_secs());
        self.store.replace(snapshot.clone());

        debug!(
            can_deploy = snapshot.can_deploy,
            endpoints = outcome.results.len(),
            "check round completed"
        );
        Ok(snapshot)
    }

    /// Run rounds until the shutdown signal fires.
    ///
    /// Sleeps `interval` after each round completes; timing is not
    /// drift-corrected. A round error is caught here, at the round
    /// boundary, so one bad round never terminates the loop.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        info!(
            interval_secs = self.interval.as_secs(),
            endpoints = self.endpoints.len(),
            "gate monitor started"
        );

        loop {
            if let Err(e) = self.run_once().await {
                error!(error = %e, "check round failed; keeping previous snapshot");
            }

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = shutdown.changed() => {
                    info!("gate monitor shutting down");
                    break;
                }
            }
        }
    }
}

fn epoch_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
