//! The metrics sink boundary.
//!
//! The prober and scheduler write observations through this trait
//! rather than touching a concrete registry, so the core loop can be
//! tested against recording or failing doubles.

use std::time::Duration;

use crate::types::Endpoint;

/// Write side of the metrics registry.
///
/// Implementations must be internally concurrency-safe. Write failures
/// are recoverable: callers log them and carry on with the round.
pub trait GateMetrics: Send + Sync {
    /// Record whether an endpoint answered with a 2xx this round.
    fn set_up(&self, endpoint: &Endpoint, up: bool) -> anyhow::Result<()>;

    /// Record the wall-clock latency of one probe attempt.
    fn observe_latency(&self, endpoint: &Endpoint, latency: Duration) -> anyhow::Result<()>;

    /// Record the aggregate deploy-gate decision.
    fn set_gate(&self, can_deploy: bool) -> anyhow::Result<()>;
}
