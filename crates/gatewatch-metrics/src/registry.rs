//! The metrics registry — a concurrency-safe accumulator.
//!
//! Gauges hold the value from the most recent write; the latency
//! summary accumulates a count and a running sum per endpoint, matching
//! the Prometheus summary convention.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use gatewatch_core::{Endpoint, GateMetrics};

/// Accumulated latency observations for one endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LatencySummary {
    pub count: u64,
    pub sum_seconds: f64,
}

#[derive(Debug, Default)]
struct Inner {
    /// url → most recent up/down observation.
    up: BTreeMap<String, bool>,
    /// url → accumulated latency summary.
    latency: BTreeMap<String, LatencySummary>,
    /// Most recent gate decision; absent before the first round.
    gate: Option<bool>,
}

/// Point-in-time copy of every recorded value, in stable (sorted
/// by url) order for deterministic exposition.
#[derive(Debug, Clone)]
pub struct MetricsExport {
    pub up: Vec<(String, bool)>,
    pub latency: Vec<(String, LatencySummary)>,
    pub gate: Option<bool>,
}

/// Shared-handle metrics accumulator.
///
/// `Clone` hands out another handle to the same underlying values.
#[derive(Debug, Clone, Default)]
pub struct MetricsRegistry {
    inner: Arc<RwLock<Inner>>,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy out all recorded values for exposition.
    pub fn export(&self) -> MetricsExport {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        MetricsExport {
            up: inner.up.iter().map(|(k, v)| (k.clone(), *v)).collect(),
            latency: inner.latency.iter().map(|(k, v)| (k.clone(), *v)).collect(),
            gate: inner.gate,
        }
    }

    /// Render everything in Prometheus text format.
    pub fn render(&self) -> String {
        crate::prometheus::render_exposition(&self.export())
    }
}

impl GateMetrics for MetricsRegistry {
    fn set_up(&self, endpoint: &Endpoint, up: bool) -> anyhow::Result<()> {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        inner.up.insert(endpoint.url().to_string(), up);
        Ok(())
    }

    fn observe_latency(&self, endpoint: &Endpoint, latency: Duration) -> anyhow::Result<()> {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let summary = inner
            .latency
            .entry(endpoint.url().to_string())
            .or_default();
        summary.count += 1;
        summary.sum_seconds += latency.as_secs_f64();
        Ok(())
    }

    fn set_gate(&self, can_deploy: bool) -> anyhow::Result<()> {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        inner.gate = Some(can_deploy);
        Ok(())
    }
}
