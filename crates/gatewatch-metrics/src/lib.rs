//! gatewatch-metrics — observability for the probe loop.
//!
//! Tracks per-endpoint up/down gauges and latency summaries plus the
//! aggregate deploy-gate gauge, and renders them in the Prometheus text
//! exposition format for the `/metrics` endpoint.
//!
//! # Architecture
//!
//! ```text
//! MetricsRegistry (implements gatewatch_core::GateMetrics)
//!   ├── set_up() / observe_latency() ← written by the prober per endpoint
//!   ├── set_gate()                   ← written by the scheduler per round
//!   └── export() → MetricsExport
//!
//! Prometheus exposition
//!   └── render_exposition() → text/plain for /metrics
//! ```

pub mod prometheus;
pub mod registry;

pub use prometheus::render_exposition;
pub use registry::{LatencySummary, MetricsExport, MetricsRegistry};
