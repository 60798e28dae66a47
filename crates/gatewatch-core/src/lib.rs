//! gatewatch-core — shared foundation for the gatewatch daemon.
//!
//! Holds the configuration parser (`gatewatch.toml`), the probe domain
//! types (`Endpoint`, `CheckResult`), and the `GateMetrics` trait that
//! the prober and scheduler write observations through. The concrete
//! metrics registry lives in `gatewatch-metrics`; keeping the trait here
//! lets the probe and scheduler crates take any sink implementation,
//! including test doubles.

pub mod config;
pub mod sink;
pub mod types;

pub use config::{ConfigError, GatewatchConfig, MonitorConfig};
pub use sink::GateMetrics;
pub use types::{CheckResult, Endpoint};
