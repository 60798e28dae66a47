//! gatewatch-scheduler — the periodic check loop.
//!
//! A single `Monitor` task owns the write side of the gate: once per
//! interval it runs a probe round, pushes the aggregate gate gauge to
//! the metrics sink, and replaces the store snapshot. A failed round is
//! logged and skipped; the loop itself never exits on error, only on
//! the shutdown signal.

pub mod monitor;

pub use monitor::Monitor;
