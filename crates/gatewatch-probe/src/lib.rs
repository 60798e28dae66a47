//! gatewatch-probe — HTTP health probing.
//!
//! One `Prober` performs one round at a time: a single GET per
//! configured endpoint, bounded by a hard per-request timeout, with the
//! up/down flag and latency written through the metrics sink as each
//! endpoint resolves. Transport failures never escape the prober; they
//! classify the endpoint as not healthy.

pub mod prober;

pub use prober::{Prober, RoundOutcome};
