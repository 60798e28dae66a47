//! gatewatch-state — shared deploy-gate state.
//!
//! The scheduler loop is the single writer; HTTP handlers are the
//! readers. `GateStore` hands out complete, self-consistent
//! `GateSnapshot` values — a reader never observes a mix of fields from
//! two different rounds.
//!
//! The store is `Clone` + `Send` + `Sync` (backed by `Arc<RwLock<_>>`)
//! and can be shared across async tasks. All state is in-memory and
//! reset on restart.

pub mod store;
pub mod types;

pub use store::GateStore;
pub use types::GateSnapshot;
