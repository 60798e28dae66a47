//! gatewatch-dashboard — server-rendered status page.
//!
//! A single page that shows the current deploy-gate state and the time
//! of the last check, read from the `GateStore`, with an optional
//! externally hosted charts dashboard embedded in an iframe. The
//! embedded URL is display-only and never probed.

pub mod pages;
pub mod views;

use axum::Router;
use axum::routing::get;
use gatewatch_state::GateStore;

/// Shared state for dashboard handlers.
#[derive(Clone)]
pub struct DashboardState {
    pub store: GateStore,
    /// Externally hosted dashboard to embed, if configured.
    pub dashboard_url: Option<String>,
}

/// Build the dashboard router.
pub fn dashboard_router(state: DashboardState) -> Router {
    Router::new().route("/", get(pages::index)).with_state(state)
}
