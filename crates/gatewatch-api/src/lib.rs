//! gatewatch-api — the inbound HTTP surface.
//!
//! Axum routes backed by the gate store and metrics registry. Handlers
//! only take the store's read path; they are fully decoupled in time
//! from the check loop and never answer 5xx because of probe outcomes.
//!
//! # Routes
//!
//! | Method | Path | Description |
//! |---|---|---|
//! | GET | `/` | HTML status page (gate + last check + embedded dashboard) |
//! | GET | `/metrics` | Prometheus text exposition |
//! | GET | `/api/gate` | `{"can_deploy": <bool>}` for CI/CD gate queries |

pub mod handlers;

use axum::Router;
use axum::routing::get;

use gatewatch_dashboard::DashboardState;
use gatewatch_metrics::MetricsRegistry;
use gatewatch_state::GateStore;

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    pub store: GateStore,
    pub metrics: MetricsRegistry,
}

/// Build the complete router (status page + metrics + gate API).
pub fn build_router(
    store: GateStore,
    metrics: MetricsRegistry,
    dashboard_url: Option<String>,
) -> Router {
    let api_state = ApiState {
        store: store.clone(),
        metrics,
    };

    let dashboard_state = DashboardState {
        store,
        dashboard_url,
    };

    let api = Router::new()
        .route("/api/gate", get(handlers::api_gate))
        .route("/metrics", get(handlers::prometheus_metrics))
        .with_state(api_state);

    Router::new()
        .merge(gatewatch_dashboard::dashboard_router(dashboard_state))
        .merge(api)
}
