//! HTTP handlers.
//!
//! Each handler reads via `GateStore` or `MetricsRegistry` and renders
//! its response; none of them can fail on probe outcomes.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::ApiState;

/// Body of `GET /api/gate`, consumed by CI/CD gate checks.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct GateResponse {
    pub can_deploy: bool,
}

/// GET /api/gate
pub async fn api_gate(State(state): State<ApiState>) -> Json<GateResponse> {
    let snapshot = state.store.read();
    Json(GateResponse {
        can_deploy: snapshot.can_deploy,
    })
}

/// GET /metrics
pub async fn prometheus_metrics(State(state): State<ApiState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use gatewatch_core::{Endpoint, GateMetrics};
    use gatewatch_metrics::MetricsRegistry;
    use gatewatch_state::{GateSnapshot, GateStore};

    fn test_state() -> ApiState {
        ApiState {
            store: GateStore::new(),
            metrics: MetricsRegistry::new(),
        }
    }

    #[tokio::test]
    async fn gate_defaults_closed() {
        let state = test_state();
        let Json(body) = api_gate(State(state)).await;
        assert!(!body.can_deploy);
    }

    #[tokio::test]
    async fn gate_reflects_latest_snapshot() {
        let state = test_state();
        state.store.replace(GateSnapshot::from_round(true, 1000));

        let Json(body) = api_gate(State(state)).await;
        assert!(body.can_deploy);
    }

    #[tokio::test]
    async fn gate_response_serializes_as_expected() {
        let json = serde_json::to_string(&GateResponse { can_deploy: true }).unwrap();
        assert_eq!(json, r#"{"can_deploy":true}"#);
    }

    #[tokio::test]
    async fn metrics_endpoint_returns_exposition_text() {
        let state = test_state();
        state
            .metrics
            .set_up(&Endpoint::new("https://a"), true)
            .unwrap();
        state
            .metrics
            .observe_latency(&Endpoint::new("https://a"), Duration::from_millis(120))
            .unwrap();

        let resp = prometheus_metrics(State(state)).await.into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let content_type = resp
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.contains("text/plain"));
    }
}
