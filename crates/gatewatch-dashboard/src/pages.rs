//! Status page handler.

use askama::Template;
use axum::extract::State;
use axum::response::Html;

use crate::DashboardState;
use crate::views::GateView;

fn render<T: Template>(tmpl: T) -> Html<String> {
    Html(
        tmpl.render()
            .unwrap_or_else(|e| format!("<pre>Template error: {e}</pre>")),
    )
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    gate: GateView,
    dashboard_url: Option<String>,
}

/// GET / — the status page.
pub async fn index(State(state): State<DashboardState>) -> Html<String> {
    let snapshot = state.store.read();

    render(IndexTemplate {
        gate: GateView::from_snapshot(&snapshot),
        dashboard_url: state.dashboard_url.clone(),
    })
}
