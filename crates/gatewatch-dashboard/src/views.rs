//! View types for the status page.

use chrono::DateTime;

use gatewatch_state::GateSnapshot;

/// Display form of the gate snapshot.
#[derive(Debug, Clone)]
pub struct GateView {
    pub is_open: bool,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub last_check: String,
}

impl GateView {
    pub fn from_snapshot(snapshot: &GateSnapshot) -> Self {
        let (status_label, status_class) = if snapshot.can_deploy {
            ("OPEN (can deploy)", "ok")
        } else {
            ("CLOSED (do not deploy)", "bad")
        };

        let last_check = snapshot
            .last_check_epoch
            .and_then(|epoch| DateTime::from_timestamp(epoch as i64, 0))
            .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "n/a".to_string());

        Self {
            is_open: snapshot.can_deploy,
            status_label,
            status_class,
            last_check,
        }
    }
}
