//! The aggregate gate snapshot.

use serde::{Deserialize, Serialize};

/// Aggregate state visible to readers.
///
/// Replaced wholesale at the end of each round, never field-by-field.
/// `can_deploy` always equals `last_overall_ok` once the first round
/// has completed; before that the gate is closed and both trailing
/// fields are absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateSnapshot {
    /// True = gate open, deployment permitted.
    pub can_deploy: bool,
    /// Unix epoch seconds of the most recently completed round.
    pub last_check_epoch: Option<u64>,
    /// Outcome of the most recently completed round.
    pub last_overall_ok: Option<bool>,
}

impl GateSnapshot {
    /// The pre-first-round snapshot: gate closed, nothing recorded.
    pub fn closed() -> Self {
        Self {
            can_deploy: false,
            last_check_epoch: None,
            last_overall_ok: None,
        }
    }

    /// Build the snapshot for a completed round.
    pub fn from_round(overall_ok: bool, epoch: u64) -> Self {
        Self {
            can_deploy: overall_ok,
            last_check_epoch: Some(epoch),
            last_overall_ok: Some(overall_ok),
        }
    }
}

impl Default for GateSnapshot {
    fn default() -> Self {
        Self::closed()
    }
}
