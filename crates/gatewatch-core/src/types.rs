//! Probe domain types.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A probe target URL. Immutable after configuration load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn url(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a single probe attempt against one endpoint.
///
/// Produced fresh each round; consumed by the metrics sink and folded
/// into the round's aggregate, never retained across rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub endpoint: Endpoint,
    /// True iff a response arrived with a 2xx status.
    pub healthy: bool,
    /// Wall-clock elapsed time, measured at the point the attempt
    /// resolved (success, error, or timeout).
    pub latency: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_display_is_url() {
        let ep = Endpoint::new("https://example.com/healthz");
        assert_eq!(ep.to_string(), "https://example.com/healthz");
        assert_eq!(ep.url(), "https://example.com/healthz");
    }

    #[test]
    fn endpoint_serializes_transparently() {
        let ep = Endpoint::new("https://example.com");
        let json = serde_json::to_string(&ep).unwrap();
        assert_eq!(json, "\"https://example.com\"");
        let back: Endpoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ep);
    }
}
