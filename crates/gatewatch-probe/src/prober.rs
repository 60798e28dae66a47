//! Probe execution.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use gatewatch_core::{CheckResult, Endpoint, GateMetrics};

/// Result of one complete pass over the configured endpoints.
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    /// Per-endpoint results, in configured endpoint order.
    pub results: Vec<CheckResult>,
    /// AND over every endpoint's healthy flag.
    pub overall_ok: bool,
}

/// Issues probe requests with a hard per-request timeout.
///
/// Redirects are not followed: a 3xx answer is a non-2xx status and
/// classifies the endpoint as not healthy.
#[derive(Debug, Clone)]
pub struct Prober {
    client: reqwest::Client,
}

impl Prober {
    /// Build a prober whose every request is bounded by `timeout`.
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .user_agent("gatewatch/0.1")
            .build()?;
        Ok(Self { client })
    }

    /// Probe a single endpoint.
    ///
    /// Latency is wall-clock elapsed time at the point the attempt
    /// resolved, for success and failure alike; a timed-out request
    /// therefore reports roughly the timeout bound.
    pub async fn probe(&self, endpoint: &Endpoint) -> CheckResult {
        let start = Instant::now();

        let healthy = match self.client.get(endpoint.url()).send().await {
            Ok(resp) => {
                let ok = resp.status().is_success();
                if !ok {
                    debug!(status = %resp.status(), url = %endpoint, "probe returned non-2xx");
                }
                ok
            }
            Err(e) => {
                debug!(error = %e, url = %endpoint, "probe request failed");
                false
            }
        };

        CheckResult {
            endpoint: endpoint.clone(),
            healthy,
            latency: start.elapsed(),
        }
    }

    /// Run one round over every endpoint, in order.
    ///
    /// The up/down gauge and latency observation are written through
    /// `sink` for every endpoint before the next one is probed,
    /// whatever the round's eventual aggregate turns out to be. Sink
    /// write errors are logged and do not abort the round.
    pub async fn run_round(
        &self,
        endpoints: &[Endpoint],
        sink: &dyn GateMetrics,
    ) -> RoundOutcome {
        let mut results = Vec::with_capacity(endpoints.len());
        let mut overall_ok = true;

        for endpoint in endpoints {
            let result = self.probe(endpoint).await;

            if let Err(e) = sink.set_up(endpoint, result.healthy) {
                warn!(error = %e, url = %endpoint, "failed to record up/down gauge");
            }
            if let Err(e) = sink.observe_latency(endpoint, result.latency) {
                warn!(error = %e, url = %endpoint, "failed to record latency");
            }

            overall_ok &= result.healthy;
            results.push(result);
        }

        RoundOutcome {
            results,
            overall_ok,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;

    /// Spawn a throwaway server answering every request with `status`.
    async fn serve_status(status: StatusCode) -> String {
        let app = Router::new().route("/", get(move || async move { status }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/")
    }

    /// Spawn a server that stalls longer than any test timeout.
    async fn serve_slow() -> String {
        let app = Router::new().route(
            "/",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                StatusCode::OK
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/")
    }

    /// Sink double that records every write.
    #[derive(Default)]
    struct RecordingSink {
        up: Mutex<Vec<(String, bool)>>,
        latencies: Mutex<Vec<(String, Duration)>>,
    }

    impl GateMetrics for RecordingSink {
        fn set_up(&self, endpoint: &Endpoint, up: bool) -> anyhow::Result<()> {
            self.up.lock().unwrap().push((endpoint.url().to_string(), up));
            Ok(())
        }

        fn observe_latency(&self, endpoint: &Endpoint, latency: Duration) -> anyhow::Result<()> {
            self.latencies
                .lock()
                .unwrap()
                .push((endpoint.url().to_string(), latency));
            Ok(())
        }

        fn set_gate(&self, _can_deploy: bool) -> anyhow::Result<()> {
            Ok(())
        }
    }

    /// Sink double whose every write fails.
    struct FailingSink;

    impl GateMetrics for FailingSink {
        fn set_up(&self, _: &Endpoint, _: bool) -> anyhow::Result<()> {
            anyhow::bail!("sink unavailable")
        }

        fn observe_latency(&self, _: &Endpoint, _: Duration) -> anyhow::Result<()> {
            anyhow::bail!("sink unavailable")
        }

        fn set_gate(&self, _: bool) -> anyhow::Result<()> {
            anyhow::bail!("sink unavailable")
        }
    }

    fn prober(timeout_ms: u64) -> Prober {
        Prober::new(Duration::from_millis(timeout_ms)).unwrap()
    }

    #[tokio::test]
    async fn probe_2xx_is_healthy() {
        let url = serve_status(StatusCode::OK).await;
        let result = prober(1000).probe(&Endpoint::new(&url)).await;
        assert!(result.healthy);
    }

    #[tokio::test]
    async fn probe_500_is_unhealthy() {
        let url = serve_status(StatusCode::INTERNAL_SERVER_ERROR).await;
        let result = prober(1000).probe(&Endpoint::new(&url)).await;
        assert!(!result.healthy);
    }

    #[tokio::test]
    async fn probe_301_is_unhealthy() {
        // Redirects are not followed; 301 is a non-2xx answer.
        let url = serve_status(StatusCode::MOVED_PERMANENTLY).await;
        let result = prober(1000).probe(&Endpoint::new(&url)).await;
        assert!(!result.healthy);
    }

    #[tokio::test]
    async fn probe_connection_refused_is_unhealthy() {
        // Nothing listens on port 1.
        let result = prober(500).probe(&Endpoint::new("http://127.0.0.1:1/")).await;
        assert!(!result.healthy);
    }

    #[tokio::test]
    async fn probe_timeout_is_unhealthy_with_bounded_latency() {
        let url = serve_slow().await;
        let result = prober(200).probe(&Endpoint::new(&url)).await;

        assert!(!result.healthy);
        // Elapsed at the failure point: about the timeout bound, plus
        // scheduling slack, and well under the server's stall.
        assert!(result.latency >= Duration::from_millis(150));
        assert!(result.latency <= Duration::from_millis(1500));
    }

    #[tokio::test]
    async fn round_all_healthy_opens_the_gate() {
        let urls = [
            serve_status(StatusCode::OK).await,
            serve_status(StatusCode::CREATED).await,
            serve_status(StatusCode::NO_CONTENT).await,
        ];
        let endpoints: Vec<_> = urls.iter().map(Endpoint::new).collect();
        let sink = RecordingSink::default();

        let outcome = prober(1000).run_round(&endpoints, &sink).await;

        assert!(outcome.overall_ok);
        assert_eq!(outcome.results.len(), 3);
        assert!(outcome.results.iter().all(|r| r.healthy));
    }

    #[tokio::test]
    async fn round_single_failure_closes_the_gate() {
        let endpoints = vec![
            Endpoint::new(serve_status(StatusCode::OK).await),
            Endpoint::new("http://127.0.0.1:1/"),
            Endpoint::new(serve_status(StatusCode::OK).await),
        ];
        let sink = RecordingSink::default();

        let outcome = prober(500).run_round(&endpoints, &sink).await;

        assert!(!outcome.overall_ok);
        assert!(!outcome.results[1].healthy);
    }

    #[tokio::test]
    async fn round_results_follow_configured_order() {
        let first = serve_status(StatusCode::OK).await;
        let second = serve_status(StatusCode::OK).await;
        let endpoints = vec![Endpoint::new(&first), Endpoint::new(&second)];
        let sink = RecordingSink::default();

        let outcome = prober(1000).run_round(&endpoints, &sink).await;

        assert_eq!(outcome.results[0].endpoint.url(), first);
        assert_eq!(outcome.results[1].endpoint.url(), second);
    }

    #[tokio::test]
    async fn round_writes_sink_for_every_endpoint() {
        let endpoints = vec![
            Endpoint::new(serve_status(StatusCode::OK).await),
            Endpoint::new("http://127.0.0.1:1/"),
        ];
        let sink = RecordingSink::default();

        prober(500).run_round(&endpoints, &sink).await;

        // Both endpoints get gauge and latency writes, healthy or not.
        assert_eq!(sink.up.lock().unwrap().len(), 2);
        assert_eq!(sink.latencies.lock().unwrap().len(), 2);
        let up = sink.up.lock().unwrap();
        assert!(up[0].1);
        assert!(!up[1].1);
    }

    #[tokio::test]
    async fn round_latencies_are_nonnegative() {
        let endpoints = vec![Endpoint::new(serve_status(StatusCode::OK).await)];
        let sink = RecordingSink::default();

        let outcome = prober(1000).run_round(&endpoints, &sink).await;
        assert!(outcome.results[0].latency >= Duration::ZERO);
    }

    #[tokio::test]
    async fn round_survives_failing_sink() {
        let endpoints = vec![
            Endpoint::new(serve_status(StatusCode::OK).await),
            Endpoint::new(serve_status(StatusCode::OK).await),
        ];

        let outcome = prober(1000).run_round(&endpoints, &FailingSink).await;

        // Sink failures are logged, not raised; the round still yields
        // its full result set.
        assert!(outcome.overall_ok);
        assert_eq!(outcome.results.len(), 2);
    }
}
