//! Prometheus text exposition format.
//!
//! Renders the registry contents into the Prometheus text exposition
//! format for scraping by a Prometheus server or compatible agent.

use crate::registry::MetricsExport;

/// Render a metrics export into Prometheus text format.
///
/// Produces `endpoint_up` and `monitor_can_deploy` gauges and the
/// `endpoint_latency_seconds` summary, all labelled by `url` where
/// applicable. The gate gauge renders `0` before the first round
/// completes (default-closed).
pub fn render_exposition(export: &MetricsExport) -> String {
    let mut out = String::new();

    out.push_str("# HELP endpoint_up 1 if endpoint is up (2xx), else 0\n");
    out.push_str("# TYPE endpoint_up gauge\n");
    for (url, up) in &export.up {
        out.push_str(&format!(
            "endpoint_up{{url=\"{}\"}} {}\n",
            escape_label(url),
            if *up { 1 } else { 0 }
        ));
    }

    out.push_str("# HELP endpoint_latency_seconds HTTP request latency in seconds\n");
    out.push_str("# TYPE endpoint_latency_seconds summary\n");
    for (url, summary) in &export.latency {
        out.push_str(&format!(
            "endpoint_latency_seconds_count{{url=\"{}\"}} {}\n",
            escape_label(url),
            summary.count
        ));
        out.push_str(&format!(
            "endpoint_latency_seconds_sum{{url=\"{}\"}} {:.6}\n",
            escape_label(url),
            summary.sum_seconds
        ));
    }

    out.push_str("# HELP monitor_can_deploy Deployment gate flag (1 = can deploy, 0 = do not deploy)\n");
    out.push_str("# TYPE monitor_can_deploy gauge\n");
    out.push_str(&format!(
        "monitor_can_deploy {}\n",
        if export.gate.unwrap_or(false) { 1 } else { 0 }
    ));

    out
}

/// Escape a label value per the exposition format rules.
fn escape_label(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
