//! gatewatchd — the gatewatch daemon.
//!
//! Single binary that assembles the monitor subsystems:
//! - Gate store (in-memory snapshot)
//! - Metrics registry
//! - Prober + background check loop
//! - HTTP surface (status page, /metrics, /api/gate)
//!
//! # Usage
//!
//! ```text
//! gatewatchd run --config gatewatch.toml --port 8080
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::sync::watch;
use tracing::info;

use gatewatch_core::GatewatchConfig;
use gatewatch_metrics::MetricsRegistry;
use gatewatch_probe::Prober;
use gatewatch_scheduler::Monitor;
use gatewatch_state::GateStore;

#[derive(Parser)]
#[command(name = "gatewatchd", about = "Deploy-gate health monitor daemon")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the check loop and the HTTP server.
    Run {
        /// Path to the configuration file.
        #[arg(long, default_value = "gatewatch.toml")]
        config: PathBuf,

        /// Port to listen on.
        #[arg(long, default_value = "8080")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,gatewatchd=debug,gatewatch=debug".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run { config, port } => run(config, port).await,
    }
}

async fn run(config_path: PathBuf, port: u16) -> anyhow::Result<()> {
    info!("gatewatch daemon starting");

    // Invalid configuration is fatal; the daemon must not begin
    // serving a gate it cannot evaluate.
    let config = GatewatchConfig::from_file(&config_path)?;
    let interval = config.check_interval()?;
    let timeout = config.probe_timeout()?;

    info!(
        path = ?config_path,
        endpoints = config.monitor.endpoints.len(),
        interval_secs = interval.as_secs(),
        timeout_secs = timeout.as_secs(),
        "configuration loaded"
    );

    // ── Initialize subsystems ──────────────────────────────────

    let store = GateStore::new();
    let metrics = MetricsRegistry::new();
    let prober = Prober::new(timeout)?;

    let monitor = Monitor::new(
        config.monitor.endpoints.clone(),
        interval,
        prober,
        Arc::new(metrics.clone()),
        store.clone(),
    );

    // ── Start the check loop ───────────────────────────────────

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let monitor_handle = tokio::spawn(async move {
        monitor.run(shutdown_rx).await;
    });

    // ── Start the HTTP server ──────────────────────────────────

    let router =
        gatewatch_api::build_router(store, metrics, config.monitor.dashboard_url.clone());
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!(%addr, "HTTP server starting");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Graceful shutdown on Ctrl-C.
    let server = axum::serve(listener, router).with_graceful_shutdown(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
        info!("shutdown signal received");
        let _ = shutdown_tx.send(true);
    });

    server.await?;

    // Wait for the check loop to drain.
    let _ = monitor_handle.await;

    info!("gatewatch daemon stopped");
    Ok(())
}
