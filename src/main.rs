mod cli;
mod config;
mod error;
mod monitor;
mod mpris;
mod sink;
mod track;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::Config;
use monitor::Monitor;
use mpris::BusClient;
use sink::FileSink;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?.with_overrides(&cli);

    info!(
        "Watching {} every {}s, writing {}",
        config.player.bus_name,
        config.poll.interval_secs,
        config.output.path.display()
    );

    // The listener is installed before the loop starts, so a signal is
    // never lost: it latches the flag and the loop observes it at the top
    // of the next cycle.
    let stop = Arc::new(AtomicBool::new(false));
    let stop_on_signal = Arc::clone(&stop);
    tokio::spawn(async move {
        shutdown_signal().await;
        stop_on_signal.store(true, Ordering::SeqCst);
    });

    let source = BusClient::connect(&config.player.bus_name)
        .await
        .with_context(|| "Failed to connect to the session bus")?;
    let sink = FileSink::new(config.output.path.clone());

    let mut monitor = Monitor::new(source, sink, config.poll.interval(), stop);

    // No retry: a fetch or publish failure ends the process.
    if let Err(e) = monitor.run().await {
        error!("Monitor stopped: {e}");
        std::process::exit(1);
    }

    info!("Shut down cleanly");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
