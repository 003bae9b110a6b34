//! # Order Dispatch Server
//!
//! Runs the dispatcher behind the HTTP API until Ctrl+C or SIGTERM, then shuts
//! down in order: stop accepting requests, close the dispatcher, drain the
//! result logger.
//!
//! ## Usage
//!
//! ```bash
//! # Defaults: 10 workers, queue capacity 100, listening on 0.0.0.0:8080
//! cargo run --bin order-dispatch-server
//!
//! # With a configuration file and an environment override
//! ORDER_DISPATCH_CONFIG=config/dispatch.toml \
//! ORDER_DISPATCH__DISPATCHER__WORKER_COUNT=4 \
//!     cargo run --bin order-dispatch-server
//! ```

use anyhow::{anyhow, Context};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use order_dispatch::config::ConfigManager;
use order_dispatch::consumer::spawn_result_logger;
use order_dispatch::dispatcher::Dispatcher;
use order_dispatch::logging;
use order_dispatch::web::{create_app, AppState};

/// Path of an optional configuration file
const CONFIG_FILE_ENV: &str = "ORDER_DISPATCH_CONFIG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_structured_logging();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        build_mode = if cfg!(debug_assertions) { "debug" } else { "release" },
        "Starting order dispatch server"
    );

    let config_file = env::var_os(CONFIG_FILE_ENV).map(PathBuf::from);
    let config_manager =
        ConfigManager::load(config_file.as_deref()).context("Failed to load configuration")?;
    let config = config_manager.config().clone();

    let dispatcher = Arc::new(
        Dispatcher::with_simulated_processing(config.dispatcher.clone())
            .context("Failed to start dispatcher")?,
    );
    let results = dispatcher
        .take_results()
        .ok_or_else(|| anyhow!("result stream already taken"))?;
    let consumer = spawn_result_logger(results).context("Failed to start result logger")?;

    let app = create_app(Arc::new(AppState::new(Arc::clone(&dispatcher))));
    let listener = TcpListener::bind(&config.web.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.web.bind_address))?;

    info!(
        bind_address = %config.web.bind_address,
        environment = config_manager.environment(),
        workers = dispatcher.worker_count(),
        buffer_capacity = dispatcher.capacity(),
        "Order dispatch server listening; press Ctrl+C to shut down"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("HTTP server stopped, closing dispatcher");

    let closing = Arc::clone(&dispatcher);
    let report = tokio::task::spawn_blocking(move || closing.close()).await??;
    info!(
        workers_stopped = report.workers_stopped,
        workers_panicked = report.workers_panicked,
        orders_abandoned = report.orders_abandoned,
        "Dispatcher closed"
    );

    let summary = tokio::task::spawn_blocking(move || consumer.join())
        .await?
        .map_err(|_| anyhow!("result logger panicked"))?;

    let stats = dispatcher.stats();
    info!(
        delivered = summary.delivered,
        succeeded = summary.succeeded,
        failed = summary.failed,
        total_processed = stats.total_processed,
        average_process_time_ms = stats.average_process_time_ms,
        uptime_seconds = stats.uptime_seconds,
        "Order dispatch server shutdown complete"
    );

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C");
        },
        _ = terminate => {
            info!("Received SIGTERM");
        },
    }
}
