use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use roster_db::repositories::InMemoryStore;
use roster_notify::{
    LogNotifier, MonitorConfig, Notifier, SlackConfig, SlackNotifier, ThresholdMonitor,
};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster_api::config::ServerConfig;
use roster_api::router::build_app_router;
use roster_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "roster_api=debug,roster_notify=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Record store ---
    let state = match config.database_url.clone() {
        Some(database_url) => {
            let pool = roster_db::create_pool(&database_url)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            roster_db::health_check(&pool)
                .await
                .expect("Database health check failed");
            tracing::info!("Database health check passed");

            roster_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            AppState::with_pool(pool, config.clone())
        }
        None => {
            tracing::warn!("DATABASE_URL not set, records are kept in memory only");
            AppState::in_memory(Arc::new(InMemoryStore::new()), config.clone())
        }
    };

    // --- Notifier ---
    let notifier: Arc<dyn Notifier> = match SlackConfig::from_env() {
        Some(slack) => {
            tracing::info!(api_url = %slack.api_url, "Slack notifications enabled");
            Arc::new(SlackNotifier::new(slack).expect("Failed to build Slack HTTP client"))
        }
        None => {
            tracing::warn!("SLACK_BOT_TOKEN not set, threshold alerts will only be logged");
            Arc::new(LogNotifier)
        }
    };

    // --- Threshold monitor ---
    let monitor_cancel = CancellationToken::new();
    let monitor = ThresholdMonitor::new(
        Arc::clone(&state.thresholds),
        notifier,
        MonitorConfig::from_env(),
    );
    let monitor_handle = tokio::spawn(monitor.run(monitor_cancel.clone()));

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    monitor_cancel.cancel();
    let shutdown_timeout = Duration::from_secs(config.shutdown_timeout_secs);
    if tokio::time::timeout(shutdown_timeout, monitor_handle)
        .await
        .is_err()
    {
        tracing::warn!("Threshold monitor did not stop in time");
    } else {
        tracing::info!("Threshold monitor stopped");
    }

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
