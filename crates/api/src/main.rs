//! `petcatalog-api`: serves the pet catalog over HTTP.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use petcatalog_api::config::ServerConfig;
use petcatalog_api::router::build_app_router;
use petcatalog_api::state::AppState;
use petcatalog_db::DbPool;

const DEFAULT_LOG_FILTER: &str = "petcatalog_api=debug,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    let pool = open_store(&config).await;

    let ip = config.host.parse().expect("HOST must be an IP address");
    let addr = SocketAddr::new(ip, config.port);
    let listener = TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Cannot listen on {addr}: {e}"));
    tracing::info!(%addr, "Pet catalog listening");

    let app = build_app_router(AppState { pool: pool.clone() }, &config);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");

    pool.close().await;
    tracing::info!("Stopped");
}

/// `RUST_LOG` wins over the built-in filter.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Open the record store, verify it answers, and bring its schema up to date.
async fn open_store(config: &ServerConfig) -> DbPool {
    let pool = petcatalog_db::create_pool(&config.database_url)
        .await
        .unwrap_or_else(|e| panic!("Cannot open {}: {e}", config.database_url));

    petcatalog_db::health_check(&pool)
        .await
        .expect("Record store did not answer");
    petcatalog_db::run_migrations(&pool)
        .await
        .expect("Schema migration failed");

    tracing::info!(database_url = %config.database_url, "Record store ready");
    pool
}

/// Resolves on Ctrl-C, or on SIGTERM where signals exist.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => tracing::info!("Interrupted, shutting down"),
        () = terminate => tracing::info!("Terminated, shutting down"),
    }
}
