//! Reservation Planner - HTTP JSON API over a relational store
//!
//! Boot sequence: connect to the store, destructively recreate the schema,
//! seed fixture rows, then serve. Any failure before the listener binds
//! exits the process nonzero; there is no retry.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reservation_planner::{bootstrap, build_router, db, AppState};

/// Command-line arguments for reservation-planner
#[derive(Parser, Debug)]
#[command(name = "reservation-planner")]
#[command(about = "Reservation booking HTTP API")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000", env = "PORT")]
    port: u16,

    /// Store connection string
    #[arg(
        long,
        default_value = "sqlite://reservations.db?mode=rwc",
        env = "DATABASE_URL"
    )]
    database_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reservation_planner=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!(
        "Starting Reservation Planner v{}",
        env!("CARGO_PKG_VERSION")
    );

    let pool = db::connect(&args.database_url)
        .await
        .context("Failed to connect to the store")?;
    info!("Connected to store: {}", args.database_url);

    db::init_schema(&pool)
        .await
        .context("Failed to initialize schema")?;

    bootstrap::run(&pool)
        .await
        .context("Failed to seed the store")?;

    let state = AppState::new(pool);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
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
