//! reservation-planner library
//!
//! Data access layer over SQLite plus the JSON route layer. The binary wires
//! them together after running the destructive schema bootstrap; tests drive
//! the router directly against an in-memory store.

use axum::routing::{delete, get, post};
use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod bootstrap;
pub mod db;
pub mod error;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Store handle; a single pooled connection owned by the process
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
///
/// Every route performs exactly one data-access call; failures funnel
/// through the response mapping on [`error::Error`].
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/customers",
            get(api::list_customers).post(api::create_customer),
        )
        .route(
            "/api/restaurants",
            get(api::list_restaurants).post(api::create_restaurant),
        )
        .route("/api/reservations", get(api::list_reservations))
        .route(
            "/api/customers/:id/reservations",
            post(api::create_reservation),
        )
        .route("/api/reservations/:id", delete(api::delete_reservation))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
