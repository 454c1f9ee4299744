//! Customer endpoints

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::db::customers::{self, Customer};
use crate::error::Error;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    /// Absent name passes through as NULL for the store to reject
    pub name: Option<String>,
}

/// GET /api/customers - Returns an array of customers
pub async fn list_customers(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, Error> {
    let customers = customers::fetch_customers(&state.db).await?;
    Ok(Json(customers))
}

/// POST /api/customers - Creates a new customer
pub async fn create_customer(
    State(state): State<AppState>,
    Json(req): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<Customer>), Error> {
    let customer = customers::create_customer(&state.db, req.name.as_deref()).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}
