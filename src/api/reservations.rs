//! Reservation endpoints
//!
//! Creation hangs off the customer path so the customer reference comes from
//! the URL; everything else is body fields passed through to the store.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::db::reservations::{self, Reservation};
use crate::error::Error;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateReservationRequest {
    pub date: Option<NaiveDate>,
    pub party_count: Option<i64>,
    pub restaurant_id: Option<String>,
}

/// GET /api/reservations - Returns an array of reservations
pub async fn list_reservations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Reservation>>, Error> {
    let reservations = reservations::fetch_reservations(&state.db).await?;
    Ok(Json(reservations))
}

/// POST /api/customers/:id/reservations - Creates a new reservation
///
/// The path id is bound as-is; an unknown customer fails on the store's
/// foreign key, same as an unknown restaurant_id in the body.
pub async fn create_reservation(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
    Json(req): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<Reservation>), Error> {
    let reservation = reservations::create_reservation(
        &state.db,
        req.date,
        req.party_count,
        req.restaurant_id.as_deref(),
        &customer_id,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(reservation)))
}

/// DELETE /api/reservations/:id - Deletes a reservation
///
/// 204 with an empty body on success; an id that matches no row is 404,
/// distinguished from store failures.
pub async fn delete_reservation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, Error> {
    match reservations::delete_reservation(&state.db, &id).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(Error::NotFound("Reservation".to_string())),
    }
}
