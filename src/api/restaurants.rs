//! Restaurant endpoints

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::db::restaurants::{self, Restaurant};
use crate::error::Error;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateRestaurantRequest {
    pub name: Option<String>,
}

/// GET /api/restaurants - Returns an array of restaurants
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Vec<Restaurant>>, Error> {
    let restaurants = restaurants::fetch_restaurants(&state.db).await?;
    Ok(Json(restaurants))
}

/// POST /api/restaurants - Creates a new restaurant
pub async fn create_restaurant(
    State(state): State<AppState>,
    Json(req): Json<CreateRestaurantRequest>,
) -> Result<(StatusCode, Json<Restaurant>), Error> {
    let restaurant = restaurants::create_restaurant(&state.db, req.name.as_deref()).await?;
    Ok((StatusCode::CREATED, Json(restaurant)))
}
