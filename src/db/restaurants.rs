//! Restaurant database operations
//!
//! Same lifecycle shape as customers: created via API, never updated,
//! removed only by schema recreate.

use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::error::Result;

/// Restaurant record
#[derive(Debug, Clone, Serialize)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
}

fn restaurant_from_row(row: &SqliteRow) -> Result<Restaurant> {
    let id: String = row.get("id");

    Ok(Restaurant {
        id: Uuid::parse_str(&id)?,
        name: row.get("name"),
    })
}

/// Fetch every restaurant, in store-native order.
pub async fn fetch_restaurants(pool: &SqlitePool) -> Result<Vec<Restaurant>> {
    let rows = sqlx::query("SELECT id, name FROM restaurants")
        .fetch_all(pool)
        .await?;

    rows.iter().map(restaurant_from_row).collect()
}

/// Insert one restaurant and return the created row with its generated id.
pub async fn create_restaurant(pool: &SqlitePool, name: Option<&str>) -> Result<Restaurant> {
    let row = sqlx::query("INSERT INTO restaurants (name) VALUES (?) RETURNING id, name")
        .bind(name)
        .fetch_one(pool)
        .await?;

    restaurant_from_row(&row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[tokio::test]
    async fn create_and_fetch_restaurant() {
        let pool = db::connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory store");
        db::init_schema(&pool).await.expect("Failed to create schema");

        let restaurant = create_restaurant(&pool, Some("Pizza Place"))
            .await
            .expect("Failed to create restaurant");
        assert_eq!(restaurant.name, "Pizza Place");

        let all = fetch_restaurants(&pool).await.expect("Failed to fetch");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, restaurant.id);
    }
}
