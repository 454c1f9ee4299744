//! One-time startup seeding
//!
//! Runs after the schema recreate and before the listener binds. Any failure
//! here is fatal; the server never starts on a partially seeded store.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::info;

use crate::db;

const SEED_CUSTOMERS: [&str; 3] = ["John Doe", "Jane Doe", "John"];
const SEED_RESTAURANTS: [&str; 4] = ["McDonald", "KFC", "Burger King", "Wendys"];
const SEED_RESERVATION_DATE: &str = "2022-06-01";
const SEED_PARTY_COUNT: i64 = 1;

/// Seed the freshly recreated store: three customers, four restaurants, and
/// one reservation pairing the first fetched customer with the first fetched
/// restaurant.
pub async fn run(pool: &SqlitePool) -> Result<()> {
    for name in SEED_CUSTOMERS {
        db::customers::create_customer(pool, Some(name))
            .await
            .with_context(|| format!("Failed to seed customer '{}'", name))?;
    }

    for name in SEED_RESTAURANTS {
        db::restaurants::create_restaurant(pool, Some(name))
            .await
            .with_context(|| format!("Failed to seed restaurant '{}'", name))?;
    }

    let customers = db::customers::fetch_customers(pool)
        .await
        .context("Failed to fetch seeded customers")?;
    let restaurants = db::restaurants::fetch_restaurants(pool)
        .await
        .context("Failed to fetch seeded restaurants")?;

    let customer = customers.first().context("No seeded customers")?;
    let restaurant = restaurants.first().context("No seeded restaurants")?;

    let date: NaiveDate = SEED_RESERVATION_DATE
        .parse()
        .context("Invalid seed reservation date")?;

    db::reservations::create_reservation(
        pool,
        Some(date),
        Some(SEED_PARTY_COUNT),
        Some(&restaurant.id.to_string()),
        &customer.id.to_string(),
    )
    .await
    .context("Failed to seed reservation")?;

    info!(
        "Seeded {} customers, {} restaurants, 1 reservation",
        customers.len(),
        restaurants.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeds_fixture_rows() {
        let pool = db::connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory store");
        db::init_schema(&pool).await.expect("Failed to create schema");

        run(&pool).await.expect("Seeding failed");

        let customers = db::customers::fetch_customers(&pool).await.unwrap();
        let restaurants = db::restaurants::fetch_restaurants(&pool).await.unwrap();
        let reservations = db::reservations::fetch_reservations(&pool).await.unwrap();

        assert_eq!(customers.len(), 3);
        assert_eq!(restaurants.len(), 4);
        assert_eq!(reservations.len(), 1);

        // The seed reservation pairs the first customer with the first restaurant
        assert_eq!(reservations[0].customer_id, customers[0].id);
        assert_eq!(reservations[0].restaurant_id, restaurants[0].id);
        assert_eq!(reservations[0].party_count, 1);
        assert_eq!(reservations[0].date.to_string(), "2022-06-01");
    }
}
