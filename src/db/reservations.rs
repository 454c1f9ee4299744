//! Reservation database operations
//!
//! Reservations reference exactly one restaurant and one customer. The
//! references are enforced by the store's foreign keys, with ON DELETE
//! CASCADE removing dependent reservations when a referenced row goes away.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::error::Result;

/// Reservation record
#[derive(Debug, Clone, Serialize)]
pub struct Reservation {
    pub id: Uuid,
    pub date: NaiveDate,
    pub party_count: i64,
    pub restaurant_id: Uuid,
    pub customer_id: Uuid,
}

fn reservation_from_row(row: &SqliteRow) -> Result<Reservation> {
    let id: String = row.get("id");
    let restaurant_id: String = row.get("restaurant_id");
    let customer_id: String = row.get("customer_id");

    Ok(Reservation {
        id: Uuid::parse_str(&id)?,
        date: row.get("date"),
        party_count: row.get("party_count"),
        restaurant_id: Uuid::parse_str(&restaurant_id)?,
        customer_id: Uuid::parse_str(&customer_id)?,
    })
}

/// Fetch every reservation, in store-native order.
pub async fn fetch_reservations(pool: &SqlitePool) -> Result<Vec<Reservation>> {
    let rows = sqlx::query(
        "SELECT id, date, party_count, restaurant_id, customer_id FROM reservations",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(reservation_from_row).collect()
}

/// Insert one reservation and return the created row with its generated id.
///
/// All fields are bound as-is: absent values become SQL NULL and fail on the
/// NOT NULL constraints, and ids that match no existing restaurant or
/// customer fail on the foreign keys. Either way the store's error is
/// propagated unchanged.
pub async fn create_reservation(
    pool: &SqlitePool,
    date: Option<NaiveDate>,
    party_count: Option<i64>,
    restaurant_id: Option<&str>,
    customer_id: &str,
) -> Result<Reservation> {
    let row = sqlx::query(
        r#"
        INSERT INTO reservations (date, party_count, restaurant_id, customer_id)
        VALUES (?, ?, ?, ?)
        RETURNING id, date, party_count, restaurant_id, customer_id
        "#,
    )
    .bind(date)
    .bind(party_count)
    .bind(restaurant_id)
    .bind(customer_id)
    .fetch_one(pool)
    .await?;

    reservation_from_row(&row)
}

/// Delete the reservation with the given id, returning the deleted row.
///
/// `None` means no row matched that id. Absence is a distinct outcome from a
/// store failure and is never inferred from an error.
pub async fn delete_reservation(pool: &SqlitePool, id: &str) -> Result<Option<Reservation>> {
    let row = sqlx::query(
        r#"
        DELETE FROM reservations
        WHERE id = ?
        RETURNING id, date, party_count, restaurant_id, customer_id
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => Ok(Some(reservation_from_row(&row)?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::db::customers::{create_customer, Customer};
    use crate::db::restaurants::{create_restaurant, Restaurant};

    async fn setup_pool() -> (SqlitePool, Customer, Restaurant) {
        let pool = db::connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory store");
        db::init_schema(&pool).await.expect("Failed to create schema");

        let customer = create_customer(&pool, Some("Alice"))
            .await
            .expect("Failed to create customer");
        let restaurant = create_restaurant(&pool, Some("Pizza Place"))
            .await
            .expect("Failed to create restaurant");

        (pool, customer, restaurant)
    }

    fn june_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 6, 1).unwrap()
    }

    #[tokio::test]
    async fn create_links_existing_customer_and_restaurant() {
        let (pool, customer, restaurant) = setup_pool().await;

        let reservation = create_reservation(
            &pool,
            Some(june_first()),
            Some(2),
            Some(&restaurant.id.to_string()),
            &customer.id.to_string(),
        )
        .await
        .expect("Failed to create reservation");

        assert_eq!(reservation.date, june_first());
        assert_eq!(reservation.party_count, 2);
        assert_eq!(reservation.restaurant_id, restaurant.id);
        assert_eq!(reservation.customer_id, customer.id);
    }

    #[tokio::test]
    async fn unknown_foreign_ids_are_rejected() {
        let (pool, customer, restaurant) = setup_pool().await;

        // Unknown restaurant
        let result = create_reservation(
            &pool,
            Some(june_first()),
            Some(2),
            Some(&Uuid::new_v4().to_string()),
            &customer.id.to_string(),
        )
        .await;
        assert!(result.is_err());

        // Unknown customer
        let result = create_reservation(
            &pool,
            Some(june_first()),
            Some(2),
            Some(&restaurant.id.to_string()),
            &Uuid::new_v4().to_string(),
        )
        .await;
        assert!(result.is_err());

        let all = fetch_reservations(&pool).await.expect("Failed to fetch");
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn missing_fields_are_rejected() {
        let (pool, customer, _restaurant) = setup_pool().await;

        let result =
            create_reservation(&pool, Some(june_first()), Some(2), None, &customer.id.to_string())
                .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn delete_returns_row_once_then_absence() {
        let (pool, customer, restaurant) = setup_pool().await;

        let reservation = create_reservation(
            &pool,
            Some(june_first()),
            Some(4),
            Some(&restaurant.id.to_string()),
            &customer.id.to_string(),
        )
        .await
        .expect("Failed to create reservation");

        let deleted = delete_reservation(&pool, &reservation.id.to_string())
            .await
            .expect("Delete failed")
            .expect("Expected a deleted row");
        assert_eq!(deleted.id, reservation.id);

        let all = fetch_reservations(&pool).await.expect("Failed to fetch");
        assert!(all.is_empty());

        // Second delete of the same id is absence, not an error
        let deleted = delete_reservation(&pool, &reservation.id.to_string())
            .await
            .expect("Delete failed");
        assert!(deleted.is_none());
    }

    #[tokio::test]
    async fn deleting_a_customer_cascades_to_reservations() {
        let (pool, customer, restaurant) = setup_pool().await;

        create_reservation(
            &pool,
            Some(june_first()),
            Some(2),
            Some(&restaurant.id.to_string()),
            &customer.id.to_string(),
        )
        .await
        .expect("Failed to create reservation");

        sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(customer.id.to_string())
            .execute(&pool)
            .await
            .expect("Failed to delete customer");

        let all = fetch_reservations(&pool).await.expect("Failed to fetch");
        assert!(all.is_empty());
    }
}
