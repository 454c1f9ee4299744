//! Data access layer: store connection and schema lifecycle
//!
//! Owns the single store connection and the destructive schema bootstrap.
//! Entity operations live in the per-entity submodules.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::error::Result;

pub mod customers;
pub mod reservations;
pub mod restaurants;

/// UUID v4 generator used as the id DEFAULT on every table, so ids are
/// store-generated and never client-supplied. SQLite has no uuid function;
/// this builds the 8-4-4-4-12 hex form with the version and variant nibbles
/// fixed. Each table gets its own DEFAULT, so no two tables share an id
/// generator.
const UUID_V4_SQL: &str = "lower(hex(randomblob(4)) || '-' || hex(randomblob(2)) \
     || '-4' || substr(hex(randomblob(2)), 2) \
     || '-' || substr('89ab', abs(random()) % 4 + 1, 1) || substr(hex(randomblob(2)), 2) \
     || '-' || hex(randomblob(6)))";

/// Open the store connection described by `database_url`.
///
/// The pool is capped at one connection: all statement execution is
/// serialized by the store, across every in-flight request. Foreign keys are
/// set on the connection options so cascade rules hold on every
/// (re)established connection.
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Drop and recreate all tables. Destructive and unconditional: every boot
/// wipes prior data.
///
/// Drops run dependents-first and creates run dependents-last, so the
/// foreign keys in `reservations` always resolve.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query("DROP TABLE IF EXISTS reservations")
        .execute(pool)
        .await?;
    sqlx::query("DROP TABLE IF EXISTS customers")
        .execute(pool)
        .await?;
    sqlx::query("DROP TABLE IF EXISTS restaurants")
        .execute(pool)
        .await?;

    create_restaurants_table(pool).await?;
    create_customers_table(pool).await?;
    create_reservations_table(pool).await?;

    info!("Schema initialized (restaurants, customers, reservations)");

    Ok(())
}

async fn create_customers_table(pool: &SqlitePool) -> Result<()> {
    let sql = format!(
        r#"
        CREATE TABLE customers (
            id TEXT PRIMARY KEY NOT NULL DEFAULT ({uuid}),
            name TEXT NOT NULL
        )
        "#,
        uuid = UUID_V4_SQL
    );
    sqlx::query(&sql).execute(pool).await?;

    Ok(())
}

async fn create_restaurants_table(pool: &SqlitePool) -> Result<()> {
    let sql = format!(
        r#"
        CREATE TABLE restaurants (
            id TEXT PRIMARY KEY NOT NULL DEFAULT ({uuid}),
            name TEXT NOT NULL
        )
        "#,
        uuid = UUID_V4_SQL
    );
    sqlx::query(&sql).execute(pool).await?;

    Ok(())
}

async fn create_reservations_table(pool: &SqlitePool) -> Result<()> {
    let sql = format!(
        r#"
        CREATE TABLE reservations (
            id TEXT PRIMARY KEY NOT NULL DEFAULT ({uuid}),
            date TEXT NOT NULL,
            party_count INTEGER NOT NULL,
            restaurant_id TEXT NOT NULL REFERENCES restaurants(id) ON DELETE CASCADE,
            customer_id TEXT NOT NULL REFERENCES customers(id) ON DELETE CASCADE
        )
        "#,
        uuid = UUID_V4_SQL
    );
    sqlx::query(&sql).execute(pool).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn init_schema_wipes_existing_rows() {
        let pool = connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory store");
        init_schema(&pool).await.expect("Failed to create schema");

        customers::create_customer(&pool, Some("Leftover"))
            .await
            .expect("Failed to insert customer");

        // Re-running the bootstrap recreates the tables from scratch
        init_schema(&pool).await.expect("Failed to recreate schema");

        let all = customers::fetch_customers(&pool)
            .await
            .expect("Failed to fetch customers");
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn connect_fails_for_unreachable_store() {
        let result = connect("sqlite:///no-such-directory/reservations.db").await;
        assert!(result.is_err());
    }
}
