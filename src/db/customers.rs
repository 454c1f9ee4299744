//! Customer database operations

use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::error::Result;

/// Customer record
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
}

fn customer_from_row(row: &SqliteRow) -> Result<Customer> {
    let id: String = row.get("id");

    Ok(Customer {
        id: Uuid::parse_str(&id)?,
        name: row.get("name"),
    })
}

/// Fetch every customer, in store-native order. An empty table yields an
/// empty Vec, not an error.
pub async fn fetch_customers(pool: &SqlitePool) -> Result<Vec<Customer>> {
    let rows = sqlx::query("SELECT id, name FROM customers")
        .fetch_all(pool)
        .await?;

    rows.iter().map(customer_from_row).collect()
}

/// Insert one customer and return the created row with its generated id.
///
/// `name` is bound as-is; an absent name becomes SQL NULL and fails on the
/// store's NOT NULL constraint rather than application-side validation.
pub async fn create_customer(pool: &SqlitePool, name: Option<&str>) -> Result<Customer> {
    let row = sqlx::query("INSERT INTO customers (name) VALUES (?) RETURNING id, name")
        .bind(name)
        .fetch_one(pool)
        .await?;

    customer_from_row(&row)
}
