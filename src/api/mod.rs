//! HTTP API handlers

pub mod customers;
pub mod health;
pub mod reservations;
pub mod restaurants;

pub use customers::{create_customer, list_customers};
pub use health::health_routes;
pub use reservations::{create_reservation, delete_reservation, list_reservations};
pub use restaurants::{create_restaurant, list_restaurants};
