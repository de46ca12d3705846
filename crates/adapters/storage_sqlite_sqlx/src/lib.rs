//! # pizzeria-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `pizzeria-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle (foreign keys on for every connection)
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Run the multi-statement writes (checked insert, cascading delete) in one transaction
//!
//! ## Dependency rule
//! Depends on `pizzeria-app` (for port traits) and `pizzeria-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod pizza_repo;
pub mod pool;
pub mod restaurant_pizza_repo;
pub mod restaurant_repo;

pub use pizza_repo::SqlitePizzaRepository;
pub use pool::{Config, Database};
pub use restaurant_pizza_repo::SqliteRestaurantPizzaRepository;
pub use restaurant_repo::SqliteRestaurantRepository;
