//! # pizzeria-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RestaurantRepository` — create, fetch, list, menu snapshot, cascading delete
//!   - `PizzaRepository` — create, fetch, list, pizzas served by a restaurant
//!   - `RestaurantPizzaRepository` — checked insert, fetch, relationship lookups
//! - Define **driving/inbound ports** as use-case structs:
//!   - `RestaurantService` — list, get with nested pizzas, delete
//!   - `PizzaService` — list
//!   - `RestaurantPizzaService` — validated creation
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `pizzeria-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
