//! # pizzeria-domain
//!
//! Pure domain model for the pizzeria service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Restaurants** (places that serve pizzas)
//! - Define **Pizzas** (menu items, shared between restaurants)
//! - Define **Restaurant pizzas** (the priced link between one restaurant and one pizza)
//! - Hold a loaded **entity graph** and render it through explicit **rule sets**,
//!   so the restaurant ↔ restaurant pizza ↔ pizza cycle never recurses unbounded
//! - Contain all invariant enforcement (non-empty names, price bounds, required fields)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod graph;
pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
pub mod rules;
