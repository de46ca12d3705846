//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PizzeriaError`] via `#[from]`.

use crate::id::{PizzaId, RestaurantId};

/// Top-level error shared by every layer.
#[derive(Debug, thiserror::Error)]
pub enum PizzeriaError {
    /// Caller-supplied data broke a business rule.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A primary-key lookup matched nothing.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// A write referenced rows that do not exist.
    #[error("integrity error")]
    Integrity(#[from] IntegrityError),

    /// Anything the storage adapter could not classify.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A field failed a business rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Address must not be empty")]
    EmptyAddress,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error(
        "Price must be between {min} and {max}",
        min = crate::restaurant_pizza::MIN_PRICE,
        max = crate::restaurant_pizza::MAX_PRICE
    )]
    PriceOutOfRange { price: i64 },

    #[error("Price must be a whole number")]
    FractionalPrice,

    /// The request body could not be read as the expected JSON shape.
    #[error("{0}")]
    InvalidBody(String),
}

/// No row with the requested identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A restaurant pizza pointed at a restaurant or pizza that does not exist.
///
/// The message is the same whichever side failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid pizza_id or restaurant_id")]
pub struct IntegrityError {
    pub restaurant_id: RestaurantId,
    pub pizza_id: PizzaId,
}
