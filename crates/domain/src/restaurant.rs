//! Restaurant — a place that serves pizzas at its own prices.

use serde::{Deserialize, Serialize};

use crate::error::{PizzeriaError, ValidationError};
use crate::id::RestaurantId;

/// A persisted restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
}

/// A restaurant that has not been stored yet; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
}

impl NewRestaurant {
    /// Create a builder for constructing a [`NewRestaurant`].
    #[must_use]
    pub fn builder() -> NewRestaurantBuilder {
        NewRestaurantBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::Validation`] when `name` or `address` is empty.
    pub fn validate(&self) -> Result<(), PizzeriaError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.address.trim().is_empty() {
            return Err(ValidationError::EmptyAddress.into());
        }
        Ok(())
    }

    /// Attach the identifier assigned by the store.
    #[must_use]
    pub fn with_id(self, id: RestaurantId) -> Restaurant {
        Restaurant {
            id,
            name: self.name,
            address: self.address,
        }
    }
}

/// Step-by-step builder for [`NewRestaurant`].
#[derive(Debug, Default)]
pub struct NewRestaurantBuilder {
    name: Option<String>,
    address: Option<String>,
}

impl NewRestaurantBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewRestaurant`].
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::Validation`] if `name` or `address` is missing or empty.
    pub fn build(self) -> Result<NewRestaurant, PizzeriaError> {
        let restaurant = NewRestaurant {
            name: self.name.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
        };
        restaurant.validate()?;
        Ok(restaurant)
    }
}
