//! Restaurant pizza — one restaurant serving one pizza at a given price.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{PizzeriaError, ValidationError};
use crate::id::{PizzaId, RestaurantId, RestaurantPizzaId};
use crate::pizza::Pizza;
use crate::restaurant::Restaurant;

/// Lowest accepted price.
pub const MIN_PRICE: i64 = 1;
/// Highest accepted price.
pub const MAX_PRICE: i64 = 30;

const PRICE_RANGE: RangeInclusive<i64> = MIN_PRICE..=MAX_PRICE;

/// A persisted association between a restaurant and a pizza.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantPizza {
    pub id: RestaurantPizzaId,
    pub price: i64,
    pub restaurant_id: RestaurantId,
    pub pizza_id: PizzaId,
}

/// An association that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestaurantPizza {
    pub price: i64,
    pub restaurant_id: RestaurantId,
    pub pizza_id: PizzaId,
}

impl NewRestaurantPizza {
    #[must_use]
    pub fn builder() -> NewRestaurantPizzaBuilder {
        NewRestaurantPizzaBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::Validation`] when `price` is outside
    /// [`MIN_PRICE`]..=[`MAX_PRICE`].
    pub fn validate(&self) -> Result<(), PizzeriaError> {
        if !PRICE_RANGE.contains(&self.price) {
            return Err(ValidationError::PriceOutOfRange { price: self.price }.into());
        }
        Ok(())
    }

    #[must_use]
    pub fn with_id(self, id: RestaurantPizzaId) -> RestaurantPizza {
        RestaurantPizza {
            id,
            price: self.price,
            restaurant_id: self.restaurant_id,
            pizza_id: self.pizza_id,
        }
    }
}

/// Builder for [`NewRestaurantPizza`]; every field is required.
#[derive(Debug, Default)]
pub struct NewRestaurantPizzaBuilder {
    price: Option<i64>,
    pizza_id: Option<PizzaId>,
    restaurant_id: Option<RestaurantId>,
}

impl NewRestaurantPizzaBuilder {
    #[must_use]
    pub fn price(mut self, price: i64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn pizza_id(mut self, pizza_id: PizzaId) -> Self {
        self.pizza_id = Some(pizza_id);
        self
    }

    #[must_use]
    pub fn restaurant_id(mut self, restaurant_id: RestaurantId) -> Self {
        self.restaurant_id = Some(restaurant_id);
        self
    }

    /// Consume the builder, validate, and return a [`NewRestaurantPizza`].
    ///
    /// Fields are checked in the order `price`, `pizza_id`, `restaurant_id`;
    /// the first missing one is reported.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for an unset field, or
    /// [`ValidationError::PriceOutOfRange`] for a price outside the bounds.
    pub fn build(self) -> Result<NewRestaurantPizza, PizzeriaError> {
        let price = self.price.ok_or(ValidationError::MissingField("price"))?;
        let pizza_id = self
            .pizza_id
            .ok_or(ValidationError::MissingField("pizza_id"))?;
        let restaurant_id = self
            .restaurant_id
            .ok_or(ValidationError::MissingField("restaurant_id"))?;

        let restaurant_pizza = NewRestaurantPizza {
            price,
            restaurant_id,
            pizza_id,
        };
        restaurant_pizza.validate()?;
        Ok(restaurant_pizza)
    }
}

/// A stored association together with both rows it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantPizzaDetail {
    pub restaurant_pizza: RestaurantPizza,
    pub restaurant: Restaurant,
    pub pizza: Pizza,
}

/// A restaurant with its restaurant pizzas and the pizzas they reference,
/// read from one consistent snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantMenu {
    pub restaurant: Restaurant,
    pub restaurant_pizzas: Vec<RestaurantPizza>,
    pub pizzas: Vec<Pizza>,
}
