//! Restaurant pizza service — validated creation of priced associations.

use pizzeria_domain::error::PizzeriaError;
use pizzeria_domain::restaurant_pizza::{NewRestaurantPizza, RestaurantPizzaDetail};

use crate::ports::RestaurantPizzaRepository;

/// Application service for restaurant pizzas.
pub struct RestaurantPizzaService<R> {
    repo: R,
}

impl<R: RestaurantPizzaRepository> RestaurantPizzaService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new association and return it with both referenced rows.
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::Validation`] when the price is out of range,
    /// [`PizzeriaError::Integrity`] when the restaurant or pizza does not
    /// exist, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn create_restaurant_pizza(
        &self,
        restaurant_pizza: NewRestaurantPizza,
    ) -> Result<RestaurantPizzaDetail, PizzeriaError> {
        restaurant_pizza.validate()?;
        self.repo.create(restaurant_pizza).await
    }
}
