//! Pizza service — use-cases for the pizza catalogue.

use pizzeria_domain::error::PizzeriaError;
use pizzeria_domain::pizza::{NewPizza, Pizza};

use crate::ports::PizzaRepository;

/// Application service for pizzas.
pub struct PizzaService<R> {
    repo: R,
}

impl<R: PizzaRepository> PizzaService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new pizza after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, pizza), fields(pizza_name = %pizza.name))]
    pub async fn create_pizza(&self, pizza: NewPizza) -> Result<Pizza, PizzeriaError> {
        pizza.validate()?;
        self.repo.create(pizza).await
    }

    /// List all pizzas.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_pizzas(&self) -> Result<Vec<Pizza>, PizzeriaError> {
        self.repo.get_all().await
    }
}
