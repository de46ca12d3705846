//! Storage port — repository traits for persistence.

use std::future::Future;

use pizzeria_domain::error::PizzeriaError;
use pizzeria_domain::id::{PizzaId, RestaurantId, RestaurantPizzaId};
use pizzeria_domain::pizza::{NewPizza, Pizza};
use pizzeria_domain::restaurant::{NewRestaurant, Restaurant};
use pizzeria_domain::restaurant_pizza::{
    NewRestaurantPizza, RestaurantMenu, RestaurantPizza, RestaurantPizzaDetail,
};

/// Repository for persisting and querying [`Restaurant`]s.
pub trait RestaurantRepository {
    /// Insert a restaurant and return it with its assigned id.
    fn create(
        &self,
        restaurant: NewRestaurant,
    ) -> impl Future<Output = Result<Restaurant, PizzeriaError>> + Send;

    /// Get a restaurant by id, `None` when absent.
    fn get_by_id(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<Restaurant>, PizzeriaError>> + Send;

    /// Get all restaurants, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Restaurant>, PizzeriaError>> + Send;

    /// Get a restaurant with its restaurant pizzas and their pizzas, all read
    /// from the same snapshot. `None` when the restaurant is absent.
    fn get_menu(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<RestaurantMenu>, PizzeriaError>> + Send;

    /// Delete a restaurant and its restaurant pizzas atomically.
    ///
    /// Resolves to `false` when no restaurant with `id` existed; nothing is
    /// removed in that case.
    fn delete(&self, id: RestaurantId)
    -> impl Future<Output = Result<bool, PizzeriaError>> + Send;
}

/// Repository for persisting and querying [`Pizza`]s.
pub trait PizzaRepository {
    /// Insert a pizza and return it with its assigned id.
    fn create(&self, pizza: NewPizza) -> impl Future<Output = Result<Pizza, PizzeriaError>> + Send;

    /// Get a pizza by id, `None` when absent.
    fn get_by_id(
        &self,
        id: PizzaId,
    ) -> impl Future<Output = Result<Option<Pizza>, PizzeriaError>> + Send;

    /// Get all pizzas, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Pizza>, PizzeriaError>> + Send;

    /// Distinct pizzas served by `restaurant_id`, ordered by id.
    fn find_by_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> impl Future<Output = Result<Vec<Pizza>, PizzeriaError>> + Send;
}

/// Repository for the priced restaurant ↔ pizza association.
pub trait RestaurantPizzaRepository {
    /// Insert an association inside one transaction.
    ///
    /// Fails with [`PizzeriaError::Integrity`] and writes nothing when the
    /// restaurant or the pizza does not exist.
    fn create(
        &self,
        restaurant_pizza: NewRestaurantPizza,
    ) -> impl Future<Output = Result<RestaurantPizzaDetail, PizzeriaError>> + Send;

    /// Get an association by id, `None` when absent.
    fn get_by_id(
        &self,
        id: RestaurantPizzaId,
    ) -> impl Future<Output = Result<Option<RestaurantPizza>, PizzeriaError>> + Send;

    /// Get all associations, ordered by id.
    fn get_all(
        &self,
    ) -> impl Future<Output = Result<Vec<RestaurantPizza>, PizzeriaError>> + Send;

    /// Associations owned by `restaurant_id`, ordered by id.
    fn find_by_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> impl Future<Output = Result<Vec<RestaurantPizza>, PizzeriaError>> + Send;

    /// Associations referencing `pizza_id`, ordered by id.
    fn find_by_pizza(
        &self,
        pizza_id: PizzaId,
    ) -> impl Future<Output = Result<Vec<RestaurantPizza>, PizzeriaError>> + Send;
}
