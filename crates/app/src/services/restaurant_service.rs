//! Restaurant service — use-cases for reading and removing restaurants.

use pizzeria_domain::error::{NotFoundError, PizzeriaError};
use pizzeria_domain::graph::Graph;
use pizzeria_domain::id::RestaurantId;
use pizzeria_domain::restaurant::{NewRestaurant, Restaurant};

use crate::ports::RestaurantRepository;

/// Application service for restaurants and the records hanging off them.
pub struct RestaurantService<R> {
    repo: R,
}

fn not_found(id: RestaurantId) -> PizzeriaError {
    NotFoundError {
        entity: "Restaurant",
        id: id.to_string(),
    }
    .into()
}

impl<R: RestaurantRepository> RestaurantService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new restaurant after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, restaurant), fields(restaurant_name = %restaurant.name))]
    pub async fn create_restaurant(
        &self,
        restaurant: NewRestaurant,
    ) -> Result<Restaurant, PizzeriaError> {
        restaurant.validate()?;
        self.repo.create(restaurant).await
    }

    /// List all restaurants.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, PizzeriaError> {
        self.repo.get_all().await
    }

    /// Load a restaurant with its restaurant pizzas and the pizzas they reference.
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::NotFound`] when no restaurant with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_restaurant(&self, id: RestaurantId) -> Result<Graph, PizzeriaError> {
        let menu = self.repo.get_menu(id).await?.ok_or_else(|| not_found(id))?;
        Ok(Graph::from(menu))
    }

    /// Delete a restaurant together with its restaurant pizzas.
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::NotFound`] when no restaurant with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_restaurant(&self, id: RestaurantId) -> Result<(), PizzeriaError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{PizzaRepository, RestaurantPizzaRepository};
    use crate::services::in_memory::InMemoryStore;
    use pizzeria_domain::error::ValidationError;
    use pizzeria_domain::id::PizzaId;
    use pizzeria_domain::pizza::{NewPizza, Pizza};
    use pizzeria_domain::restaurant_pizza::NewRestaurantPizza;

    fn make_service() -> (RestaurantService<InMemoryStore>, InMemoryStore) {
        let store = InMemoryStore::default();
        (RestaurantService::new(store.clone()), store)
    }

    fn new_restaurant(name: &str) -> NewRestaurant {
        NewRestaurant::builder()
            .name(name)
            .address("123 Pizza Way")
            .build()
            .unwrap()
    }

    async fn add_pizza(store: &InMemoryStore, name: &str) -> Pizza {
        PizzaRepository::create(store, NewPizza::builder().name(name).build().unwrap())
            .await
            .unwrap()
    }

    async fn link(store: &InMemoryStore, restaurant: &Restaurant, pizza_id: PizzaId, price: i64) {
        let new = NewRestaurantPizza::builder()
            .price(price)
            .pizza_id(pizza_id)
            .restaurant_id(restaurant.id)
            .build()
            .unwrap();
        RestaurantPizzaRepository::create(store, new).await.unwrap();
    }

    #[tokio::test]
    async fn should_create_and_list_restaurants() {
        let (svc, _) = make_service();
        svc.create_restaurant(new_restaurant("Karen's")).await.unwrap();
        svc.create_restaurant(new_restaurant("Sanjay's")).await.unwrap();

        let all = svc.list_restaurants().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_store_is_empty() {
        let (svc, _) = make_service();
        assert!(svc.list_restaurants().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_create_when_name_is_empty() {
        let (svc, _) = make_service();
        let mut restaurant = new_restaurant("Karen's");
        restaurant.name = String::new();

        let result = svc.create_restaurant(restaurant).await;
        assert!(matches!(
            result,
            Err(PizzeriaError::Validation(ValidationError::EmptyName))
        ));
    }

    #[tokio::test]
    async fn should_load_restaurant_with_pizzas() {
        let (svc, store) = make_service();
        let restaurant = svc.create_restaurant(new_restaurant("Karen's")).await.unwrap();
        let other = svc.create_restaurant(new_restaurant("Kiki's")).await.unwrap();
        let emma = add_pizza(&store, "Emma").await;
        let geri = add_pizza(&store, "Geri").await;
        link(&store, &restaurant, emma.id, 5).await;
        link(&store, &other, geri.id, 9).await;

        let graph = svc.get_restaurant(restaurant.id).await.unwrap();
        assert_eq!(
            graph.restaurant_pizzas_of_restaurant(restaurant.id).count(),
            1
        );
        assert!(graph.pizza(emma.id).is_some());
        assert!(graph.pizza(geri.id).is_none());
        assert!(graph.restaurant(other.id).is_none());
    }

    #[tokio::test]
    async fn should_return_not_found_when_restaurant_missing() {
        let (svc, _) = make_service();
        let result = svc.get_restaurant(RestaurantId::new(404)).await;
        assert!(matches!(result, Err(PizzeriaError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_cascade_when_deleting_restaurant() {
        let (svc, store) = make_service();
        let restaurant = svc.create_restaurant(new_restaurant("Karen's")).await.unwrap();
        let emma = add_pizza(&store, "Emma").await;
        link(&store, &restaurant, emma.id, 5).await;
        assert_eq!(store.restaurant_pizza_count(), 1);

        svc.delete_restaurant(restaurant.id).await.unwrap();

        assert_eq!(store.restaurant_pizza_count(), 0);
        assert!(PizzaRepository::get_by_id(&store, emma.id).await.unwrap().is_some());
        let result = svc.get_restaurant(restaurant.id).await;
        assert!(matches!(result, Err(PizzeriaError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_restaurant() {
        let (svc, _) = make_service();
        let result = svc.delete_restaurant(RestaurantId::new(7)).await;
        assert!(matches!(result, Err(PizzeriaError::NotFound(_))));
    }
}
