//! In-memory implementation of every storage port, shared by service tests.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use pizzeria_domain::error::{IntegrityError, PizzeriaError};
use pizzeria_domain::id::{PizzaId, RestaurantId, RestaurantPizzaId};
use pizzeria_domain::pizza::{NewPizza, Pizza};
use pizzeria_domain::restaurant::{NewRestaurant, Restaurant};
use pizzeria_domain::restaurant_pizza::{
    NewRestaurantPizza, RestaurantMenu, RestaurantPizza, RestaurantPizzaDetail,
};

use crate::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};

#[derive(Default)]
struct State {
    next_id: i64,
    restaurants: BTreeMap<RestaurantId, Restaurant>,
    pizzas: BTreeMap<PizzaId, Pizza>,
    restaurant_pizzas: BTreeMap<RestaurantPizzaId, RestaurantPizza>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Cloneable handle; clones share the same tables.
#[derive(Clone, Default)]
pub(crate) struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub(crate) fn restaurant_pizza_count(&self) -> usize {
        self.state.lock().unwrap().restaurant_pizzas.len()
    }
}

impl RestaurantRepository for InMemoryStore {
    fn create(
        &self,
        restaurant: NewRestaurant,
    ) -> impl Future<Output = Result<Restaurant, PizzeriaError>> + Send {
        let mut state = self.state.lock().unwrap();
        let restaurant = restaurant.with_id(RestaurantId::new(state.next_id()));
        state.restaurants.insert(restaurant.id, restaurant.clone());
        async { Ok(restaurant) }
    }

    fn get_by_id(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<Restaurant>, PizzeriaError>> + Send {
        let result = self.state.lock().unwrap().restaurants.get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Restaurant>, PizzeriaError>> + Send {
        let result: Vec<Restaurant> = self
            .state
            .lock()
            .unwrap()
            .restaurants
            .values()
            .cloned()
            .collect();
        async { Ok(result) }
    }

    fn get_menu(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<RestaurantMenu>, PizzeriaError>> + Send {
        let state = self.state.lock().unwrap();
        let result = state.restaurants.get(&id).cloned().map(|restaurant| {
            let restaurant_pizzas: Vec<RestaurantPizza> = state
                .restaurant_pizzas
                .values()
                .filter(|rp| rp.restaurant_id == id)
                .cloned()
                .collect();
            let pizzas = state
                .pizzas
                .values()
                .filter(|pizza| restaurant_pizzas.iter().any(|rp| rp.pizza_id == pizza.id))
                .cloned()
                .collect();
            RestaurantMenu {
                restaurant,
                restaurant_pizzas,
                pizzas,
            }
        });
        async { Ok(result) }
    }

    fn delete(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<bool, PizzeriaError>> + Send {
        let mut state = self.state.lock().unwrap();
        let removed = state.restaurants.remove(&id).is_some();
        if removed {
            state
                .restaurant_pizzas
                .retain(|_, rp| rp.restaurant_id != id);
        }
        async move { Ok(removed) }
    }
}

impl PizzaRepository for InMemoryStore {
    fn create(&self, pizza: NewPizza) -> impl Future<Output = Result<Pizza, PizzeriaError>> + Send {
        let mut state = self.state.lock().unwrap();
        let pizza = pizza.with_id(PizzaId::new(state.next_id()));
        state.pizzas.insert(pizza.id, pizza.clone());
        async { Ok(pizza) }
    }

    fn get_by_id(
        &self,
        id: PizzaId,
    ) -> impl Future<Output = Result<Option<Pizza>, PizzeriaError>> + Send {
        let result = self.state.lock().unwrap().pizzas.get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Pizza>, PizzeriaError>> + Send {
        let result: Vec<Pizza> = self.state.lock().unwrap().pizzas.values().cloned().collect();
        async { Ok(result) }
    }

    fn find_by_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> impl Future<Output = Result<Vec<Pizza>, PizzeriaError>> + Send {
        let state = self.state.lock().unwrap();
        let result: Vec<Pizza> = state
            .pizzas
            .values()
            .filter(|pizza| {
                state
                    .restaurant_pizzas
                    .values()
                    .any(|rp| rp.restaurant_id == restaurant_id && rp.pizza_id == pizza.id)
            })
            .cloned()
            .collect();
        async { Ok(result) }
    }
}

impl RestaurantPizzaRepository for InMemoryStore {
    fn create(
        &self,
        restaurant_pizza: NewRestaurantPizza,
    ) -> impl Future<Output = Result<RestaurantPizzaDetail, PizzeriaError>> + Send {
        let mut state = self.state.lock().unwrap();
        let restaurant = state.restaurants.get(&restaurant_pizza.restaurant_id).cloned();
        let pizza = state.pizzas.get(&restaurant_pizza.pizza_id).cloned();
        let result = match (restaurant, pizza) {
            (Some(restaurant), Some(pizza)) => {
                let id = RestaurantPizzaId::new(state.next_id());
                let restaurant_pizza = restaurant_pizza.with_id(id);
                state.restaurant_pizzas.insert(id, restaurant_pizza.clone());
                Ok(RestaurantPizzaDetail {
                    restaurant_pizza,
                    restaurant,
                    pizza,
                })
            }
            _ => Err(IntegrityError {
                restaurant_id: restaurant_pizza.restaurant_id,
                pizza_id: restaurant_pizza.pizza_id,
            }
            .into()),
        };
        async { result }
    }

    fn get_by_id(
        &self,
        id: RestaurantPizzaId,
    ) -> impl Future<Output = Result<Option<RestaurantPizza>, PizzeriaError>> + Send {
        let result = self.state.lock().unwrap().restaurant_pizzas.get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(
        &self,
    ) -> impl Future<Output = Result<Vec<RestaurantPizza>, PizzeriaError>> + Send {
        let result: Vec<RestaurantPizza> = self
            .state
            .lock()
            .unwrap()
            .restaurant_pizzas
            .values()
            .cloned()
            .collect();
        async { Ok(result) }
    }

    fn find_by_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> impl Future<Output = Result<Vec<RestaurantPizza>, PizzeriaError>> + Send {
        let result: Vec<RestaurantPizza> = self
            .state
            .lock()
            .unwrap()
            .restaurant_pizzas
            .values()
            .filter(|rp| rp.restaurant_id == restaurant_id)
            .cloned()
            .collect();
        async { Ok(result) }
    }

    fn find_by_pizza(
        &self,
        pizza_id: PizzaId,
    ) -> impl Future<Output = Result<Vec<RestaurantPizza>, PizzeriaError>> + Send {
        let result: Vec<RestaurantPizza> = self
            .state
            .lock()
            .unwrap()
            .restaurant_pizzas
            .values()
            .filter(|rp| rp.pizza_id == pizza_id)
            .cloned()
            .collect();
        async { Ok(result) }
    }
}
