//! Entity graph — loaded records plus the relationships between them.
//!
//! Services load whatever rows a request needs into a [`Graph`]; adapters
//! then render it with a [`Rules`] set. Rendering walks relationships through
//! the graph's indexes, so the same record can appear at several depths
//! without the model holding cyclic references.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::id::{PizzaId, RestaurantId, RestaurantPizzaId};
use crate::pizza::Pizza;
use crate::restaurant::Restaurant;
use crate::restaurant_pizza::{RestaurantMenu, RestaurantPizza, RestaurantPizzaDetail};
use crate::rules::Rules;

/// Relationship from a restaurant or a pizza to its restaurant pizzas.
pub const RESTAURANT_PIZZAS: &str = "restaurant_pizzas";
/// Relationship from a restaurant pizza to its restaurant.
pub const RESTAURANT: &str = "restaurant";
/// Relationship from a restaurant pizza to its pizza.
pub const PIZZA: &str = "pizza";

/// Rendered record: field name to scalar or nested value.
pub type Rendered = Map<String, Value>;

/// An in-memory set of records indexed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    restaurants: BTreeMap<RestaurantId, Restaurant>,
    pizzas: BTreeMap<PizzaId, Pizza>,
    restaurant_pizzas: BTreeMap<RestaurantPizzaId, RestaurantPizza>,
}

impl Graph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_restaurant(&mut self, restaurant: Restaurant) {
        self.restaurants.insert(restaurant.id, restaurant);
    }

    pub fn insert_pizza(&mut self, pizza: Pizza) {
        self.pizzas.insert(pizza.id, pizza);
    }

    pub fn insert_restaurant_pizza(&mut self, restaurant_pizza: RestaurantPizza) {
        self.restaurant_pizzas
            .insert(restaurant_pizza.id, restaurant_pizza);
    }

    #[must_use]
    pub fn restaurant(&self, id: RestaurantId) -> Option<&Restaurant> {
        self.restaurants.get(&id)
    }

    #[must_use]
    pub fn pizza(&self, id: PizzaId) -> Option<&Pizza> {
        self.pizzas.get(&id)
    }

    #[must_use]
    pub fn restaurant_pizza(&self, id: RestaurantPizzaId) -> Option<&RestaurantPizza> {
        self.restaurant_pizzas.get(&id)
    }

    /// All restaurants, ordered by id.
    pub fn restaurants(&self) -> impl Iterator<Item = &Restaurant> {
        self.restaurants.values()
    }

    /// All pizzas, ordered by id.
    pub fn pizzas(&self) -> impl Iterator<Item = &Pizza> {
        self.pizzas.values()
    }

    /// Restaurant pizzas owned by `restaurant`, ordered by id.
    pub fn restaurant_pizzas_of_restaurant(
        &self,
        restaurant: RestaurantId,
    ) -> impl Iterator<Item = &RestaurantPizza> {
        self.restaurant_pizzas
            .values()
            .filter(move |rp| rp.restaurant_id == restaurant)
    }

    /// Restaurant pizzas referencing `pizza`, ordered by id.
    pub fn restaurant_pizzas_of_pizza(
        &self,
        pizza: PizzaId,
    ) -> impl Iterator<Item = &RestaurantPizza> {
        self.restaurant_pizzas
            .values()
            .filter(move |rp| rp.pizza_id == pizza)
    }

    /// Render one restaurant, or `None` if it is not in the graph.
    #[must_use]
    pub fn render_restaurant(&self, id: RestaurantId, rules: &Rules) -> Option<Rendered> {
        self.restaurant(id).map(|r| self.restaurant_fields(r, rules))
    }

    /// Render one pizza, or `None` if it is not in the graph.
    #[must_use]
    pub fn render_pizza(&self, id: PizzaId, rules: &Rules) -> Option<Rendered> {
        self.pizza(id).map(|p| self.pizza_fields(p, rules))
    }

    /// Render one restaurant pizza, or `None` if it is not in the graph.
    #[must_use]
    pub fn render_restaurant_pizza(
        &self,
        id: RestaurantPizzaId,
        rules: &Rules,
    ) -> Option<Rendered> {
        self.restaurant_pizza(id)
            .map(|rp| self.restaurant_pizza_fields(rp, rules))
    }

    /// Render every restaurant in id order.
    #[must_use]
    pub fn render_restaurants(&self, rules: &Rules) -> Vec<Value> {
        self.restaurants()
            .map(|r| Value::Object(self.restaurant_fields(r, rules)))
            .collect()
    }

    /// Render every pizza in id order.
    #[must_use]
    pub fn render_pizzas(&self, rules: &Rules) -> Vec<Value> {
        self.pizzas()
            .map(|p| Value::Object(self.pizza_fields(p, rules)))
            .collect()
    }

    fn restaurant_fields(&self, restaurant: &Restaurant, rules: &Rules) -> Rendered {
        let mut fields = scalars(restaurant, rules);
        if rules.includes(RESTAURANT_PIZZAS) {
            let nested = rules.descend(RESTAURANT_PIZZAS);
            let items = self
                .restaurant_pizzas_of_restaurant(restaurant.id)
                .map(|rp| Value::Object(self.restaurant_pizza_fields(rp, &nested)))
                .collect();
            fields.insert(RESTAURANT_PIZZAS.to_string(), Value::Array(items));
        }
        fields
    }

    fn pizza_fields(&self, pizza: &Pizza, rules: &Rules) -> Rendered {
        let mut fields = scalars(pizza, rules);
        if rules.includes(RESTAURANT_PIZZAS) {
            let nested = rules.descend(RESTAURANT_PIZZAS);
            let items = self
                .restaurant_pizzas_of_pizza(pizza.id)
                .map(|rp| Value::Object(self.restaurant_pizza_fields(rp, &nested)))
                .collect();
            fields.insert(RESTAURANT_PIZZAS.to_string(), Value::Array(items));
        }
        fields
    }

    fn restaurant_pizza_fields(&self, rp: &RestaurantPizza, rules: &Rules) -> Rendered {
        let mut fields = scalars(rp, rules);
        if rules.includes(RESTAURANT) {
            let value = self
                .render_restaurant(rp.restaurant_id, &rules.descend(RESTAURANT))
                .map_or(Value::Null, Value::Object);
            fields.insert(RESTAURANT.to_string(), value);
        }
        if rules.includes(PIZZA) {
            let value = self
                .render_pizza(rp.pizza_id, &rules.descend(PIZZA))
                .map_or(Value::Null, Value::Object);
            fields.insert(PIZZA.to_string(), value);
        }
        fields
    }
}

/// Scalar columns of a record minus the excluded ones.
fn scalars<T: Serialize>(record: &T, rules: &Rules) -> Rendered {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => map
            .into_iter()
            .filter(|(field, _)| !rules.excludes(field))
            .collect(),
        _ => Rendered::new(),
    }
}

impl From<RestaurantPizzaDetail> for Graph {
    fn from(detail: RestaurantPizzaDetail) -> Self {
        let mut graph = Self::new();
        graph.insert_restaurant(detail.restaurant);
        graph.insert_pizza(detail.pizza);
        graph.insert_restaurant_pizza(detail.restaurant_pizza);
        graph
    }
}

impl From<RestaurantMenu> for Graph {
    fn from(menu: RestaurantMenu) -> Self {
        let mut graph = Self::new();
        graph.insert_restaurant(menu.restaurant);
        graph.extend(menu.restaurant_pizzas);
        graph.extend(menu.pizzas);
        graph
    }
}

impl Extend<Restaurant> for Graph {
    fn extend<I: IntoIterator<Item = Restaurant>>(&mut self, iter: I) {
        for restaurant in iter {
            self.insert_restaurant(restaurant);
        }
    }
}

impl Extend<Pizza> for Graph {
    fn extend<I: IntoIterator<Item = Pizza>>(&mut self, iter: I) {
        for pizza in iter {
            self.insert_pizza(pizza);
        }
    }
}

impl Extend<RestaurantPizza> for Graph {
    fn extend<I: IntoIterator<Item = RestaurantPizza>>(&mut self, iter: I) {
        for restaurant_pizza in iter {
            self.insert_restaurant_pizza(restaurant_pizza);
        }
    }
}

impl FromIterator<Restaurant> for Graph {
    fn from_iter<I: IntoIterator<Item = Restaurant>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl FromIterator<Pizza> for Graph {
    fn from_iter<I: IntoIterator<Item = Pizza>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}
