//! Demo data for a fresh database.

use pizzeria_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use pizzeria_app::services::pizza_service::PizzaService;
use pizzeria_app::services::restaurant_pizza_service::RestaurantPizzaService;
use pizzeria_app::services::restaurant_service::RestaurantService;
use pizzeria_domain::error::PizzeriaError;
use pizzeria_domain::pizza::NewPizza;
use pizzeria_domain::restaurant::NewRestaurant;
use pizzeria_domain::restaurant_pizza::NewRestaurantPizza;

const RESTAURANTS: &[(&str, &str)] = &[
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: &[(&str, &str)] = &[
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// `(restaurant index, pizza index, price)` into the tables above.
const MENU: &[(usize, usize, i64)] = &[(0, 0, 10), (0, 1, 12), (1, 1, 9), (1, 2, 15)];

/// Insert the demo restaurants, pizzas and prices.
///
/// Does nothing when at least one restaurant already exists. Returns the
/// number of restaurant pizzas created.
///
/// # Errors
///
/// Returns the first error raised by a service.
pub async fn run<RR, PR, LR>(
    restaurant_service: &RestaurantService<RR>,
    pizza_service: &PizzaService<PR>,
    restaurant_pizza_service: &RestaurantPizzaService<LR>,
) -> Result<usize, PizzeriaError>
where
    RR: RestaurantRepository,
    PR: PizzaRepository,
    LR: RestaurantPizzaRepository,
{
    if !restaurant_service.list_restaurants().await?.is_empty() {
        tracing::info!("restaurants already present, skipping demo seed");
        return Ok(0);
    }

    let mut restaurants = Vec::with_capacity(RESTAURANTS.len());
    for (name, address) in RESTAURANTS {
        let new = NewRestaurant::builder()
            .name(*name)
            .address(*address)
            .build()?;
        restaurants.push(restaurant_service.create_restaurant(new).await?);
    }

    let mut pizzas = Vec::with_capacity(PIZZAS.len());
    for (name, ingredients) in PIZZAS {
        let new = NewPizza::builder()
            .name(*name)
            .ingredients(*ingredients)
            .build()?;
        pizzas.push(pizza_service.create_pizza(new).await?);
    }

    for &(restaurant, pizza, price) in MENU {
        let new = NewRestaurantPizza::builder()
            .price(price)
            .pizza_id(pizzas[pizza].id)
            .restaurant_id(restaurants[restaurant].id)
            .build()?;
        restaurant_pizza_service.create_restaurant_pizza(new).await?;
    }

    tracing::info!(
        restaurants = restaurants.len(),
        pizzas = pizzas.len(),
        restaurant_pizzas = MENU.len(),
        "demo data seeded"
    );
    Ok(MENU.len())
}
