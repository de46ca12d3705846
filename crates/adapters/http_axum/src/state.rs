//! Shared application state for axum handlers.

use std::sync::Arc;

use pizzeria_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use pizzeria_app::services::pizza_service::PizzaService;
use pizzeria_app::services::restaurant_pizza_service::RestaurantPizzaService;
use pizzeria_app::services::restaurant_service::RestaurantService;

/// Application state shared across all axum handlers.
///
/// Generic over the three repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repositories themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<RR, PR, LR> {
    /// Restaurant listing, lookup and deletion.
    pub restaurant_service: Arc<RestaurantService<RR>>,
    /// Pizza listing.
    pub pizza_service: Arc<PizzaService<PR>>,
    /// Restaurant pizza creation.
    pub restaurant_pizza_service: Arc<RestaurantPizzaService<LR>>,
}

impl<RR, PR, LR> Clone for AppState<RR, PR, LR> {
    fn clone(&self) -> Self {
        Self {
            restaurant_service: Arc::clone(&self.restaurant_service),
            pizza_service: Arc::clone(&self.pizza_service),
            restaurant_pizza_service: Arc::clone(&self.restaurant_pizza_service),
        }
    }
}

impl<RR, PR, LR> AppState<RR, PR, LR>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    LR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        restaurant_service: RestaurantService<RR>,
        pizza_service: PizzaService<PR>,
        restaurant_pizza_service: RestaurantPizzaService<LR>,
    ) -> Self {
        Self {
            restaurant_service: Arc::new(restaurant_service),
            pizza_service: Arc::new(pizza_service),
            restaurant_pizza_service: Arc::new(restaurant_pizza_service),
        }
    }

    /// Create a new application state from pre-wrapped `Arc` services.
    ///
    /// Use this when services are also needed outside the HTTP layer,
    /// e.g. to seed demo data before serving.
    pub fn from_arcs(
        restaurant_service: Arc<RestaurantService<RR>>,
        pizza_service: Arc<PizzaService<PR>>,
        restaurant_pizza_service: Arc<RestaurantPizzaService<LR>>,
    ) -> Self {
        Self {
            restaurant_service,
            pizza_service,
            restaurant_pizza_service,
        }
    }
}
