//! JSON REST handlers for pizzas.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use pizzeria_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use pizzeria_domain::graph::Graph;
use pizzeria_domain::rules::Rules;

use crate::error::ApiError;
use crate::state::AppState;

const LIST_RULES: &[&str] = &["-restaurant_pizzas"];

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Value>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /pizzas`
pub async fn list<RR, PR, LR>(
    State(state): State<AppState<RR, PR, LR>>,
) -> Result<ListResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    LR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    let pizzas = state.pizza_service.list_pizzas().await?;
    let graph: Graph = pizzas.into_iter().collect();
    Ok(ListResponse::Ok(Json(
        graph.render_pizzas(&Rules::new(LIST_RULES)),
    )))
}
