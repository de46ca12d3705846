//! JSON REST handlers for restaurants.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use pizzeria_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use pizzeria_domain::error::{NotFoundError, PizzeriaError};
use pizzeria_domain::graph::Graph;
use pizzeria_domain::id::RestaurantId;
use pizzeria_domain::rules::Rules;

use crate::error::ApiError;
use crate::state::AppState;

/// Scalars only; the restaurant pizzas are left out of listings.
const LIST_RULES: &[&str] = &["-restaurant_pizzas"];
/// Each restaurant pizza with its pizza, but not the pizza's own links.
const DETAIL_RULES: &[&str] = &["restaurant_pizzas", "restaurant_pizzas.pizza"];

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

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Value>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn not_found(raw: &str) -> ApiError {
    ApiError::from(PizzeriaError::from(NotFoundError {
        entity: "Restaurant",
        id: raw.to_string(),
    }))
}

/// A path segment that is not an integer cannot name a restaurant.
fn parse_id(raw: &str) -> Result<RestaurantId, ApiError> {
    raw.parse().map_err(|_| not_found(raw))
}

/// `GET /restaurants`
pub async fn list<RR, PR, LR>(
    State(state): State<AppState<RR, PR, LR>>,
) -> Result<ListResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    LR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    let restaurants = state.restaurant_service.list_restaurants().await?;
    let graph: Graph = restaurants.into_iter().collect();
    Ok(ListResponse::Ok(Json(
        graph.render_restaurants(&Rules::new(LIST_RULES)),
    )))
}

/// `GET /restaurants/:id`
pub async fn get<RR, PR, LR>(
    State(state): State<AppState<RR, PR, LR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    LR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    let restaurant_id = parse_id(&id)?;
    let graph = state.restaurant_service.get_restaurant(restaurant_id).await?;
    let rendered = graph
        .render_restaurant(restaurant_id, &Rules::new(DETAIL_RULES))
        .ok_or_else(|| not_found(&id))?;
    Ok(GetResponse::Ok(Json(Value::Object(rendered))))
}

/// `DELETE /restaurants/:id`
pub async fn delete<RR, PR, LR>(
    State(state): State<AppState<RR, PR, LR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    LR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    let restaurant_id = parse_id(&id)?;
    state
        .restaurant_service
        .delete_restaurant(restaurant_id)
        .await?;
    Ok(DeleteResponse::NoContent)
}
