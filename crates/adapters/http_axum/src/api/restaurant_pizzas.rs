//! JSON REST handlers for restaurant pizzas.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::{Number, Value};

use pizzeria_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use pizzeria_domain::error::{PizzeriaError, ValidationError};
use pizzeria_domain::graph::Graph;
use pizzeria_domain::id::{PizzaId, RestaurantId, RestaurantPizzaId};
use pizzeria_domain::restaurant_pizza::NewRestaurantPizza;
use pizzeria_domain::rules::Rules;

use crate::error::ApiError;
use crate::state::AppState;

const CREATE_RULES: &[&str] = &["pizza", "restaurant"];

/// Request body for creating a restaurant pizza.
///
/// Every field is optional here so that a missing key becomes a
/// validation message instead of a deserialization failure. `price` is any
/// JSON number; `5` and `5.0` are the same price.
#[derive(Deserialize)]
pub struct CreateRestaurantPizzaRequest {
    pub price: Option<Number>,
    pub pizza_id: Option<PizzaId>,
    pub restaurant_id: Option<RestaurantId>,
}

impl CreateRestaurantPizzaRequest {
    fn into_new(self) -> Result<NewRestaurantPizza, PizzeriaError> {
        let mut builder = NewRestaurantPizza::builder();
        if let Some(price) = self.price {
            builder = builder.price(whole_price(&price)?);
        }
        if let Some(pizza_id) = self.pizza_id {
            builder = builder.pizza_id(pizza_id);
        }
        if let Some(restaurant_id) = self.restaurant_id {
            builder = builder.restaurant_id(restaurant_id);
        }
        builder.build()
    }
}

/// Integral value of a JSON number; huge magnitudes saturate and then fail
/// the range check.
#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
fn whole_price(price: &Number) -> Result<i64, PizzeriaError> {
    if let Some(price) = price.as_i64() {
        return Ok(price);
    }
    match price.as_f64() {
        Some(value) if value.trunc() == value => Ok(value as i64),
        _ => Err(ValidationError::FractionalPrice.into()),
    }
}

/// Render a freshly created row with its pizza and restaurant.
fn render_created(graph: &Graph, id: RestaurantPizzaId) -> Result<Value, PizzeriaError> {
    graph
        .render_restaurant_pizza(id, &Rules::new(CREATE_RULES))
        .map(Value::Object)
        .ok_or_else(|| {
            PizzeriaError::Storage(format!("restaurant pizza {id} missing after insert").into())
        })
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Value>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `POST /restaurant_pizzas`
pub async fn create<RR, PR, LR>(
    State(state): State<AppState<RR, PR, LR>>,
    payload: Result<Json<CreateRestaurantPizzaRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    LR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|rejection| {
        ApiError::from(PizzeriaError::from(ValidationError::InvalidBody(
            rejection.body_text(),
        )))
    })?;
    let restaurant_pizza = req.into_new()?;

    let detail = state
        .restaurant_pizza_service
        .create_restaurant_pizza(restaurant_pizza)
        .await?;

    let id = detail.restaurant_pizza.id;
    let rendered = render_created(&Graph::from(detail), id)?;
    Ok(CreateResponse::Created(Json(rendered)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(body: &str) -> CreateRestaurantPizzaRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn should_accept_integral_float_price() {
        let new = request(r#"{"price": 5.0, "pizza_id": 2, "restaurant_id": 1}"#)
            .into_new()
            .unwrap();
        assert_eq!(new.price, 5);
    }

    #[test]
    fn should_reject_fractional_price() {
        let result = request(r#"{"price": 5.5, "pizza_id": 2, "restaurant_id": 1}"#).into_new();
        assert!(matches!(
            result,
            Err(PizzeriaError::Validation(ValidationError::FractionalPrice))
        ));
    }

    #[test]
    fn should_range_check_large_float_price() {
        let result = request(r#"{"price": 1e300, "pizza_id": 2, "restaurant_id": 1}"#).into_new();
        assert!(matches!(
            result,
            Err(PizzeriaError::Validation(
                ValidationError::PriceOutOfRange { .. }
            ))
        ));
    }

    #[test]
    fn should_report_storage_error_when_created_row_is_not_rendered() {
        let result = render_created(&Graph::new(), RestaurantPizzaId::new(7));
        assert!(matches!(result, Err(PizzeriaError::Storage(_))));
    }
}
