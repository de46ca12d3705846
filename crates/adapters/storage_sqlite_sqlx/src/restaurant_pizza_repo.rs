//! `SQLite` implementation of [`RestaurantPizzaRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use pizzeria_app::ports::RestaurantPizzaRepository;
use pizzeria_domain::error::{IntegrityError, PizzeriaError};
use pizzeria_domain::id::{PizzaId, RestaurantId, RestaurantPizzaId};
use pizzeria_domain::restaurant_pizza::{
    NewRestaurantPizza, RestaurantPizza, RestaurantPizzaDetail,
};

use crate::error::StorageError;
use crate::{pizza_repo, restaurant_repo};

/// Wrapper for converting database rows into domain [`RestaurantPizza`].
pub(crate) struct Wrapper(pub(crate) RestaurantPizza);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(RestaurantPizza {
            id: RestaurantPizzaId::new(row.try_get("id")?),
            price: row.try_get("price")?,
            restaurant_id: RestaurantId::new(row.try_get("restaurant_id")?),
            pizza_id: PizzaId::new(row.try_get("pizza_id")?),
        }))
    }
}

const INSERT: &str =
    "INSERT INTO restaurant_pizzas (price, restaurant_id, pizza_id) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str =
    "SELECT id, price, restaurant_id, pizza_id FROM restaurant_pizzas WHERE id = ?";
const SELECT_ALL: &str =
    "SELECT id, price, restaurant_id, pizza_id FROM restaurant_pizzas ORDER BY id";
pub(crate) const SELECT_BY_RESTAURANT: &str = "SELECT id, price, restaurant_id, pizza_id FROM restaurant_pizzas WHERE restaurant_id = ? ORDER BY id";
const SELECT_BY_PIZZA: &str = "SELECT id, price, restaurant_id, pizza_id FROM restaurant_pizzas WHERE pizza_id = ? ORDER BY id";

fn integrity(restaurant_pizza: &NewRestaurantPizza) -> PizzeriaError {
    IntegrityError {
        restaurant_id: restaurant_pizza.restaurant_id,
        pizza_id: restaurant_pizza.pizza_id,
    }
    .into()
}

/// `SQLite`-backed restaurant pizza repository.
pub struct SqliteRestaurantPizzaRepository {
    pool: SqlitePool,
}

impl SqliteRestaurantPizzaRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn find_by(
        &self,
        query: &'static str,
        id: i64,
    ) -> impl Future<Output = Result<Vec<RestaurantPizza>, PizzeriaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(query)
                .bind(id)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}

impl RestaurantPizzaRepository for SqliteRestaurantPizzaRepository {
    fn create(
        &self,
        restaurant_pizza: NewRestaurantPizza,
    ) -> impl Future<Output = Result<RestaurantPizzaDetail, PizzeriaError>> + Send {
        let pool = self.pool.clone();
        async move {
            // Write lock up front: the existence checks run before the insert.
            let mut tx = pool
                .begin_with("BEGIN IMMEDIATE")
                .await
                .map_err(StorageError::from)?;

            let restaurant: Option<restaurant_repo::Wrapper> =
                sqlx::query_as(restaurant_repo::SELECT_BY_ID)
                    .bind(restaurant_pizza.restaurant_id.get())
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(StorageError::from)?;
            let pizza: Option<pizza_repo::Wrapper> = sqlx::query_as(pizza_repo::SELECT_BY_ID)
                .bind(restaurant_pizza.pizza_id.get())
                .fetch_optional(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            let (Some(restaurant), Some(pizza)) = (restaurant, pizza) else {
                tx.rollback().await.map_err(StorageError::from)?;
                return Err(integrity(&restaurant_pizza));
            };

            let inserted = sqlx::query(INSERT)
                .bind(restaurant_pizza.price)
                .bind(restaurant_pizza.restaurant_id.get())
                .bind(restaurant_pizza.pizza_id.get())
                .execute(&mut *tx)
                .await;

            let id = match inserted {
                Ok(result) => RestaurantPizzaId::new(result.last_insert_rowid()),
                Err(sqlx::Error::Database(err)) if err.is_foreign_key_violation() => {
                    tx.rollback().await.map_err(StorageError::from)?;
                    return Err(integrity(&restaurant_pizza));
                }
                Err(err) => return Err(StorageError::from(err).into()),
            };

            tx.commit().await.map_err(StorageError::from)?;

            Ok(RestaurantPizzaDetail {
                restaurant_pizza: restaurant_pizza.with_id(id),
                restaurant: restaurant.0,
                pizza: pizza.0,
            })
        }
    }

    fn get_by_id(
        &self,
        id: RestaurantPizzaId,
    ) -> impl Future<Output = Result<Option<RestaurantPizza>, PizzeriaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn get_all(
        &self,
    ) -> impl Future<Output = Result<Vec<RestaurantPizza>, PizzeriaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> impl Future<Output = Result<Vec<RestaurantPizza>, PizzeriaError>> + Send {
        self.find_by(SELECT_BY_RESTAURANT, restaurant_id.get())
    }

    fn find_by_pizza(
        &self,
        pizza_id: PizzaId,
    ) -> impl Future<Output = Result<Vec<RestaurantPizza>, PizzeriaError>> + Send {
        self.find_by(SELECT_BY_PIZZA, pizza_id.get())
    }
}
