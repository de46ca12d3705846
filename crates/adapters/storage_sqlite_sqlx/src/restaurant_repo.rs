//! `SQLite` implementation of [`RestaurantRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use pizzeria_app::ports::RestaurantRepository;
use pizzeria_domain::error::PizzeriaError;
use pizzeria_domain::id::RestaurantId;
use pizzeria_domain::restaurant::{NewRestaurant, Restaurant};
use pizzeria_domain::restaurant_pizza::RestaurantMenu;

use crate::error::StorageError;
use crate::{pizza_repo, restaurant_pizza_repo};

/// Wrapper for converting database rows into domain [`Restaurant`].
pub(crate) struct Wrapper(pub(crate) Restaurant);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Restaurant {
            id: RestaurantId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            address: row.try_get("address")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO restaurants (name, address) VALUES (?, ?)";
pub(crate) const SELECT_BY_ID: &str = "SELECT id, name, address FROM restaurants WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, address FROM restaurants ORDER BY id";
const DELETE_RESTAURANT_PIZZAS: &str = "DELETE FROM restaurant_pizzas WHERE restaurant_id = ?";
const DELETE_BY_ID: &str = "DELETE FROM restaurants WHERE id = ?";

/// `SQLite`-backed restaurant repository.
pub struct SqliteRestaurantRepository {
    pool: SqlitePool,
}

impl SqliteRestaurantRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RestaurantRepository for SqliteRestaurantRepository {
    fn create(
        &self,
        restaurant: NewRestaurant,
    ) -> impl Future<Output = Result<Restaurant, PizzeriaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&restaurant.name)
                .bind(&restaurant.address)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(restaurant.with_id(RestaurantId::new(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<Restaurant>, PizzeriaError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Restaurant>, PizzeriaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_menu(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<RestaurantMenu>, PizzeriaError>> + Send {
        let pool = self.pool.clone();
        async move {
            // One read transaction, so a concurrent delete is seen fully or not at all.
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            let restaurant: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            let Some(Wrapper(restaurant)) = restaurant else {
                tx.rollback().await.map_err(StorageError::from)?;
                return Ok(None);
            };

            let restaurant_pizzas: Vec<restaurant_pizza_repo::Wrapper> =
                sqlx::query_as(restaurant_pizza_repo::SELECT_BY_RESTAURANT)
                    .bind(id.get())
                    .fetch_all(&mut *tx)
                    .await
                    .map_err(StorageError::from)?;
            let pizzas: Vec<pizza_repo::Wrapper> = sqlx::query_as(pizza_repo::SELECT_BY_RESTAURANT)
                .bind(id.get())
                .fetch_all(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            tx.commit().await.map_err(StorageError::from)?;

            Ok(Some(RestaurantMenu {
                restaurant,
                restaurant_pizzas: restaurant_pizzas.into_iter().map(|w| w.0).collect(),
                pizzas: pizzas.into_iter().map(|w| w.0).collect(),
            }))
        }
    }

    fn delete(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<bool, PizzeriaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            // Children first; not left to ON DELETE CASCADE alone.
            sqlx::query(DELETE_RESTAURANT_PIZZAS)
                .bind(id.get())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            let deleted = sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?
                .rows_affected();

            if deleted == 0 {
                tx.rollback().await.map_err(StorageError::from)?;
                return Ok(false);
            }

            tx.commit().await.map_err(StorageError::from)?;
            Ok(true)
        }
    }
}
