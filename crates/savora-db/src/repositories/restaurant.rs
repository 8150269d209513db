//! PostgreSQL implementation of RestaurantRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use savora_core::entities::Restaurant;
use savora_core::search::{search, PagedList, SearchArgs};
use savora_core::traits::{RepoResult, RestaurantRepository};

use crate::models::RestaurantModel;

use super::error::{map_db_error, restaurant_not_found};

/// PostgreSQL implementation of RestaurantRepository
#[derive(Clone)]
pub struct PgRestaurantRepository {
    pool: PgPool,
}

impl PgRestaurantRepository {
    /// Create a new PgRestaurantRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RestaurantRepository for PgRestaurantRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Restaurant>> {
        let result = sqlx::query_as::<_, RestaurantModel>(
            r"
            SELECT id, owner_id, name, description, created_at, updated_at
            FROM restaurants
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Restaurant::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, restaurant: &Restaurant) -> RepoResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO restaurants (owner_id, name, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            ",
        )
        .bind(restaurant.owner_id)
        .bind(&restaurant.name)
        .bind(&restaurant.description)
        .bind(restaurant.created_at)
        .bind(restaurant.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn update(&self, restaurant: &Restaurant) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE restaurants
            SET name = $2, description = $3, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(restaurant.id)
        .bind(&restaurant.name)
        .bind(&restaurant.description)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(restaurant_not_found(restaurant.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM restaurants WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(restaurant_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn search(&self, args: &SearchArgs) -> RepoResult<PagedList<Restaurant>> {
        let rows = sqlx::query_as::<_, RestaurantModel>(
            r"
            SELECT id, owner_id, name, description, created_at, updated_at
            FROM restaurants
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let restaurants = rows.into_iter().map(Restaurant::from).collect();
        Ok(search(&Restaurant::search_schema(), restaurants, args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgRestaurantRepository>();
    }
}
