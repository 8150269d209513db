//! PostgreSQL implementation of CuisineTypeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use savora_core::entities::CuisineType;
use savora_core::error::DomainError;
use savora_core::search::{search, PagedList, SearchArgs};
use savora_core::traits::{CuisineTypeRepository, RepoResult};

use crate::models::CuisineTypeModel;

use super::error::{cuisine_type_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of CuisineTypeRepository
#[derive(Clone)]
pub struct PgCuisineTypeRepository {
    pool: PgPool,
}

impl PgCuisineTypeRepository {
    /// Create a new PgCuisineTypeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CuisineTypeRepository for PgCuisineTypeRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<CuisineType>> {
        let result = sqlx::query_as::<_, CuisineTypeModel>(
            r"
            SELECT id, name, created_at, updated_at
            FROM cuisine_types
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(CuisineType::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, cuisine_type: &CuisineType) -> RepoResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO cuisine_types (name, created_at, updated_at)
            VALUES ($1, $2, $3)
            RETURNING id
            ",
        )
        .bind(&cuisine_type.name)
        .bind(cuisine_type.created_at)
        .bind(cuisine_type.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::CuisineTypeAlreadyExists))?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn update(&self, cuisine_type: &CuisineType) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE cuisine_types
            SET name = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(cuisine_type.id)
        .bind(&cuisine_type.name)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::CuisineTypeAlreadyExists))?;

        if result.rows_affected() == 0 {
            return Err(cuisine_type_not_found(cuisine_type.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM cuisine_types WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(cuisine_type_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn search(&self, args: &SearchArgs) -> RepoResult<PagedList<CuisineType>> {
        let rows = sqlx::query_as::<_, CuisineTypeModel>(
            r"
            SELECT id, name, created_at, updated_at
            FROM cuisine_types
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let cuisine_types = rows.into_iter().map(CuisineType::from).collect();
        Ok(search(&CuisineType::search_schema(), cuisine_types, args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCuisineTypeRepository>();
    }
}
