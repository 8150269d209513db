//! PostgreSQL implementation of BranchRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use savora_core::entities::Branch;
use savora_core::search::{search, PagedList, SearchArgs};
use savora_core::traits::{BranchRepository, RepoResult};

use crate::models::BranchModel;

use super::error::{branch_not_found, map_db_error};

/// PostgreSQL implementation of BranchRepository
#[derive(Clone)]
pub struct PgBranchRepository {
    pool: PgPool,
}

impl PgBranchRepository {
    /// Create a new PgBranchRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BranchRepository for PgBranchRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Branch>> {
        let result = sqlx::query_as::<_, BranchModel>(
            r"
            SELECT id, restaurant_id, name, address, phone, created_at, updated_at
            FROM branches
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Branch::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, branch: &Branch) -> RepoResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO branches (restaurant_id, name, address, phone, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            ",
        )
        .bind(branch.restaurant_id)
        .bind(&branch.name)
        .bind(&branch.address)
        .bind(&branch.phone)
        .bind(branch.created_at)
        .bind(branch.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn update(&self, branch: &Branch) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE branches
            SET name = $2, address = $3, phone = $4, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(branch.id)
        .bind(&branch.name)
        .bind(&branch.address)
        .bind(&branch.phone)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(branch_not_found(branch.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM branches WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(branch_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn search(&self, args: &SearchArgs) -> RepoResult<PagedList<Branch>> {
        let rows = sqlx::query_as::<_, BranchModel>(
            r"
            SELECT id, restaurant_id, name, address, phone, created_at, updated_at
            FROM branches
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let branches = rows.into_iter().map(Branch::from).collect();
        Ok(search(&Branch::search_schema(), branches, args))
    }

    #[instrument(skip(self))]
    async fn search_by_restaurant(
        &self,
        restaurant_id: i64,
        args: &SearchArgs,
    ) -> RepoResult<PagedList<Branch>> {
        let rows = sqlx::query_as::<_, BranchModel>(
            r"
            SELECT id, restaurant_id, name, address, phone, created_at, updated_at
            FROM branches
            WHERE restaurant_id = $1
            ",
        )
        .bind(restaurant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let branches = rows.into_iter().map(Branch::from).collect();
        Ok(search(&Branch::search_schema(), branches, args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgBranchRepository>();
    }
}
