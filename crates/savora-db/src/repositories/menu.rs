//! PostgreSQL implementation of MenuRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use savora_core::entities::Menu;
use savora_core::search::{search, PagedList, SearchArgs};
use savora_core::traits::{MenuRepository, RepoResult};

use crate::models::MenuModel;

use super::error::{map_db_error, menu_not_found};

/// PostgreSQL implementation of MenuRepository
#[derive(Clone)]
pub struct PgMenuRepository {
    pool: PgPool,
}

impl PgMenuRepository {
    /// Create a new PgMenuRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuRepository for PgMenuRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Menu>> {
        let result = sqlx::query_as::<_, MenuModel>(
            r"
            SELECT id, branch_id, name, description, active, created_at, updated_at
            FROM menus
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Menu::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, menu: &Menu) -> RepoResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO menus (branch_id, name, description, active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            ",
        )
        .bind(menu.branch_id)
        .bind(&menu.name)
        .bind(&menu.description)
        .bind(menu.active)
        .bind(menu.created_at)
        .bind(menu.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn update(&self, menu: &Menu) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE menus
            SET name = $2, description = $3, active = $4, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(menu.id)
        .bind(&menu.name)
        .bind(&menu.description)
        .bind(menu.active)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(menu_not_found(menu.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM menus WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(menu_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn search_by_branch(
        &self,
        branch_id: i64,
        args: &SearchArgs,
    ) -> RepoResult<PagedList<Menu>> {
        let rows = sqlx::query_as::<_, MenuModel>(
            r"
            SELECT id, branch_id, name, description, active, created_at, updated_at
            FROM menus
            WHERE branch_id = $1
            ",
        )
        .bind(branch_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let menus = rows.into_iter().map(Menu::from).collect();
        Ok(search(&Menu::search_schema(), menus, args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgMenuRepository>();
    }
}
