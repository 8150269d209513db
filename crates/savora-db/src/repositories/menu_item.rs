//! PostgreSQL implementation of MenuItemRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use savora_core::entities::MenuItem;
use savora_core::search::{search, PagedList, SearchArgs};
use savora_core::traits::{MenuItemRepository, RepoResult};

use crate::models::MenuItemModel;

use super::error::{map_db_error, menu_item_not_found};

/// PostgreSQL implementation of MenuItemRepository
#[derive(Clone)]
pub struct PgMenuItemRepository {
    pool: PgPool,
}

impl PgMenuItemRepository {
    /// Create a new PgMenuItemRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuItemRepository for PgMenuItemRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<MenuItem>> {
        let result = sqlx::query_as::<_, MenuItemModel>(
            r"
            SELECT id, menu_id, name, description, price_cents, created_at, updated_at
            FROM menu_items
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(MenuItem::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, item: &MenuItem) -> RepoResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO menu_items (menu_id, name, description, price_cents, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            ",
        )
        .bind(item.menu_id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.price_cents)
        .bind(item.created_at)
        .bind(item.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn update(&self, item: &MenuItem) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE menu_items
            SET name = $2, description = $3, price_cents = $4, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.price_cents)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(menu_item_not_found(item.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM menu_items WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(menu_item_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn search_by_menu(
        &self,
        menu_id: i64,
        args: &SearchArgs,
    ) -> RepoResult<PagedList<MenuItem>> {
        let rows = sqlx::query_as::<_, MenuItemModel>(
            r"
            SELECT id, menu_id, name, description, price_cents, created_at, updated_at
            FROM menu_items
            WHERE menu_id = $1
            ",
        )
        .bind(menu_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let items = rows.into_iter().map(MenuItem::from).collect();
        Ok(search(&MenuItem::search_schema(), items, args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgMenuItemRepository>();
    }
}
