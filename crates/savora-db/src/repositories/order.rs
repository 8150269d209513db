//! PostgreSQL implementation of OrderRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use savora_core::entities::{Order, OrderItem, OrderState};
use savora_core::search::{search, PagedList, SearchArgs};
use savora_core::traits::{OrderRepository, RepoResult};

use crate::models::{OrderItemModel, OrderModel};

use super::error::{map_db_error, order_not_found};

/// PostgreSQL implementation of OrderRepository
#[derive(Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    /// Create a new PgOrderRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Hydrate a batch of order rows with their lines in one query
    async fn attach_items(&self, rows: Vec<OrderModel>) -> RepoResult<Vec<Order>> {
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();

        let item_rows = sqlx::query_as::<_, OrderItemModel>(
            r"
            SELECT order_id, menu_item_id, quantity, unit_price_cents
            FROM order_items
            WHERE order_id = ANY($1)
            ORDER BY menu_item_id
            ",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut by_order: HashMap<i64, Vec<OrderItem>> = HashMap::new();
        for item in item_rows {
            by_order
                .entry(item.order_id)
                .or_default()
                .push(OrderItem::from(item));
        }

        rows.into_iter()
            .map(|row| {
                let items = by_order.remove(&row.id).unwrap_or_default();
                row.into_order(items)
            })
            .collect()
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Order>> {
        let result = sqlx::query_as::<_, OrderModel>(
            r"
            SELECT id, branch_id, customer_id, state, created_at, updated_at
            FROM orders
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match result {
            Some(row) => Ok(self.attach_items(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    #[instrument(skip(self, order))]
    async fn create(&self, order: &Order) -> RepoResult<i64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO orders (branch_id, customer_id, state, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            ",
        )
        .bind(order.branch_id)
        .bind(order.customer_id)
        .bind(order.state.as_str())
        .bind(order.created_at)
        .bind(order.updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        for item in &order.items {
            sqlx::query(
                r"
                INSERT INTO order_items (order_id, menu_item_id, quantity, unit_price_cents)
                VALUES ($1, $2, $3, $4)
                ",
            )
            .bind(id)
            .bind(item.menu_item_id)
            .bind(item.quantity)
            .bind(item.unit_price_cents)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn update_state(&self, id: i64, state: OrderState) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE orders
            SET state = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(state.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(order_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn search_by_branch(
        &self,
        branch_id: i64,
        args: &SearchArgs,
    ) -> RepoResult<PagedList<Order>> {
        let rows = sqlx::query_as::<_, OrderModel>(
            r"
            SELECT id, branch_id, customer_id, state, created_at, updated_at
            FROM orders
            WHERE branch_id = $1
            ",
        )
        .bind(branch_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let orders = self.attach_items(rows).await?;
        Ok(search(&Order::search_schema(), orders, args))
    }

    #[instrument(skip(self))]
    async fn search_by_customer(
        &self,
        customer_id: i64,
        args: &SearchArgs,
    ) -> RepoResult<PagedList<Order>> {
        let rows = sqlx::query_as::<_, OrderModel>(
            r"
            SELECT id, branch_id, customer_id, state, created_at, updated_at
            FROM orders
            WHERE customer_id = $1
            ",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let orders = self.attach_items(rows).await?;
        Ok(search(&Order::search_schema(), orders, args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgOrderRepository>();
    }
}
