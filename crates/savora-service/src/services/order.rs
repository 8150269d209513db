//! Order service
//!
//! Order placement snapshots unit prices from the menu at order time, so
//! later menu edits do not rewrite order history. State changes go through
//! the entity's transition rules.

use chrono::Utc;
use tracing::{info, instrument};

use savora_core::entities::{Order, OrderItem, OrderState};
use savora_core::error::DomainError;
use savora_core::search::SearchArgs;
use savora_core::value_objects::Permissions;

use crate::dto::{CreateOrderRequest, OrderResponse, PagedResponse, UpdateOrderStateRequest};

use super::context::{Actor, ServiceContext};
use super::error::{ServiceError, ServiceResult};

/// Order service
pub struct OrderService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> OrderService<'a> {
    /// Create a new OrderService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Place an order. Requires PLACE_ORDERS.
    #[instrument(skip(self, request), fields(branch_id = request.branch_id))]
    pub async fn place(
        &self,
        actor: &Actor,
        request: CreateOrderRequest,
    ) -> ServiceResult<OrderResponse> {
        if !self.ctx.permissions_of(actor).has(Permissions::PLACE_ORDERS) {
            return Err(ServiceError::permission_denied("PLACE_ORDERS"));
        }

        if request.items.is_empty() {
            return Err(DomainError::EmptyOrder.into());
        }

        self.ctx
            .branch_repo()
            .find_by_id(request.branch_id)
            .await?
            .ok_or(DomainError::BranchNotFound(request.branch_id))?;

        // Snapshot unit prices at order time
        let mut items = Vec::with_capacity(request.items.len());
        for line in &request.items {
            let menu_item = self
                .ctx
                .menu_item_repo()
                .find_by_id(line.menu_item_id)
                .await?
                .ok_or(DomainError::MenuItemNotFound(line.menu_item_id))?;

            items.push(OrderItem {
                menu_item_id: menu_item.id,
                quantity: line.quantity,
                unit_price_cents: menu_item.price_cents,
            });
        }

        let now = Utc::now();
        let mut order = Order {
            id: 0,
            branch_id: request.branch_id,
            customer_id: actor.id,
            state: OrderState::Pending,
            items,
            created_at: now,
            updated_at: now,
        };

        order.id = self.ctx.order_repo().create(&order).await?;

        info!(order_id = order.id, total_cents = order.total_cents(), "Order placed");

        Ok(OrderResponse::from(order))
    }

    /// Get an order. Visible to its customer and to MANAGE_ORDERS holders.
    #[instrument(skip(self))]
    pub async fn get(&self, actor: &Actor, id: i64) -> ServiceResult<OrderResponse> {
        let order = self
            .ctx
            .order_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::OrderNotFound(id))?;

        if order.customer_id != actor.id
            && !self.ctx.permissions_of(actor).has(Permissions::MANAGE_ORDERS)
        {
            return Err(ServiceError::permission_denied("MANAGE_ORDERS"));
        }

        Ok(OrderResponse::from(order))
    }

    /// Change an order's state. MANAGE_ORDERS holders may apply any legal
    /// transition; the customer may only cancel their own order.
    #[instrument(skip(self, request))]
    pub async fn update_state(
        &self,
        actor: &Actor,
        id: i64,
        request: UpdateOrderStateRequest,
    ) -> ServiceResult<OrderResponse> {
        let next = OrderState::parse(&request.state)
            .ok_or_else(|| ServiceError::validation(format!("Unknown state: {}", request.state)))?;

        let mut order = self
            .ctx
            .order_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::OrderNotFound(id))?;

        let can_manage = self.ctx.permissions_of(actor).has(Permissions::MANAGE_ORDERS);
        let is_own_cancel = order.customer_id == actor.id && next == OrderState::Cancelled;
        if !can_manage && !is_own_cancel {
            return Err(ServiceError::permission_denied("MANAGE_ORDERS"));
        }

        order.transition_to(next)?;

        self.ctx.order_repo().update_state(id, next).await?;

        info!(order_id = id, state = %next, "Order state changed");

        Ok(OrderResponse::from(order))
    }

    /// Paged search over the orders of one branch. Requires MANAGE_ORDERS.
    #[instrument(skip(self, args))]
    pub async fn search_by_branch(
        &self,
        actor: &Actor,
        branch_id: i64,
        args: &SearchArgs,
    ) -> ServiceResult<PagedResponse<OrderResponse>> {
        if !self.ctx.permissions_of(actor).has(Permissions::MANAGE_ORDERS) {
            return Err(ServiceError::permission_denied("MANAGE_ORDERS"));
        }

        self.ctx
            .branch_repo()
            .find_by_id(branch_id)
            .await?
            .ok_or(DomainError::BranchNotFound(branch_id))?;

        let page = self.ctx.order_repo().search_by_branch(branch_id, args).await?;
        Ok(PagedResponse::from_page(page, OrderResponse::from))
    }

    /// Paged search over the actor's own orders
    #[instrument(skip(self, args))]
    pub async fn search_mine(
        &self,
        actor: &Actor,
        args: &SearchArgs,
    ) -> ServiceResult<PagedResponse<OrderResponse>> {
        let page = self
            .ctx
            .order_repo()
            .search_by_customer(actor.id, args)
            .await?;
        Ok(PagedResponse::from_page(page, OrderResponse::from))
    }
}
