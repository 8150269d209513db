//! Order database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use savora_core::entities::{Order, OrderItem, OrderState};
use savora_core::error::DomainError;

/// Database model for orders table
#[derive(Debug, Clone, FromRow)]
pub struct OrderModel {
    pub id: i64,
    pub branch_id: i64,
    pub customer_id: i64,
    pub state: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for order_items table
#[derive(Debug, Clone, FromRow)]
pub struct OrderItemModel {
    pub order_id: i64,
    pub menu_item_id: i64,
    pub quantity: i32,
    pub unit_price_cents: i64,
}

impl OrderModel {
    /// Convert into the domain entity, attaching its lines
    pub fn into_order(self, items: Vec<OrderItem>) -> Result<Order, DomainError> {
        let state = OrderState::parse(&self.state).ok_or_else(|| {
            DomainError::DatabaseError(format!("unknown order state '{}'", self.state))
        })?;

        Ok(Order {
            id: self.id,
            branch_id: self.branch_id,
            customer_id: self.customer_id,
            state,
            items,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl From<OrderItemModel> for OrderItem {
    fn from(m: OrderItemModel) -> Self {
        Self {
            menu_item_id: m.menu_item_id,
            quantity: m.quantity,
            unit_price_cents: m.unit_price_cents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_order_rejects_unknown_state() {
        let model = OrderModel {
            id: 1,
            branch_id: 2,
            customer_id: 3,
            state: "shipped".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(model.into_order(Vec::new()).is_err());
    }
}
