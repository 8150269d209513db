//! Order entity - a customer order placed against a branch

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::search::SearchSchema;

/// Order lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderState {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl OrderState {
    /// Stable string form used in the database and in search filters
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parse the database/string form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Check whether a transition to `next` is legal
    pub fn can_transition_to(self, next: OrderState) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed)
                | (Self::Confirmed, Self::Completed)
                | (Self::Pending | Self::Confirmed, Self::Cancelled)
        )
    }
}

impl std::fmt::Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of an order. The unit price is captured at order time so later
/// menu edits do not rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub menu_item_id: i64,
    pub quantity: i32,
    pub unit_price_cents: i64,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: i64,
    pub branch_id: i64,
    pub customer_id: i64,
    pub state: OrderState,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Create a new pending Order
    pub fn new(id: i64, branch_id: i64, customer_id: i64, items: Vec<OrderItem>) -> Self {
        let now = Utc::now();
        Self {
            id,
            branch_id,
            customer_id,
            state: OrderState::Pending,
            items,
            created_at: now,
            updated_at: now,
        }
    }

    /// Total of all lines in cents
    pub fn total_cents(&self) -> i64 {
        self.items
            .iter()
            .map(|i| i.unit_price_cents * i64::from(i.quantity))
            .sum()
    }

    /// Transition the order to a new state
    pub fn transition_to(&mut self, next: OrderState) -> Result<(), DomainError> {
        if !self.state.can_transition_to(next) {
            return Err(DomainError::InvalidOrderTransition {
                from: self.state.to_string(),
                to: next.to_string(),
            });
        }
        self.state = next;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Allow-listed searchable fields for orders
    pub fn search_schema() -> SearchSchema<Self> {
        SearchSchema::new(|a: &Self, b: &Self| a.id.cmp(&b.id))
            .sortable("id", |a, b| a.id.cmp(&b.id))
            .sortable("state", |a, b| a.state.as_str().cmp(b.state.as_str()))
            .filterable("id", |o, v| v.as_i64().is_some_and(|id| o.id == id))
            .filterable("state", |o, v| {
                v.as_text().is_some_and(|s| o.state.as_str() == s)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_cents() {
        let order = Order::new(
            1,
            1,
            1,
            vec![
                OrderItem {
                    menu_item_id: 10,
                    quantity: 2,
                    unit_price_cents: 450,
                },
                OrderItem {
                    menu_item_id: 11,
                    quantity: 1,
                    unit_price_cents: 1200,
                },
            ],
        );
        assert_eq!(order.total_cents(), 2100);
    }

    #[test]
    fn test_legal_transitions() {
        let mut order = Order::new(1, 1, 1, Vec::new());
        assert!(order.transition_to(OrderState::Confirmed).is_ok());
        assert!(order.transition_to(OrderState::Completed).is_ok());
    }

    #[test]
    fn test_illegal_transition_rejected() {
        let mut order = Order::new(1, 1, 1, Vec::new());
        order.state = OrderState::Completed;
        let result = order.transition_to(OrderState::Cancelled);
        assert!(matches!(
            result,
            Err(DomainError::InvalidOrderTransition { .. })
        ));
    }

    #[test]
    fn test_state_round_trip() {
        for state in [
            OrderState::Pending,
            OrderState::Confirmed,
            OrderState::Completed,
            OrderState::Cancelled,
        ] {
            assert_eq!(OrderState::parse(state.as_str()), Some(state));
        }
        assert_eq!(OrderState::parse("shipped"), None);
    }
}
