//! Entity to response DTO conversions

use savora_core::entities::{Branch, CuisineType, Menu, MenuItem, Order, OrderItem, Restaurant, User};

use super::responses::{
    BranchResponse, CuisineTypeResponse, CurrentUserResponse, MenuItemResponse, MenuResponse,
    OrderItemResponse, OrderResponse, RestaurantResponse,
};

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            roles: user.roles.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<Restaurant> for RestaurantResponse {
    fn from(r: Restaurant) -> Self {
        Self {
            id: r.id,
            owner_id: r.owner_id,
            name: r.name,
            description: r.description,
            created_at: r.created_at,
        }
    }
}

impl From<Branch> for BranchResponse {
    fn from(b: Branch) -> Self {
        Self {
            id: b.id,
            restaurant_id: b.restaurant_id,
            name: b.name,
            address: b.address,
            phone: b.phone,
            created_at: b.created_at,
        }
    }
}

impl From<CuisineType> for CuisineTypeResponse {
    fn from(c: CuisineType) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

impl From<Menu> for MenuResponse {
    fn from(m: Menu) -> Self {
        Self {
            id: m.id,
            branch_id: m.branch_id,
            name: m.name,
            description: m.description,
            active: m.active,
        }
    }
}

impl From<MenuItem> for MenuItemResponse {
    fn from(m: MenuItem) -> Self {
        Self {
            id: m.id,
            menu_id: m.menu_id,
            name: m.name,
            description: m.description,
            price_cents: m.price_cents,
        }
    }
}

impl From<&OrderItem> for OrderItemResponse {
    fn from(i: &OrderItem) -> Self {
        Self {
            menu_item_id: i.menu_item_id,
            quantity: i.quantity,
            unit_price_cents: i.unit_price_cents,
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        let total_cents = o.total_cents();
        Self {
            id: o.id,
            branch_id: o.branch_id,
            customer_id: o.customer_id,
            state: o.state.to_string(),
            items: o.items.iter().map(OrderItemResponse::from).collect(),
            total_cents,
            created_at: o.created_at,
            updated_at: o.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use savora_core::entities::OrderState;

    #[test]
    fn test_order_response_computes_total() {
        let mut order = Order::new(
            1,
            2,
            3,
            vec![OrderItem {
                menu_item_id: 9,
                quantity: 3,
                unit_price_cents: 500,
            }],
        );
        order.state = OrderState::Confirmed;

        let response = OrderResponse::from(order);
        assert_eq!(response.total_cents, 1500);
        assert_eq!(response.state, "confirmed");
        assert_eq!(response.items.len(), 1);
    }
}
