//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    #[validate(length(max = 64, message = "First name must be at most 64 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 64, message = "Last name must be at most 64 characters"))]
    pub last_name: Option<String>,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request: the expired access token plus the opaque refresh
/// token id that was issued alongside it
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub access_token: String,
    pub refresh_token: String,
}

/// Logout request (optional refresh token to invalidate; when absent every
/// live token of the user is invalidated)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

// ============================================================================
// User Requests
// ============================================================================

/// Update current user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: Option<String>,

    #[validate(length(max = 64, message = "First name must be at most 64 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 64, message = "Last name must be at most 64 characters"))]
    pub last_name: Option<String>,
}

// ============================================================================
// Restaurant Requests
// ============================================================================

/// Create restaurant request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRestaurantRequest {
    #[validate(length(min = 1, max = 100, message = "Restaurant name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
}

/// Update restaurant request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRestaurantRequest {
    #[validate(length(min = 1, max = 100, message = "Restaurant name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
}

// ============================================================================
// Branch Requests
// ============================================================================

/// Create branch request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBranchRequest {
    pub restaurant_id: i64,

    #[validate(length(min = 1, max = 100, message = "Branch name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 200, message = "Address must be 1-200 characters"))]
    pub address: String,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,
}

/// Update branch request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateBranchRequest {
    #[validate(length(min = 1, max = 100, message = "Branch name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Address must be 1-200 characters"))]
    pub address: Option<String>,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,
}

// ============================================================================
// Cuisine Type Requests
// ============================================================================

/// Create cuisine type request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCuisineTypeRequest {
    #[validate(length(min = 1, max = 64, message = "Cuisine name must be 1-64 characters"))]
    pub name: String,
}

/// Update cuisine type request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCuisineTypeRequest {
    #[validate(length(min = 1, max = 64, message = "Cuisine name must be 1-64 characters"))]
    pub name: String,
}

// ============================================================================
// Menu Requests
// ============================================================================

/// Create menu request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMenuRequest {
    pub branch_id: i64,

    #[validate(length(min = 1, max = 100, message = "Menu name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
}

/// Update menu request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMenuRequest {
    #[validate(length(min = 1, max = 100, message = "Menu name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    pub active: Option<bool>,
}

// ============================================================================
// Menu Item Requests
// ============================================================================

/// Create menu item request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMenuItemRequest {
    pub menu_id: i64,

    #[validate(length(min = 1, max = 100, message = "Item name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price_cents: i64,
}

/// Update menu item request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMenuItemRequest {
    #[validate(length(min = 1, max = 100, message = "Item name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price_cents: Option<i64>,
}

// ============================================================================
// Order Requests
// ============================================================================

/// One line of a new order
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OrderLineRequest {
    pub menu_item_id: i64,

    #[validate(range(min = 1, max = 99, message = "Quantity must be 1-99"))]
    pub quantity: i32,
}

/// Place order request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrderRequest {
    pub branch_id: i64,

    #[validate(nested)]
    pub items: Vec<OrderLineRequest>,
}

/// Order state change request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateOrderStateRequest {
    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let request = RegisterRequest {
            email: "not-an-email".to_string(),
            username: "x".to_string(),
            password: "short".to_string(),
            first_name: None,
            last_name: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("username"));
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_order_line_quantity_bounds() {
        let line = OrderLineRequest {
            menu_item_id: 1,
            quantity: 0,
        };
        assert!(line.validate().is_err());

        let line = OrderLineRequest {
            menu_item_id: 1,
            quantity: 3,
        };
        assert!(line.validate().is_ok());
    }
}
