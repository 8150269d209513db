//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Entity IDs are
//! serialized as numbers; prices are integer cents.

use chrono::{DateTime, Utc};
use serde::Serialize;

use savora_core::PagedList;

// ============================================================================
// Common Response Types
// ============================================================================

/// Paged search response
#[derive(Debug, Serialize)]
pub struct PagedResponse<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub page_index: usize,
    pub page_size: usize,
}

impl<T> PagedResponse<T> {
    /// Convert a domain page, mapping each item into its response DTO
    pub fn from_page<E, F>(page: PagedList<E>, f: F) -> Self
    where
        F: FnMut(E) -> T,
    {
        let page = page.map(f);
        Self {
            items: page.items,
            total_count: page.total_count,
            page_index: page.page_index,
            page_size: page.page_size,
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Current authenticated user response (includes email)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: i64,
    pub email: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Restaurant Responses
// ============================================================================

/// Restaurant response
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantResponse {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Branch response
#[derive(Debug, Clone, Serialize)]
pub struct BranchResponse {
    pub id: i64,
    pub restaurant_id: i64,
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Cuisine type response
#[derive(Debug, Clone, Serialize)]
pub struct CuisineTypeResponse {
    pub id: i64,
    pub name: String,
}

// ============================================================================
// Menu Responses
// ============================================================================

/// Menu response
#[derive(Debug, Clone, Serialize)]
pub struct MenuResponse {
    pub id: i64,
    pub branch_id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub active: bool,
}

/// Menu item response
#[derive(Debug, Clone, Serialize)]
pub struct MenuItemResponse {
    pub id: i64,
    pub menu_id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price_cents: i64,
}

// ============================================================================
// Order Responses
// ============================================================================

/// One line of an order
#[derive(Debug, Clone, Serialize)]
pub struct OrderItemResponse {
    pub menu_item_id: i64,
    pub quantity: i32,
    pub unit_price_cents: i64,
}

/// Order response
#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    pub id: i64,
    pub branch_id: i64,
    pub customer_id: i64,
    pub state: String,
    pub items: Vec<OrderItemResponse>,
    pub total_cents: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
