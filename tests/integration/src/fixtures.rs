//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("test{suffix}@example.com"),
            username: format!("testuser{suffix}"),
            password: "TestPass123!".to_string(),
            first_name: Some("Test".to_string()),
            last_name: None,
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Token refresh request: expired access token plus its refresh token
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub access_token: String,
    pub refresh_token: String,
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

/// User profile response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub roles: Vec<String>,
    pub created_at: String,
}

/// Create restaurant request
#[derive(Debug, Serialize)]
pub struct CreateRestaurantRequest {
    pub name: String,
    pub description: Option<String>,
}

impl CreateRestaurantRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Restaurant {suffix}"),
            description: Some("A test restaurant".to_string()),
        }
    }
}

/// Restaurant response
#[derive(Debug, Deserialize)]
pub struct RestaurantResponse {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Create branch request
#[derive(Debug, Serialize)]
pub struct CreateBranchRequest {
    pub restaurant_id: i64,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
}

impl CreateBranchRequest {
    pub fn unique(restaurant_id: i64) -> Self {
        let suffix = unique_suffix();
        Self {
            restaurant_id,
            name: format!("Branch {suffix}"),
            address: format!("{suffix} Main Street"),
            phone: None,
        }
    }
}

/// Branch response
#[derive(Debug, Deserialize)]
pub struct BranchResponse {
    pub id: i64,
    pub restaurant_id: i64,
    pub name: String,
    pub address: String,
}

/// Order line request
#[derive(Debug, Serialize)]
pub struct OrderLineRequest {
    pub menu_item_id: i64,
    pub quantity: u32,
}

/// Create order request
#[derive(Debug, Serialize)]
pub struct CreateOrderRequest {
    pub branch_id: i64,
    pub items: Vec<OrderLineRequest>,
}

/// Paged search response
#[derive(Debug, Deserialize)]
pub struct PagedResponse<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub page_index: usize,
    pub page_size: usize,
}

/// Search request body, built from raw JSON for flexibility
pub fn search_body(paging: Value) -> Value {
    serde_json::json!({
        "sorting_options": [],
        "filtering_options": [],
        "paging": paging,
    })
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
