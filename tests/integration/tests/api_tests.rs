//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with migrations applied
//! - Environment variables: DATABASE_URL, JWT_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Register a fresh customer account and return its tokens
async fn register_user(server: &TestServer) -> AuthResponse {
    let request = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
    // Every new account starts as a customer
    assert!(auth.user.roles.contains(&"customer".to_string()));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/v1/auth/register", &request).await.unwrap();

    // Second registration with same email
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_weak_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password = "short".to_string();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let register_req = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register_req).await.unwrap();

    // Login
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.username, register_req.username);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "wrongpass123".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_rejects_unexpired_access_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register: the issued access token is fresh
    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Refresh must refuse a token that is still valid
    let refresh_req = RefreshTokenRequest {
        access_token: auth.access_token,
        refresh_token: auth.refresh_token,
    };
    let response = server.post("/api/v1/auth/refresh", &refresh_req).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.error.message, "This token hasn't expired yet");
}

#[tokio::test]
async fn test_refresh_rejects_malformed_access_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let refresh_req = RefreshTokenRequest {
        access_token: "not.a.jwt".to_string(),
        refresh_token: "does-not-matter".to_string(),
    };
    let response = server.post("/api/v1/auth/refresh", &refresh_req).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.error.message, "Invalid Token");
}

#[tokio::test]
async fn test_logout() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register
    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Logout without a body invalidates every live refresh token
    let response = server
        .post_auth("/api/v1/auth/logout", &auth.access_token, &())
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register
    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Get current user
    let response = server
        .get_auth("/api/v1/users/@me", &auth.access_token)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, auth.user.id);
    assert_eq!(user.username, register_req.username);
}

#[tokio::test]
async fn test_get_current_user_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_assign_role_requires_permission() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // A fresh customer cannot grant roles
    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let body = serde_json::json!({"role": "branch-manager"});
    let response = server
        .post_auth(
            &format!("/api/v1/users/{}/roles", auth.user.id),
            &auth.access_token,
            &body,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Restaurant Tests
// ============================================================================

#[tokio::test]
async fn test_create_restaurant_requires_permission() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Customers cannot create restaurants
    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let restaurant_req = CreateRestaurantRequest::unique();
    let response = server
        .post_auth("/api/v1/restaurants", &auth.access_token, &restaurant_req)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_get_unknown_restaurant() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let response = server
        .get_auth("/api/v1/restaurants/999999999", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_read_endpoints_require_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    for path in [
        "/api/v1/restaurants/1",
        "/api/v1/branches/1",
        "/api/v1/cuisine-types/1",
        "/api/v1/menus/1",
        "/api/v1/menu-items/1",
    ] {
        let response = server.get(path).await.unwrap();
        assert_status(response, StatusCode::UNAUTHORIZED)
            .await
            .unwrap_or_else(|e| panic!("{path}: {e}"));
    }
}

#[tokio::test]
async fn test_search_endpoints_require_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let body = search_body(serde_json::json!({"page_index": 0, "page_size": 5}));

    for path in [
        "/api/v1/restaurants/search",
        "/api/v1/branches/search",
        "/api/v1/cuisine-types/search",
        "/api/v1/restaurants/1/branches/search",
        "/api/v1/branches/1/menus/search",
        "/api/v1/menus/1/items/search",
    ] {
        let response = server.post(path, &body).await.unwrap();
        assert_status(response, StatusCode::UNAUTHORIZED)
            .await
            .unwrap_or_else(|e| panic!("{path}: {e}"));
    }
}

// ============================================================================
// Search Tests
// ============================================================================

#[tokio::test]
async fn test_search_restaurants_paged_shape() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let body = search_body(serde_json::json!({"page_index": 0, "page_size": 5}));
    let response = server
        .post_auth("/api/v1/restaurants/search", &auth.access_token, &body)
        .await
        .unwrap();
    let page: PagedResponse<RestaurantResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.page_index, 0);
    assert_eq!(page.page_size, 5);
    assert!(page.items.len() <= 5);
}

#[tokio::test]
async fn test_search_clamps_oversized_page() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let body = search_body(serde_json::json!({"page_index": 0, "page_size": 10000}));
    let response = server
        .post_auth("/api/v1/restaurants/search", &auth.access_token, &body)
        .await
        .unwrap();
    let page: PagedResponse<RestaurantResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.page_size, 100);
}

#[tokio::test]
async fn test_search_ignores_unknown_fields() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    // Unrecognized sort and filter fields are dropped, not rejected
    let body = serde_json::json!({
        "sorting_options": [{"field": "no_such_field", "direction": "DESC"}],
        "filtering_options": [{"field": "no_such_field", "value": "x"}],
        "paging": {"page_index": 0, "page_size": 10},
    });
    let response = server
        .post_auth("/api/v1/restaurants/search", &auth.access_token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_search_cuisine_types() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let body = search_body(serde_json::json!({"page_index": 0, "page_size": 20}));
    let response = server
        .post_auth("/api/v1/cuisine-types/search", &auth.access_token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Order Tests
// ============================================================================

#[tokio::test]
async fn test_place_empty_order_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let order_req = CreateOrderRequest {
        branch_id: 1,
        items: Vec::new(),
    };
    let response = server
        .post_auth("/api/v1/orders", &auth.access_token, &order_req)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_get_order_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/orders/1").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_search_own_orders_empty_for_new_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let body = search_body(serde_json::json!({"page_index": 0, "page_size": 10}));
    let response = server
        .post_auth("/api/v1/users/@me/orders/search", &auth.access_token, &body)
        .await
        .unwrap();
    let page: PagedResponse<serde_json::Value> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.total_count, 0);
    assert!(page.items.is_empty());
}
