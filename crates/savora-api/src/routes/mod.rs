//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{
    auth, branches, cuisine_types, health, menu_items, menus, orders, restaurants, users,
};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(restaurant_routes())
        .merge(branch_routes())
        .merge(cuisine_type_routes())
        .merge(menu_routes())
        .merge(order_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/logout", post(auth::logout))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/users/@me", patch(users::update_current_user))
        .route("/users/@me/orders/search", post(orders::search_own_orders))
        .route("/users/:user_id/roles", post(users::assign_role))
}

/// Restaurant routes
fn restaurant_routes() -> Router<AppState> {
    Router::new()
        .route("/restaurants", post(restaurants::create_restaurant))
        .route("/restaurants/search", post(restaurants::search_restaurants))
        .route("/restaurants/:restaurant_id", get(restaurants::get_restaurant))
        .route("/restaurants/:restaurant_id", patch(restaurants::update_restaurant))
        .route("/restaurants/:restaurant_id", delete(restaurants::delete_restaurant))
        .route(
            "/restaurants/:restaurant_id/branches/search",
            post(branches::search_restaurant_branches),
        )
}

/// Branch routes
fn branch_routes() -> Router<AppState> {
    Router::new()
        .route("/branches", post(branches::create_branch))
        .route("/branches/search", post(branches::search_branches))
        .route("/branches/:branch_id", get(branches::get_branch))
        .route("/branches/:branch_id", patch(branches::update_branch))
        .route("/branches/:branch_id", delete(branches::delete_branch))
        .route("/branches/:branch_id/menus/search", post(menus::search_branch_menus))
        .route("/branches/:branch_id/orders/search", post(orders::search_branch_orders))
}

/// Cuisine type routes
fn cuisine_type_routes() -> Router<AppState> {
    Router::new()
        .route("/cuisine-types", post(cuisine_types::create_cuisine_type))
        .route("/cuisine-types/search", post(cuisine_types::search_cuisine_types))
        .route("/cuisine-types/:cuisine_type_id", get(cuisine_types::get_cuisine_type))
        .route("/cuisine-types/:cuisine_type_id", patch(cuisine_types::update_cuisine_type))
        .route("/cuisine-types/:cuisine_type_id", delete(cuisine_types::delete_cuisine_type))
}

/// Menu and menu item routes
fn menu_routes() -> Router<AppState> {
    Router::new()
        .route("/menus", post(menus::create_menu))
        .route("/menus/:menu_id", get(menus::get_menu))
        .route("/menus/:menu_id", patch(menus::update_menu))
        .route("/menus/:menu_id", delete(menus::delete_menu))
        .route("/menus/:menu_id/items/search", post(menu_items::search_menu_items))
        .route("/menu-items", post(menu_items::create_menu_item))
        .route("/menu-items/:menu_item_id", get(menu_items::get_menu_item))
        .route("/menu-items/:menu_item_id", patch(menu_items::update_menu_item))
        .route("/menu-items/:menu_item_id", delete(menu_items::delete_menu_item))
}

/// Order routes
fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", post(orders::place_order))
        .route("/orders/:order_id", get(orders::get_order))
        .route("/orders/:order_id/state", patch(orders::update_order_state))
}
