//! Error handling utilities for repositories

use savora_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: i64) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "restaurant not found" error
pub fn restaurant_not_found(id: i64) -> DomainError {
    DomainError::RestaurantNotFound(id)
}

/// Create a "branch not found" error
pub fn branch_not_found(id: i64) -> DomainError {
    DomainError::BranchNotFound(id)
}

/// Create a "cuisine type not found" error
pub fn cuisine_type_not_found(id: i64) -> DomainError {
    DomainError::CuisineTypeNotFound(id)
}

/// Create a "menu not found" error
pub fn menu_not_found(id: i64) -> DomainError {
    DomainError::MenuNotFound(id)
}

/// Create a "menu item not found" error
pub fn menu_item_not_found(id: i64) -> DomainError {
    DomainError::MenuItemNotFound(id)
}

/// Create an "order not found" error
pub fn order_not_found(id: i64) -> DomainError {
    DomainError::OrderNotFound(id)
}
