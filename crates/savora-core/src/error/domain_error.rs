//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(i64),

    #[error("Branch not found: {0}")]
    BranchNotFound(i64),

    #[error("Cuisine type not found: {0}")]
    CuisineTypeNotFound(i64),

    #[error("Menu not found: {0}")]
    MenuNotFound(i64),

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(i64),

    #[error("Order not found: {0}")]
    OrderNotFound(i64),

    #[error("Role not found: {0}")]
    RoleNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Order must contain at least one item")]
    EmptyOrder,

    #[error("Invalid order state transition: {from} -> {to}")]
    InvalidOrderTransition { from: String, to: String },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Missing permission: {0}")]
    MissingPermission(String),

    #[error("Not the restaurant owner")]
    NotRestaurantOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Cuisine type already exists")]
    CuisineTypeAlreadyExists,

    #[error("User already has this role")]
    AlreadyHasRole,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::RestaurantNotFound(_) => "UNKNOWN_RESTAURANT",
            Self::BranchNotFound(_) => "UNKNOWN_BRANCH",
            Self::CuisineTypeNotFound(_) => "UNKNOWN_CUISINE_TYPE",
            Self::MenuNotFound(_) => "UNKNOWN_MENU",
            Self::MenuItemNotFound(_) => "UNKNOWN_MENU_ITEM",
            Self::OrderNotFound(_) => "UNKNOWN_ORDER",
            Self::RoleNotFound(_) => "UNKNOWN_ROLE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::EmptyOrder => "EMPTY_ORDER",
            Self::InvalidOrderTransition { .. } => "INVALID_ORDER_TRANSITION",

            // Authorization
            Self::MissingPermission(_) => "MISSING_PERMISSIONS",
            Self::NotRestaurantOwner => "NOT_RESTAURANT_OWNER",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::CuisineTypeAlreadyExists => "CUISINE_TYPE_ALREADY_EXISTS",
            Self::AlreadyHasRole => "ALREADY_HAS_ROLE",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::RestaurantNotFound(_)
                | Self::BranchNotFound(_)
                | Self::CuisineTypeNotFound(_)
                | Self::MenuNotFound(_)
                | Self::MenuItemNotFound(_)
                | Self::OrderNotFound(_)
                | Self::RoleNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::EmptyOrder
                | Self::InvalidOrderTransition { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::MissingPermission(_) | Self::NotRestaurantOwner)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists | Self::CuisineTypeAlreadyExists | Self::AlreadyHasRole
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(DomainError::BranchNotFound(1).is_not_found());
        assert!(DomainError::EmptyOrder.is_validation());
        assert!(DomainError::NotRestaurantOwner.is_authorization());
        assert!(DomainError::EmailAlreadyExists.is_conflict());
        assert!(!DomainError::DatabaseError("boom".into()).is_not_found());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(DomainError::MenuNotFound(3).code(), "UNKNOWN_MENU");
        assert_eq!(
            DomainError::InvalidOrderTransition {
                from: "completed".into(),
                to: "pending".into()
            }
            .code(),
            "INVALID_ORDER_TRANSITION"
        );
    }
}
