//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Branch, CuisineType, Menu, MenuItem, Order, OrderState, Restaurant, User};
use crate::error::DomainError;
use crate::search::{PagedList, SearchArgs};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID, role names included
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by email, role names included
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user, returning the generated id
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<i64>;

    /// Update profile fields of an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;

    /// Grant a role to a user; the role row is created on first use
    async fn assign_role(&self, user_id: i64, role: &str) -> RepoResult<()>;
}

// ============================================================================
// Restaurant Repository
// ============================================================================

#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Find restaurant by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Restaurant>>;

    /// Create a new restaurant, returning the generated id
    async fn create(&self, restaurant: &Restaurant) -> RepoResult<i64>;

    /// Update an existing restaurant
    async fn update(&self, restaurant: &Restaurant) -> RepoResult<()>;

    /// Delete a restaurant
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Paged search over all restaurants
    async fn search(&self, args: &SearchArgs) -> RepoResult<PagedList<Restaurant>>;
}

// ============================================================================
// Branch Repository
// ============================================================================

#[async_trait]
pub trait BranchRepository: Send + Sync {
    /// Find branch by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Branch>>;

    /// Create a new branch, returning the generated id
    async fn create(&self, branch: &Branch) -> RepoResult<i64>;

    /// Update an existing branch
    async fn update(&self, branch: &Branch) -> RepoResult<()>;

    /// Delete a branch
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Paged search over all branches
    async fn search(&self, args: &SearchArgs) -> RepoResult<PagedList<Branch>>;

    /// Paged search over the branches of one restaurant
    async fn search_by_restaurant(
        &self,
        restaurant_id: i64,
        args: &SearchArgs,
    ) -> RepoResult<PagedList<Branch>>;
}

// ============================================================================
// Cuisine Type Repository
// ============================================================================

#[async_trait]
pub trait CuisineTypeRepository: Send + Sync {
    /// Find cuisine type by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<CuisineType>>;

    /// Create a new cuisine type, returning the generated id
    async fn create(&self, cuisine_type: &CuisineType) -> RepoResult<i64>;

    /// Update an existing cuisine type
    async fn update(&self, cuisine_type: &CuisineType) -> RepoResult<()>;

    /// Delete a cuisine type
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Paged search over all cuisine types
    async fn search(&self, args: &SearchArgs) -> RepoResult<PagedList<CuisineType>>;
}

// ============================================================================
// Menu Repository
// ============================================================================

#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Find menu by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Menu>>;

    /// Create a new menu, returning the generated id
    async fn create(&self, menu: &Menu) -> RepoResult<i64>;

    /// Update an existing menu
    async fn update(&self, menu: &Menu) -> RepoResult<()>;

    /// Delete a menu
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Paged search over the menus of one branch
    async fn search_by_branch(
        &self,
        branch_id: i64,
        args: &SearchArgs,
    ) -> RepoResult<PagedList<Menu>>;
}

// ============================================================================
// Menu Item Repository
// ============================================================================

#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// Find menu item by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<MenuItem>>;

    /// Create a new menu item, returning the generated id
    async fn create(&self, item: &MenuItem) -> RepoResult<i64>;

    /// Update an existing menu item
    async fn update(&self, item: &MenuItem) -> RepoResult<()>;

    /// Delete a menu item
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Paged search over the items of one menu
    async fn search_by_menu(
        &self,
        menu_id: i64,
        args: &SearchArgs,
    ) -> RepoResult<PagedList<MenuItem>>;
}

// ============================================================================
// Order Repository
// ============================================================================

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Find order by ID, lines included
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Order>>;

    /// Create a new order with its lines, returning the generated id
    async fn create(&self, order: &Order) -> RepoResult<i64>;

    /// Persist a state change
    async fn update_state(&self, id: i64, state: OrderState) -> RepoResult<()>;

    /// Paged search over the orders of one branch
    async fn search_by_branch(
        &self,
        branch_id: i64,
        args: &SearchArgs,
    ) -> RepoResult<PagedList<Order>>;

    /// Paged search over the orders placed by one customer
    async fn search_by_customer(
        &self,
        customer_id: i64,
        args: &SearchArgs,
    ) -> RepoResult<PagedList<Order>>;
}

// ============================================================================
// Refresh Token Repository
// ============================================================================

/// A persisted refresh token. Rows are append-only: once `used` or
/// `invalidated` is set, or `expires_at` has passed, the token is
/// permanently unusable but kept as an audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshToken {
    /// Opaque primary key handed to the client
    pub id: String,
    /// `jti` claim of the access token this refresh token is paired with
    pub jwt_id: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
    pub invalidated: bool,
}

impl RefreshToken {
    /// Check if the token is past its expiry date
    #[inline]
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Persist a freshly issued token. Never mutates existing rows.
    async fn create(&self, token: &RefreshToken) -> RepoResult<()>;

    /// Look up a token by its opaque id
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<RefreshToken>>;

    /// Mark a token used, but only if it is still unused and not
    /// invalidated. Returns false when another redemption won the race.
    async fn redeem(&self, id: &str) -> RepoResult<bool>;

    /// Administratively invalidate a token
    async fn invalidate(&self, id: &str) -> RepoResult<bool>;

    /// Invalidate every live token belonging to a user
    async fn invalidate_all_for_user(&self, user_id: i64) -> RepoResult<u64>;
}
