//! Service context - dependency container for services
//!
//! Holds all repositories, the JWT service, and the role-permission table
//! loaded at startup.

use std::sync::Arc;

use savora_common::auth::JwtService;
use savora_core::traits::{
    BranchRepository, CuisineTypeRepository, MenuItemRepository, MenuRepository, OrderRepository,
    RefreshTokenRepository, RestaurantRepository, UserRepository,
};
use savora_core::value_objects::{Permissions, RolePermissionTable};
use savora_db::PgPool;

/// The authenticated caller of a service operation, as established by the
/// API layer from a validated access token
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: i64,
    pub roles: Vec<String>,
}

impl Actor {
    pub fn new(id: i64, roles: Vec<String>) -> Self {
        Self { id, roles }
    }
}

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    restaurant_repo: Arc<dyn RestaurantRepository>,
    branch_repo: Arc<dyn BranchRepository>,
    cuisine_type_repo: Arc<dyn CuisineTypeRepository>,
    menu_repo: Arc<dyn MenuRepository>,
    menu_item_repo: Arc<dyn MenuItemRepository>,
    order_repo: Arc<dyn OrderRepository>,
    refresh_token_repo: Arc<dyn RefreshTokenRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    role_permissions: Arc<RolePermissionTable>,

    // Refresh-token lifetime in months
    refresh_token_expiry_months: u32,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        restaurant_repo: Arc<dyn RestaurantRepository>,
        branch_repo: Arc<dyn BranchRepository>,
        cuisine_type_repo: Arc<dyn CuisineTypeRepository>,
        menu_repo: Arc<dyn MenuRepository>,
        menu_item_repo: Arc<dyn MenuItemRepository>,
        order_repo: Arc<dyn OrderRepository>,
        refresh_token_repo: Arc<dyn RefreshTokenRepository>,
        jwt_service: Arc<JwtService>,
        role_permissions: Arc<RolePermissionTable>,
        refresh_token_expiry_months: u32,
    ) -> Self {
        Self {
            pool,
            user_repo,
            restaurant_repo,
            branch_repo,
            cuisine_type_repo,
            menu_repo,
            menu_item_repo,
            order_repo,
            refresh_token_repo,
            jwt_service,
            role_permissions,
            refresh_token_expiry_months,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the restaurant repository
    pub fn restaurant_repo(&self) -> &dyn RestaurantRepository {
        self.restaurant_repo.as_ref()
    }

    /// Get the branch repository
    pub fn branch_repo(&self) -> &dyn BranchRepository {
        self.branch_repo.as_ref()
    }

    /// Get the cuisine type repository
    pub fn cuisine_type_repo(&self) -> &dyn CuisineTypeRepository {
        self.cuisine_type_repo.as_ref()
    }

    /// Get the menu repository
    pub fn menu_repo(&self) -> &dyn MenuRepository {
        self.menu_repo.as_ref()
    }

    /// Get the menu item repository
    pub fn menu_item_repo(&self) -> &dyn MenuItemRepository {
        self.menu_item_repo.as_ref()
    }

    /// Get the order repository
    pub fn order_repo(&self) -> &dyn OrderRepository {
        self.order_repo.as_ref()
    }

    /// Get the refresh token repository
    pub fn refresh_token_repo(&self) -> &dyn RefreshTokenRepository {
        self.refresh_token_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the role-permission table
    pub fn role_permissions(&self) -> &RolePermissionTable {
        self.role_permissions.as_ref()
    }

    /// Effective permissions of an actor, from its role names
    pub fn permissions_of(&self, actor: &Actor) -> Permissions {
        self.role_permissions
            .permissions_for(actor.roles.iter().map(String::as_str))
    }

    /// Refresh-token lifetime in months
    pub fn refresh_token_expiry_months(&self) -> u32 {
        self.refresh_token_expiry_months
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field(
                "refresh_token_expiry_months",
                &self.refresh_token_expiry_months,
            )
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    restaurant_repo: Option<Arc<dyn RestaurantRepository>>,
    branch_repo: Option<Arc<dyn BranchRepository>>,
    cuisine_type_repo: Option<Arc<dyn CuisineTypeRepository>>,
    menu_repo: Option<Arc<dyn MenuRepository>>,
    menu_item_repo: Option<Arc<dyn MenuItemRepository>>,
    order_repo: Option<Arc<dyn OrderRepository>>,
    refresh_token_repo: Option<Arc<dyn RefreshTokenRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    role_permissions: Option<Arc<RolePermissionTable>>,
    refresh_token_expiry_months: u32,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            user_repo: None,
            restaurant_repo: None,
            branch_repo: None,
            cuisine_type_repo: None,
            menu_repo: None,
            menu_item_repo: None,
            order_repo: None,
            refresh_token_repo: None,
            jwt_service: None,
            role_permissions: None,
            refresh_token_expiry_months: 6,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn restaurant_repo(mut self, repo: Arc<dyn RestaurantRepository>) -> Self {
        self.restaurant_repo = Some(repo);
        self
    }

    pub fn branch_repo(mut self, repo: Arc<dyn BranchRepository>) -> Self {
        self.branch_repo = Some(repo);
        self
    }

    pub fn cuisine_type_repo(mut self, repo: Arc<dyn CuisineTypeRepository>) -> Self {
        self.cuisine_type_repo = Some(repo);
        self
    }

    pub fn menu_repo(mut self, repo: Arc<dyn MenuRepository>) -> Self {
        self.menu_repo = Some(repo);
        self
    }

    pub fn menu_item_repo(mut self, repo: Arc<dyn MenuItemRepository>) -> Self {
        self.menu_item_repo = Some(repo);
        self
    }

    pub fn order_repo(mut self, repo: Arc<dyn OrderRepository>) -> Self {
        self.order_repo = Some(repo);
        self
    }

    pub fn refresh_token_repo(mut self, repo: Arc<dyn RefreshTokenRepository>) -> Self {
        self.refresh_token_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn role_permissions(mut self, table: Arc<RolePermissionTable>) -> Self {
        self.role_permissions = Some(table);
        self
    }

    pub fn refresh_token_expiry_months(mut self, months: u32) -> Self {
        self.refresh_token_expiry_months = months;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.restaurant_repo
                .ok_or_else(|| ServiceError::validation("restaurant_repo is required"))?,
            self.branch_repo
                .ok_or_else(|| ServiceError::validation("branch_repo is required"))?,
            self.cuisine_type_repo
                .ok_or_else(|| ServiceError::validation("cuisine_type_repo is required"))?,
            self.menu_repo
                .ok_or_else(|| ServiceError::validation("menu_repo is required"))?,
            self.menu_item_repo
                .ok_or_else(|| ServiceError::validation("menu_item_repo is required"))?,
            self.order_repo
                .ok_or_else(|| ServiceError::validation("order_repo is required"))?,
            self.refresh_token_repo
                .ok_or_else(|| ServiceError::validation("refresh_token_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.role_permissions
                .ok_or_else(|| ServiceError::validation("role_permissions is required"))?,
            self.refresh_token_expiry_months,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
