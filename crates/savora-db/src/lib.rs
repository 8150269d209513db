//! Database layer - PostgreSQL repositories and models
//!
//! Implements the repository traits from `savora-core` on top of sqlx.
//! Scoped searches fetch the owning scope's rows and run them through the
//! entity search schemas, so the allow-lists live in one place.

pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgBranchRepository, PgCuisineTypeRepository, PgMenuItemRepository, PgMenuRepository,
    PgOrderRepository, PgRefreshTokenRepository, PgRestaurantRepository, PgUserRepository,
};
