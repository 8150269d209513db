//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use savora_common::{AppConfig, AppError, JwtService};
use savora_core::value_objects::RolePermissionTable;
use savora_db::{
    create_pool, PgBranchRepository, PgCuisineTypeRepository, PgMenuItemRepository,
    PgMenuRepository, PgOrderRepository, PgRefreshTokenRepository, PgRestaurantRepository,
    PgUserRepository,
};
use savora_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes are merged after the middleware stack so probes bypass
/// rate limiting.
pub fn create_app(state: AppState) -> Router {
    let config = state.config().clone();
    let router = apply_middleware(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let router = router.merge(health_routes());
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = savora_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    // Build the role-permission table: built-in roles plus configured grants
    let mut role_permissions = RolePermissionTable::default();
    if let Some(grants) = &config.roles.grants {
        role_permissions
            .apply_grants(grants)
            .map_err(AppError::Config)?;
    }

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let restaurant_repo = Arc::new(PgRestaurantRepository::new(pool.clone()));
    let branch_repo = Arc::new(PgBranchRepository::new(pool.clone()));
    let cuisine_type_repo = Arc::new(PgCuisineTypeRepository::new(pool.clone()));
    let menu_repo = Arc::new(PgMenuRepository::new(pool.clone()));
    let menu_item_repo = Arc::new(PgMenuItemRepository::new(pool.clone()));
    let order_repo = Arc::new(PgOrderRepository::new(pool.clone()));
    let refresh_token_repo = Arc::new(PgRefreshTokenRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(user_repo)
        .restaurant_repo(restaurant_repo)
        .branch_repo(branch_repo)
        .cuisine_type_repo(cuisine_type_repo)
        .menu_repo(menu_repo)
        .menu_item_repo(menu_item_repo)
        .order_repo(order_repo)
        .refresh_token_repo(refresh_token_repo)
        .jwt_service(jwt_service)
        .role_permissions(Arc::new(role_permissions))
        .refresh_token_expiry_months(config.jwt.refresh_token_expiry_months)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
