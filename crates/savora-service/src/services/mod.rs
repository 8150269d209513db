//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod branch;
pub mod context;
pub mod cuisine_type;
pub mod error;
pub mod menu;
pub mod menu_item;
pub mod order;
pub mod restaurant;
pub mod user;

// Re-export all services for convenience
pub use auth::AuthService;
pub use branch::BranchService;
pub use context::{Actor, ServiceContext, ServiceContextBuilder};
pub use cuisine_type::CuisineTypeService;
pub use error::{ServiceError, ServiceResult};
pub use menu::MenuService;
pub use menu_item::MenuItemService;
pub use order::OrderService;
pub use restaurant::RestaurantService;
pub use user::UserService;
