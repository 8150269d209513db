//! PostgreSQL repository implementations

mod branch;
mod cuisine_type;
mod error;
mod menu;
mod menu_item;
mod order;
mod refresh_token;
mod restaurant;
mod user;

pub use branch::PgBranchRepository;
pub use cuisine_type::PgCuisineTypeRepository;
pub use menu::PgMenuRepository;
pub use menu_item::PgMenuItemRepository;
pub use order::PgOrderRepository;
pub use refresh_token::PgRefreshTokenRepository;
pub use restaurant::PgRestaurantRepository;
pub use user::PgUserRepository;
