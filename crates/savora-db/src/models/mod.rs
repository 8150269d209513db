//! Database models - row structs mapped by sqlx
//!
//! Each model mirrors one table and converts into its domain entity.

mod branch;
mod cuisine_type;
mod menu;
mod menu_item;
mod order;
mod refresh_token;
mod restaurant;
mod user;

pub use branch::BranchModel;
pub use cuisine_type::CuisineTypeModel;
pub use menu::MenuModel;
pub use menu_item::MenuItemModel;
pub use order::{OrderItemModel, OrderModel};
pub use refresh_token::RefreshTokenModel;
pub use restaurant::RestaurantModel;
pub use user::UserModel;
