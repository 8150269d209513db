//! Domain entities - core business objects

mod branch;
mod cuisine_type;
mod menu;
mod menu_item;
mod order;
mod restaurant;
mod role;
mod user;

pub use branch::Branch;
pub use cuisine_type::CuisineType;
pub use menu::Menu;
pub use menu_item::MenuItem;
pub use order::{Order, OrderItem, OrderState};
pub use restaurant::Restaurant;
pub use role::Role;
pub use user::User;
