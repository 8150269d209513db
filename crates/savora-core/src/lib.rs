//! # savora-core
//!
//! Domain layer containing entities, the search (paged query) machinery,
//! repository traits, and permission value objects.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod search;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Branch, CuisineType, Menu, MenuItem, Order, OrderItem, OrderState, Restaurant, Role, User,
};
pub use error::DomainError;
pub use search::{
    search, FilterValue, FilteringOption, PagedList, PagingArgs, PagingStrategy, SearchArgs,
    SearchSchema, SortDirection, SortingOption,
};
pub use traits::{
    BranchRepository, CuisineTypeRepository, MenuItemRepository, MenuRepository, OrderRepository,
    RefreshToken, RefreshTokenRepository, RepoResult, RestaurantRepository, UserRepository,
};
pub use value_objects::{Permissions, RolePermissionTable};
