//! Repository traits (ports) for the persistence layer

mod repositories;

pub use repositories::{
    BranchRepository, CuisineTypeRepository, MenuItemRepository, MenuRepository, OrderRepository,
    RefreshToken, RefreshTokenRepository, RepoResult, RestaurantRepository, UserRepository,
};
