//! Data transfer objects
//!
//! Request DTOs implement `Deserialize` + `Validate`; response DTOs
//! implement `Serialize`. Mapping from entities lives in `mappers`.

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateBranchRequest, CreateCuisineTypeRequest, CreateMenuItemRequest, CreateMenuRequest,
    CreateOrderRequest, CreateRestaurantRequest, LoginRequest, LogoutRequest, OrderLineRequest,
    RefreshTokenRequest, RegisterRequest, UpdateBranchRequest, UpdateCuisineTypeRequest,
    UpdateMenuItemRequest, UpdateMenuRequest, UpdateOrderStateRequest, UpdateRestaurantRequest,
    UpdateUserRequest,
};
pub use responses::{
    AuthResponse, BranchResponse, CuisineTypeResponse, CurrentUserResponse, MenuItemResponse,
    MenuResponse, OrderItemResponse, OrderResponse, PagedResponse, RestaurantResponse,
};
