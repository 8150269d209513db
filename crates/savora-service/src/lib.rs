//! # savora-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    Actor, AuthService, BranchService, CuisineTypeService, MenuItemService, MenuService,
    OrderService, RestaurantService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, UserService,
};
