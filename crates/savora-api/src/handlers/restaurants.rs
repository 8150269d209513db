//! Restaurant handlers

use axum::{
    extract::{Path, State},
    Json,
};
use savora_core::search::SearchArgs;
use savora_service::dto::{
    CreateRestaurantRequest, PagedResponse, RestaurantResponse, UpdateRestaurantRequest,
};
use savora_service::RestaurantService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

use super::sanitize_paging;

/// Create a restaurant owned by the caller
///
/// POST /restaurants
pub async fn create_restaurant(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateRestaurantRequest>,
) -> ApiResult<Created<Json<RestaurantResponse>>> {
    let service = RestaurantService::new(state.service_context());
    let response = service.create(&auth.actor(), request).await?;
    Ok(Created(Json(response)))
}

/// Get a restaurant by id
///
/// GET /restaurants/:restaurant_id
pub async fn get_restaurant(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(restaurant_id): Path<i64>,
) -> ApiResult<Json<RestaurantResponse>> {
    let service = RestaurantService::new(state.service_context());
    let response = service.get(restaurant_id).await?;
    Ok(Json(response))
}

/// Update a restaurant
///
/// PATCH /restaurants/:restaurant_id
pub async fn update_restaurant(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(restaurant_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateRestaurantRequest>,
) -> ApiResult<Json<RestaurantResponse>> {
    let service = RestaurantService::new(state.service_context());
    let response = service.update(&auth.actor(), restaurant_id, request).await?;
    Ok(Json(response))
}

/// Delete a restaurant
///
/// DELETE /restaurants/:restaurant_id
pub async fn delete_restaurant(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(restaurant_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = RestaurantService::new(state.service_context());
    service.delete(&auth.actor(), restaurant_id).await?;
    Ok(NoContent)
}

/// Paged search over all restaurants
///
/// POST /restaurants/search
pub async fn search_restaurants(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(mut args): Json<SearchArgs>,
) -> ApiResult<Json<PagedResponse<RestaurantResponse>>> {
    sanitize_paging(&mut args);
    let service = RestaurantService::new(state.service_context());
    let response = service.search(&args).await?;
    Ok(Json(response))
}
