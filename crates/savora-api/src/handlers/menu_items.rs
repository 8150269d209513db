//! Menu item handlers

use axum::{
    extract::{Path, State},
    Json,
};
use savora_core::search::SearchArgs;
use savora_service::dto::{
    CreateMenuItemRequest, MenuItemResponse, PagedResponse, UpdateMenuItemRequest,
};
use savora_service::MenuItemService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

use super::sanitize_paging;

/// Create a menu item under an owned menu
///
/// POST /menu-items
pub async fn create_menu_item(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateMenuItemRequest>,
) -> ApiResult<Created<Json<MenuItemResponse>>> {
    let service = MenuItemService::new(state.service_context());
    let response = service.create(&auth.actor(), request).await?;
    Ok(Created(Json(response)))
}

/// Get a menu item by id
///
/// GET /menu-items/:menu_item_id
pub async fn get_menu_item(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(menu_item_id): Path<i64>,
) -> ApiResult<Json<MenuItemResponse>> {
    let service = MenuItemService::new(state.service_context());
    let response = service.get(menu_item_id).await?;
    Ok(Json(response))
}

/// Update a menu item
///
/// PATCH /menu-items/:menu_item_id
pub async fn update_menu_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(menu_item_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateMenuItemRequest>,
) -> ApiResult<Json<MenuItemResponse>> {
    let service = MenuItemService::new(state.service_context());
    let response = service.update(&auth.actor(), menu_item_id, request).await?;
    Ok(Json(response))
}

/// Delete a menu item
///
/// DELETE /menu-items/:menu_item_id
pub async fn delete_menu_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(menu_item_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = MenuItemService::new(state.service_context());
    service.delete(&auth.actor(), menu_item_id).await?;
    Ok(NoContent)
}

/// Paged search over the items of one menu
///
/// POST /menus/:menu_id/items/search
pub async fn search_menu_items(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(menu_id): Path<i64>,
    Json(mut args): Json<SearchArgs>,
) -> ApiResult<Json<PagedResponse<MenuItemResponse>>> {
    sanitize_paging(&mut args);
    let service = MenuItemService::new(state.service_context());
    let response = service.search_by_menu(menu_id, &args).await?;
    Ok(Json(response))
}
