//! Menu handlers

use axum::{
    extract::{Path, State},
    Json,
};
use savora_core::search::SearchArgs;
use savora_service::dto::{CreateMenuRequest, MenuResponse, PagedResponse, UpdateMenuRequest};
use savora_service::MenuService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

use super::sanitize_paging;

/// Create a menu under an owned branch
///
/// POST /menus
pub async fn create_menu(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateMenuRequest>,
) -> ApiResult<Created<Json<MenuResponse>>> {
    let service = MenuService::new(state.service_context());
    let response = service.create(&auth.actor(), request).await?;
    Ok(Created(Json(response)))
}

/// Get a menu by id
///
/// GET /menus/:menu_id
pub async fn get_menu(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(menu_id): Path<i64>,
) -> ApiResult<Json<MenuResponse>> {
    let service = MenuService::new(state.service_context());
    let response = service.get(menu_id).await?;
    Ok(Json(response))
}

/// Update a menu
///
/// PATCH /menus/:menu_id
pub async fn update_menu(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(menu_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateMenuRequest>,
) -> ApiResult<Json<MenuResponse>> {
    let service = MenuService::new(state.service_context());
    let response = service.update(&auth.actor(), menu_id, request).await?;
    Ok(Json(response))
}

/// Delete a menu
///
/// DELETE /menus/:menu_id
pub async fn delete_menu(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(menu_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = MenuService::new(state.service_context());
    service.delete(&auth.actor(), menu_id).await?;
    Ok(NoContent)
}

/// Paged search over the menus of one branch
///
/// POST /branches/:branch_id/menus/search
pub async fn search_branch_menus(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(branch_id): Path<i64>,
    Json(mut args): Json<SearchArgs>,
) -> ApiResult<Json<PagedResponse<MenuResponse>>> {
    sanitize_paging(&mut args);
    let service = MenuService::new(state.service_context());
    let response = service.search_by_branch(branch_id, &args).await?;
    Ok(Json(response))
}
