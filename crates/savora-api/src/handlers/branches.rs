//! Branch handlers

use axum::{
    extract::{Path, State},
    Json,
};
use savora_core::search::SearchArgs;
use savora_service::dto::{BranchResponse, CreateBranchRequest, PagedResponse, UpdateBranchRequest};
use savora_service::BranchService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

use super::sanitize_paging;

/// Create a branch under an owned restaurant
///
/// POST /branches
pub async fn create_branch(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateBranchRequest>,
) -> ApiResult<Created<Json<BranchResponse>>> {
    let service = BranchService::new(state.service_context());
    let response = service.create(&auth.actor(), request).await?;
    Ok(Created(Json(response)))
}

/// Get a branch by id
///
/// GET /branches/:branch_id
pub async fn get_branch(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(branch_id): Path<i64>,
) -> ApiResult<Json<BranchResponse>> {
    let service = BranchService::new(state.service_context());
    let response = service.get(branch_id).await?;
    Ok(Json(response))
}

/// Update a branch
///
/// PATCH /branches/:branch_id
pub async fn update_branch(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(branch_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateBranchRequest>,
) -> ApiResult<Json<BranchResponse>> {
    let service = BranchService::new(state.service_context());
    let response = service.update(&auth.actor(), branch_id, request).await?;
    Ok(Json(response))
}

/// Delete a branch
///
/// DELETE /branches/:branch_id
pub async fn delete_branch(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(branch_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = BranchService::new(state.service_context());
    service.delete(&auth.actor(), branch_id).await?;
    Ok(NoContent)
}

/// Paged search over all branches
///
/// POST /branches/search
pub async fn search_branches(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(mut args): Json<SearchArgs>,
) -> ApiResult<Json<PagedResponse<BranchResponse>>> {
    sanitize_paging(&mut args);
    let service = BranchService::new(state.service_context());
    let response = service.search(&args).await?;
    Ok(Json(response))
}

/// Paged search over the branches of one restaurant
///
/// POST /restaurants/:restaurant_id/branches/search
pub async fn search_restaurant_branches(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(restaurant_id): Path<i64>,
    Json(mut args): Json<SearchArgs>,
) -> ApiResult<Json<PagedResponse<BranchResponse>>> {
    sanitize_paging(&mut args);
    let service = BranchService::new(state.service_context());
    let response = service.search_by_restaurant(restaurant_id, &args).await?;
    Ok(Json(response))
}
