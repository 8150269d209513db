//! Cuisine type handlers

use axum::{
    extract::{Path, State},
    Json,
};
use savora_core::search::SearchArgs;
use savora_service::dto::{
    CreateCuisineTypeRequest, CuisineTypeResponse, PagedResponse, UpdateCuisineTypeRequest,
};
use savora_service::CuisineTypeService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

use super::sanitize_paging;

/// Create a cuisine type
///
/// POST /cuisine-types
pub async fn create_cuisine_type(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCuisineTypeRequest>,
) -> ApiResult<Created<Json<CuisineTypeResponse>>> {
    let service = CuisineTypeService::new(state.service_context());
    let response = service.create(&auth.actor(), request).await?;
    Ok(Created(Json(response)))
}

/// Get a cuisine type by id
///
/// GET /cuisine-types/:cuisine_type_id
pub async fn get_cuisine_type(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(cuisine_type_id): Path<i64>,
) -> ApiResult<Json<CuisineTypeResponse>> {
    let service = CuisineTypeService::new(state.service_context());
    let response = service.get(cuisine_type_id).await?;
    Ok(Json(response))
}

/// Rename a cuisine type
///
/// PATCH /cuisine-types/:cuisine_type_id
pub async fn update_cuisine_type(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(cuisine_type_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateCuisineTypeRequest>,
) -> ApiResult<Json<CuisineTypeResponse>> {
    let service = CuisineTypeService::new(state.service_context());
    let response = service.update(&auth.actor(), cuisine_type_id, request).await?;
    Ok(Json(response))
}

/// Delete a cuisine type
///
/// DELETE /cuisine-types/:cuisine_type_id
pub async fn delete_cuisine_type(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(cuisine_type_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = CuisineTypeService::new(state.service_context());
    service.delete(&auth.actor(), cuisine_type_id).await?;
    Ok(NoContent)
}

/// Paged search over all cuisine types
///
/// POST /cuisine-types/search
pub async fn search_cuisine_types(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(mut args): Json<SearchArgs>,
) -> ApiResult<Json<PagedResponse<CuisineTypeResponse>>> {
    sanitize_paging(&mut args);
    let service = CuisineTypeService::new(state.service_context());
    let response = service.search(&args).await?;
    Ok(Json(response))
}
