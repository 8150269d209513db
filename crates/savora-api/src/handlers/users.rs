//! User handlers
//!
//! Endpoints for the authenticated user's profile and role grants.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use savora_service::dto::{CurrentUserResponse, UpdateUserRequest};
use savora_service::UserService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Get the authenticated user's profile
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_current(&auth.actor()).await?;
    Ok(Json(response))
}

/// Update the authenticated user's profile
///
/// PATCH /users/@me
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_profile(&auth.actor(), request).await?;
    Ok(Json(response))
}

/// Role grant request body
#[derive(Debug, Deserialize)]
pub struct AssignRoleBody {
    pub role: String,
}

/// Grant a role to a user
///
/// POST /users/:user_id/roles
pub async fn assign_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<i64>,
    Json(body): Json<AssignRoleBody>,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.assign_role(&auth.actor(), user_id, &body.role).await?;
    Ok(NoContent)
}
