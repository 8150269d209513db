//! Order handlers

use axum::{
    extract::{Path, State},
    Json,
};
use savora_core::search::SearchArgs;
use savora_service::dto::{
    CreateOrderRequest, OrderResponse, PagedResponse, UpdateOrderStateRequest,
};
use savora_service::OrderService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

use super::sanitize_paging;

/// Place an order
///
/// POST /orders
pub async fn place_order(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateOrderRequest>,
) -> ApiResult<Created<Json<OrderResponse>>> {
    let service = OrderService::new(state.service_context());
    let response = service.place(&auth.actor(), request).await?;
    Ok(Created(Json(response)))
}

/// Get an order by id
///
/// GET /orders/:order_id
pub async fn get_order(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(order_id): Path<i64>,
) -> ApiResult<Json<OrderResponse>> {
    let service = OrderService::new(state.service_context());
    let response = service.get(&auth.actor(), order_id).await?;
    Ok(Json(response))
}

/// Change an order's state
///
/// PATCH /orders/:order_id/state
pub async fn update_order_state(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(order_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateOrderStateRequest>,
) -> ApiResult<Json<OrderResponse>> {
    let service = OrderService::new(state.service_context());
    let response = service.update_state(&auth.actor(), order_id, request).await?;
    Ok(Json(response))
}

/// Paged search over the orders of one branch
///
/// POST /branches/:branch_id/orders/search
pub async fn search_branch_orders(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(branch_id): Path<i64>,
    Json(mut args): Json<SearchArgs>,
) -> ApiResult<Json<PagedResponse<OrderResponse>>> {
    sanitize_paging(&mut args);
    let service = OrderService::new(state.service_context());
    let response = service
        .search_by_branch(&auth.actor(), branch_id, &args)
        .await?;
    Ok(Json(response))
}

/// Paged search over the caller's own orders
///
/// POST /users/@me/orders/search
pub async fn search_own_orders(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(mut args): Json<SearchArgs>,
) -> ApiResult<Json<PagedResponse<OrderResponse>>> {
    sanitize_paging(&mut args);
    let service = OrderService::new(state.service_context());
    let response = service.search_mine(&auth.actor(), &args).await?;
    Ok(Json(response))
}
