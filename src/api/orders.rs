// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DentalMall

//! Checkout and order history endpoints.
//!
//! Orders are strictly ownership-scoped: a user sees only their own,
//! and the detail route answers 403 (not 404) for someone else's order.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    auth::CurrentUser,
    error::ApiError,
    models::{CreateOrderRequest, Order},
    state::AppState,
    store::OwnershipCheck,
};

/// Checkout.
///
/// Prices every line server-side against the active catalog. Empty
/// orders, zero quantities, and unknown or inactive products reject
/// the whole request with 400.
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    tag = "Orders",
    responses(
        (status = 201, body = Order),
        (status = 400, description = "Invalid order line"),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Identity has no user record")
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let mut store = state.store.write().await;
    let order = store.create_order(user.id, request)?;
    tracing::info!(order_id = %order.id, user_id = %user.id, total_cents = order.total_cents, "order placed");
    Ok((StatusCode::CREATED, Json(order)))
}

/// The caller's own orders, newest first.
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Orders",
    responses(
        (status = 200, body = [Order]),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Identity has no user record")
    )
)]
pub async fn list_my_orders(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Json<Vec<Order>> {
    let store = state.store.read().await;
    Json(store.list_orders_for_user(user.id))
}

/// One order, owner only.
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}",
    params(("order_id" = Uuid, Path, description = "Order identifier")),
    tag = "Orders",
    responses(
        (status = 200, body = Order),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Order belongs to another user"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(order_id): Path<Uuid>,
) -> Result<Json<Order>, ApiError> {
    let store = state.store.read().await;
    let order = store.get_order(order_id).verify_owner(&user)?;
    Ok(Json(order))
}
