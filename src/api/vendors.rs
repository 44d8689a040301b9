// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DentalMall

//! Vendor storefront endpoints.
//!
//! `GET /api/vendors` branches on the `public` query flag, not on token
//! presence: `public=true` is the anonymous storefront listing, while
//! the default path is the vendor's own ownership-scoped listing.

use axum::{
    extract::{FromRequestParts, Path, Query, State},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    auth::{CurrentUser, RequireVendor},
    error::ApiError,
    models::{CreateVendorRequest, PublicVendor, Vendor},
    state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct VendorListQuery {
    /// Select the public storefront listing instead of "my vendors".
    pub public: Option<bool>,
}

/// List vendors.
///
/// With `public=true`: approved, active vendors as the public DTO; no
/// authentication required. Otherwise: VENDOR-only listing of the
/// caller's own registrations, every lifecycle state included.
#[utoipa::path(
    get,
    path = "/api/vendors",
    params(VendorListQuery),
    tag = "Vendors",
    responses(
        (
            status = 200,
            description = "With `public=true`: public `PublicVendor` DTOs. \
                           Otherwise: the caller's own full `Vendor` records.",
            body = [PublicVendor]
        ),
        (status = 401, description = "Unauthenticated (owned listing only)"),
        (status = 403, description = "Caller is not a vendor")
    )
)]
pub async fn list_vendors(
    State(state): State<AppState>,
    Query(params): Query<VendorListQuery>,
    mut parts: Parts,
) -> Result<Response, ApiError> {
    if params.public.unwrap_or(false) {
        let store = state.store.read().await;
        return Ok(Json(store.list_public_vendors()).into_response());
    }

    let RequireVendor(user) = RequireVendor::from_request_parts(&mut parts, &state).await?;
    let store = state.store.read().await;
    let owned: Vec<Vendor> = store.list_vendors_owned_by(user.id);
    Ok(Json(owned).into_response())
}

/// Submit a vendor registration.
///
/// Any signed-up user may apply; the registration stays pending and
/// inactive until an admin reviews it.
#[utoipa::path(
    post,
    path = "/api/vendors",
    request_body = CreateVendorRequest,
    tag = "Vendors",
    responses(
        (status = 201, body = Vendor),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Identity has no user record")
    )
)]
pub async fn create_vendor(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<CreateVendorRequest>,
) -> (StatusCode, Json<Vendor>) {
    let mut store = state.store.write().await;
    let vendor = store.create_vendor(user.id, request);
    tracing::info!(vendor_id = %vendor.id, owner = %user.id, "vendor registration submitted");
    (StatusCode::CREATED, Json(vendor))
}

/// Public vendor detail. Pending, rejected, and inactive vendors are
/// not found on this route.
#[utoipa::path(
    get,
    path = "/api/vendors/{vendor_id}",
    params(("vendor_id" = Uuid, Path, description = "Vendor identifier")),
    tag = "Vendors",
    responses(
        (status = 200, body = PublicVendor),
        (status = 404, description = "Vendor not publicly visible")
    )
)]
pub async fn get_vendor(
    State(state): State<AppState>,
    Path(vendor_id): Path<Uuid>,
) -> Result<Json<PublicVendor>, ApiError> {
    let store = state.store.read().await;
    let vendor = store.get_public_vendor(vendor_id)?;
    Ok(Json(vendor))
}
