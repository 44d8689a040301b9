// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DentalMall

//! Clinic directory and clinic registration requests.
//!
//! Clinics follow the vendor review shape: anyone signed up can submit
//! a registration request, admins review it, and only approved clinics
//! appear in the public directory.

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    auth::CurrentUser,
    models::{ClinicRequest, PublicClinic, SubmitClinicRequest},
    state::AppState,
};

/// Public clinic directory: approved clinics only, name ascending.
#[utoipa::path(
    get,
    path = "/api/clinics",
    tag = "Clinics",
    responses((status = 200, body = [PublicClinic]))
)]
pub async fn list_clinics(State(state): State<AppState>) -> Json<Vec<PublicClinic>> {
    let store = state.store.read().await;
    Json(store.list_public_clinics())
}

/// Submit a clinic registration request.
#[utoipa::path(
    post,
    path = "/api/clinic-requests",
    request_body = SubmitClinicRequest,
    tag = "Clinics",
    responses(
        (status = 201, body = ClinicRequest),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Identity has no user record")
    )
)]
pub async fn submit_clinic_request(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<SubmitClinicRequest>,
) -> (StatusCode, Json<ClinicRequest>) {
    let mut store = state.store.write().await;
    let submitted = store.submit_clinic_request(user.id, request);
    tracing::info!(request_id = %submitted.id, owner = %user.id, "clinic request submitted");
    (StatusCode::CREATED, Json(submitted))
}

/// The caller's own clinic requests, every review state included.
#[utoipa::path(
    get,
    path = "/api/clinic-requests",
    tag = "Clinics",
    responses(
        (status = 200, body = [ClinicRequest]),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Identity has no user record")
    )
)]
pub async fn list_my_clinic_requests(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Json<Vec<ClinicRequest>> {
    let store = state.store.read().await;
    Json(store.list_clinic_requests_owned_by(user.id))
}
