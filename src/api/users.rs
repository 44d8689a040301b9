// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DentalMall

//! User profile endpoints.
//!
//! `POST /api/users/me` is the first-sign-in hook: it is the only
//! protected operation that does not require a pre-existing
//! `ApplicationUser` for the verified identity.

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    auth::{Auth, CurrentUser},
    error::ApiError,
    models::{ApplicationUser, RegisterProfileRequest, UpdateProfileRequest},
    state::AppState,
};

/// Register (or refresh) the caller's profile.
///
/// Creates the application user for the verified identity on first
/// sign-in; subsequent calls update the profile fields. Role is never
/// touched by this path.
#[utoipa::path(
    post,
    path = "/api/users/me",
    request_body = RegisterProfileRequest,
    tag = "Users",
    responses(
        (status = 201, description = "User created", body = ApplicationUser),
        (status = 200, description = "Profile refreshed", body = ApplicationUser),
        (status = 401, description = "Unauthenticated")
    )
)]
pub async fn register_profile(
    State(state): State<AppState>,
    Auth(identity): Auth,
    Json(profile): Json<RegisterProfileRequest>,
) -> (StatusCode, Json<ApplicationUser>) {
    let mut store = state.store.write().await;
    let (user, created) = store.upsert_user_profile(&identity.subject, profile);

    if created {
        tracing::info!(user_id = %user.id, "new user registered");
        (StatusCode::CREATED, Json(user))
    } else {
        (StatusCode::OK, Json(user))
    }
}

/// The caller's own user record.
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = "Users",
    responses(
        (status = 200, body = ApplicationUser),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Identity has no user record")
    )
)]
pub async fn get_me(CurrentUser(user): CurrentUser) -> Json<ApplicationUser> {
    Json(user)
}

/// Partial profile update.
#[utoipa::path(
    put,
    path = "/api/users/me",
    request_body = UpdateProfileRequest,
    tag = "Users",
    responses(
        (status = 200, body = ApplicationUser),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Identity has no user record")
    )
)]
pub async fn update_me(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(update): Json<UpdateProfileRequest>,
) -> Result<Json<ApplicationUser>, ApiError> {
    let mut store = state.store.write().await;
    let updated = store.update_user_profile(user.id, update)?;
    Ok(Json(updated))
}
