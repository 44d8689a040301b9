// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DentalMall

//! Admin console endpoints.
//!
//! Every handler takes the `RequireAdmin` extractor, so the role gate
//! runs before any handler body. ADMIN is an exact-match role: vendors
//! are rejected here the same as plain users.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    auth::RequireAdmin,
    error::ApiError,
    models::{
        ApplicationUser, Category, Clinic, ClinicRequest, CreateCategoryRequest, Order,
        ReviewStatus, UpdateCategoryRequest, Vendor,
    },
    state::AppState,
    store::StoreStats,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ReviewQuery {
    /// Filter the review queue by status.
    pub status: Option<ReviewStatus>,
}

/// Admin session probe.
///
/// Returns 200 with no body for an admin token. Non-admins get the
/// standard 403 denial; clients use this to gate the admin console.
#[utoipa::path(
    get,
    path = "/api/admin/login-check",
    tag = "Admin",
    responses(
        (status = 200, description = "Caller is an admin"),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Identity has no user record")
    )
)]
pub async fn login_check(RequireAdmin(admin): RequireAdmin) -> StatusCode {
    tracing::debug!(admin_id = %admin.id, "admin login check passed");
    StatusCode::OK
}

/// Full user directory, email ascending.
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "Admin",
    responses(
        (status = 200, body = [ApplicationUser]),
        (status = 403, description = "Caller is not an admin")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Json<Vec<ApplicationUser>> {
    let store = state.store.read().await;
    Json(store.list_users())
}

/// Vendor review queue, optionally filtered by status.
#[utoipa::path(
    get,
    path = "/api/admin/vendors",
    params(ReviewQuery),
    tag = "Admin",
    responses(
        (status = 200, body = [Vendor]),
        (status = 403, description = "Caller is not an admin")
    )
)]
pub async fn list_vendors(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<ReviewQuery>,
) -> Json<Vec<Vendor>> {
    let store = state.store.read().await;
    Json(store.list_vendors_by_status(params.status))
}

/// Approve a vendor registration.
///
/// Activates the storefront and promotes a USER owner to VENDOR.
#[utoipa::path(
    put,
    path = "/api/admin/vendors/{vendor_id}/approve",
    params(("vendor_id" = Uuid, Path, description = "Vendor identifier")),
    tag = "Admin",
    responses(
        (status = 200, body = Vendor),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Vendor not found")
    )
)]
pub async fn approve_vendor(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(vendor_id): Path<Uuid>,
) -> Result<Json<Vendor>, ApiError> {
    let mut store = state.store.write().await;
    let vendor = store.approve_vendor(vendor_id)?;
    tracing::info!(vendor_id = %vendor.id, admin_id = %admin.id, "vendor approved");
    Ok(Json(vendor))
}

/// Reject a vendor registration.
#[utoipa::path(
    put,
    path = "/api/admin/vendors/{vendor_id}/reject",
    params(("vendor_id" = Uuid, Path, description = "Vendor identifier")),
    tag = "Admin",
    responses(
        (status = 200, body = Vendor),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Vendor not found")
    )
)]
pub async fn reject_vendor(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(vendor_id): Path<Uuid>,
) -> Result<Json<Vendor>, ApiError> {
    let mut store = state.store.write().await;
    let vendor = store.reject_vendor(vendor_id)?;
    tracing::info!(vendor_id = %vendor.id, admin_id = %admin.id, "vendor rejected");
    Ok(Json(vendor))
}

/// Clinic request review queue, optionally filtered by status.
#[utoipa::path(
    get,
    path = "/api/admin/clinic-requests",
    params(ReviewQuery),
    tag = "Admin",
    responses(
        (status = 200, body = [ClinicRequest]),
        (status = 403, description = "Caller is not an admin")
    )
)]
pub async fn list_clinic_requests(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<ReviewQuery>,
) -> Json<Vec<ClinicRequest>> {
    let store = state.store.read().await;
    Json(store.list_clinic_requests_by_status(params.status))
}

/// Approve a clinic request, materializing the clinic record.
#[utoipa::path(
    put,
    path = "/api/admin/clinic-requests/{request_id}/approve",
    params(("request_id" = Uuid, Path, description = "Clinic request identifier")),
    tag = "Admin",
    responses(
        (status = 200, body = Clinic),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Clinic request not found")
    )
)]
pub async fn approve_clinic_request(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(request_id): Path<Uuid>,
) -> Result<Json<Clinic>, ApiError> {
    let mut store = state.store.write().await;
    let clinic = store.approve_clinic_request(request_id)?;
    tracing::info!(clinic_id = %clinic.id, admin_id = %admin.id, "clinic request approved");
    Ok(Json(clinic))
}

/// Reject a clinic request.
#[utoipa::path(
    put,
    path = "/api/admin/clinic-requests/{request_id}/reject",
    params(("request_id" = Uuid, Path, description = "Clinic request identifier")),
    tag = "Admin",
    responses(
        (status = 200, body = ClinicRequest),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Clinic request not found")
    )
)]
pub async fn reject_clinic_request(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(request_id): Path<Uuid>,
) -> Result<Json<ClinicRequest>, ApiError> {
    let mut store = state.store.write().await;
    let request = store.reject_clinic_request(request_id)?;
    tracing::info!(request_id = %request.id, admin_id = %admin.id, "clinic request rejected");
    Ok(Json(request))
}

/// Every order across all users, newest first.
#[utoipa::path(
    get,
    path = "/api/admin/orders",
    tag = "Admin",
    responses(
        (status = 200, body = [Order]),
        (status = 403, description = "Caller is not an admin")
    )
)]
pub async fn list_orders(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Json<Vec<Order>> {
    let store = state.store.read().await;
    Json(store.list_all_orders())
}

/// Entity counts for the admin dashboard.
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = "Admin",
    responses(
        (status = 200, body = StoreStats),
        (status = 403, description = "Caller is not an admin")
    )
)]
pub async fn stats(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Json<StoreStats> {
    let store = state.store.read().await;
    Json(store.stats())
}

/// Create a catalog category.
#[utoipa::path(
    post,
    path = "/api/admin/categories",
    request_body = CreateCategoryRequest,
    tag = "Admin",
    responses(
        (status = 201, body = Category),
        (status = 400, description = "Parent category does not exist"),
        (status = 403, description = "Caller is not an admin")
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let mut store = state.store.write().await;
    let category = store.create_category(request)?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Rename or re-parent a catalog category.
#[utoipa::path(
    put,
    path = "/api/admin/categories/{category_id}",
    params(("category_id" = Uuid, Path, description = "Category identifier")),
    request_body = UpdateCategoryRequest,
    tag = "Admin",
    responses(
        (status = 200, body = Category),
        (status = 400, description = "Invalid parent"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(category_id): Path<Uuid>,
    Json(update): Json<UpdateCategoryRequest>,
) -> Result<Json<Category>, ApiError> {
    let mut store = state.store.write().await;
    let category = store.update_category(category_id, update)?;
    Ok(Json(category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;
    use crate::models::{CreateVendorRequest, RegisterProfileRequest, SubmitClinicRequest};

    async fn register_user(state: &AppState, subject: &str, role: Role) -> ApplicationUser {
        let mut store = state.store.write().await;
        let (user, _) = store.upsert_user_profile(
            subject,
            RegisterProfileRequest {
                email: format!("{subject}@example.com"),
                first_name: "Pat".into(),
                last_name: "Doe".into(),
            },
        );
        store.set_user_role(user.id, role).unwrap()
    }

    fn registration(name: &str) -> CreateVendorRequest {
        CreateVendorRequest {
            company_name: name.into(),
            identification_number: "ID-1".into(),
            contact_email: "sales@example.com".into(),
            contact_phone: "555".into(),
        }
    }

    #[tokio::test]
    async fn login_check_returns_bare_200() {
        let state = AppState::default();
        let admin = register_user(&state, "admin_sub", Role::Admin).await;

        let status = login_check(RequireAdmin(admin)).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn vendor_approval_promotes_owner() {
        let state = AppState::default();
        let admin = register_user(&state, "admin_sub", Role::Admin).await;
        let owner = register_user(&state, "owner_sub", Role::User).await;
        let vendor = {
            let mut store = state.store.write().await;
            store.create_vendor(owner.id, registration("Acme"))
        };

        let Json(approved) = approve_vendor(
            State(state.clone()),
            RequireAdmin(admin),
            Path(vendor.id),
        )
        .await
        .unwrap();

        assert_eq!(approved.status, ReviewStatus::Approved);
        assert!(approved.is_active);
        let store = state.store.read().await;
        assert_eq!(store.get_user(owner.id).unwrap().role, Role::Vendor);
    }

    #[tokio::test]
    async fn approving_missing_vendor_is_404() {
        let state = AppState::default();
        let admin = register_user(&state, "admin_sub", Role::Admin).await;

        let err = approve_vendor(State(state), RequireAdmin(admin), Path(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn review_queue_defaults_to_every_status() {
        let state = AppState::default();
        let admin = register_user(&state, "admin_sub", Role::Admin).await;
        let owner = register_user(&state, "owner_sub", Role::User).await;
        {
            let mut store = state.store.write().await;
            let approved = store.create_vendor(owner.id, registration("Approved Co"));
            store.approve_vendor(approved.id).unwrap();
            store.create_vendor(owner.id, registration("Pending Co"));
        }

        let Json(all) = list_vendors(
            State(state.clone()),
            RequireAdmin(admin.clone()),
            Query(ReviewQuery { status: None }),
        )
        .await;
        assert_eq!(all.len(), 2);

        let Json(pending) = list_vendors(
            State(state),
            RequireAdmin(admin),
            Query(ReviewQuery {
                status: Some(ReviewStatus::Pending),
            }),
        )
        .await;
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].company_name, "Pending Co");
    }

    #[tokio::test]
    async fn clinic_request_rejection_leaves_no_clinic() {
        let state = AppState::default();
        let admin = register_user(&state, "admin_sub", Role::Admin).await;
        let owner = register_user(&state, "owner_sub", Role::User).await;
        let request = {
            let mut store = state.store.write().await;
            store.submit_clinic_request(
                owner.id,
                SubmitClinicRequest {
                    clinic_name: "Smile Clinic".into(),
                    identification_number: "CL-1".into(),
                    contact_email: "c@example.com".into(),
                    contact_phone: "555".into(),
                },
            )
        };

        let Json(rejected) = reject_clinic_request(
            State(state.clone()),
            RequireAdmin(admin),
            Path(request.id),
        )
        .await
        .unwrap();

        assert_eq!(rejected.status, ReviewStatus::Rejected);
        assert!(state.store.read().await.list_public_clinics().is_empty());
    }

    #[tokio::test]
    async fn category_creation_returns_201_and_rejects_bad_parent() {
        let state = AppState::default();
        let admin = register_user(&state, "admin_sub", Role::Admin).await;

        let (status, Json(category)) = create_category(
            State(state.clone()),
            RequireAdmin(admin.clone()),
            Json(CreateCategoryRequest {
                name: "Equipment".into(),
                parent_id: None,
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(category.name, "Equipment");

        let err = create_category(
            State(state),
            RequireAdmin(admin),
            Json(CreateCategoryRequest {
                name: "Orphan".into(),
                parent_id: Some(Uuid::new_v4()),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn stats_reflect_pending_reviews() {
        let state = AppState::default();
        let admin = register_user(&state, "admin_sub", Role::Admin).await;
        let owner = register_user(&state, "owner_sub", Role::User).await;
        {
            let mut store = state.store.write().await;
            store.create_vendor(owner.id, registration("Pending Co"));
        }

        let Json(stats) = stats(State(state), RequireAdmin(admin)).await;
        assert_eq!(stats.total_users, 2);
        assert_eq!(stats.pending_vendors, 1);
        assert_eq!(stats.total_orders, 0);
    }
}
