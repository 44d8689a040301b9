// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DentalMall

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{
        ApplicationUser, Category, CategoryNode, Clinic, ClinicRequest, CreateCategoryRequest,
        CreateOrderItem, CreateOrderRequest, CreateVendorRequest, Order, OrderItem, OrderStatus,
        Product, PublicClinic, PublicVendor, RegisterProfileRequest, ReviewStatus,
        SubmitClinicRequest, UpdateCategoryRequest, UpdateProfileRequest, Vendor,
    },
    state::AppState,
    store::StoreStats,
};

pub mod admin;
pub mod categories;
pub mod clinics;
pub mod health;
pub mod orders;
pub mod products;
pub mod users;
pub mod vendors;

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/users/me",
            get(users::get_me)
                .post(users::register_profile)
                .put(users::update_me),
        )
        .route("/categories", get(categories::list_categories))
        .route("/categories/{category_id}", get(categories::get_category))
        .route("/products", get(products::list_products))
        .route("/products/{product_id}", get(products::get_product))
        .route(
            "/vendors",
            get(vendors::list_vendors).post(vendors::create_vendor),
        )
        .route("/vendors/{vendor_id}", get(vendors::get_vendor))
        .route("/clinics", get(clinics::list_clinics))
        .route(
            "/clinic-requests",
            get(clinics::list_my_clinic_requests).post(clinics::submit_clinic_request),
        )
        .route(
            "/orders",
            get(orders::list_my_orders).post(orders::create_order),
        )
        .route("/orders/{order_id}", get(orders::get_order))
        .route("/admin/login-check", get(admin::login_check))
        .route("/admin/users", get(admin::list_users))
        .route("/admin/vendors", get(admin::list_vendors))
        .route(
            "/admin/vendors/{vendor_id}/approve",
            put(admin::approve_vendor),
        )
        .route(
            "/admin/vendors/{vendor_id}/reject",
            put(admin::reject_vendor),
        )
        .route("/admin/clinic-requests", get(admin::list_clinic_requests))
        .route(
            "/admin/clinic-requests/{request_id}/approve",
            put(admin::approve_clinic_request),
        )
        .route(
            "/admin/clinic-requests/{request_id}/reject",
            put(admin::reject_clinic_request),
        )
        .route("/admin/orders", get(admin::list_orders))
        .route("/admin/stats", get(admin::stats))
        .route("/admin/categories", post(admin::create_category))
        .route(
            "/admin/categories/{category_id}",
            put(admin::update_category),
        );

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .nest("/api", api_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        health::ready,
        users::register_profile,
        users::get_me,
        users::update_me,
        categories::list_categories,
        categories::get_category,
        products::list_products,
        products::get_product,
        vendors::list_vendors,
        vendors::create_vendor,
        vendors::get_vendor,
        clinics::list_clinics,
        clinics::submit_clinic_request,
        clinics::list_my_clinic_requests,
        orders::create_order,
        orders::list_my_orders,
        orders::get_order,
        admin::login_check,
        admin::list_users,
        admin::list_vendors,
        admin::approve_vendor,
        admin::reject_vendor,
        admin::list_clinic_requests,
        admin::approve_clinic_request,
        admin::reject_clinic_request,
        admin::list_orders,
        admin::stats,
        admin::create_category,
        admin::update_category
    ),
    components(
        schemas(
            ApplicationUser,
            RegisterProfileRequest,
            UpdateProfileRequest,
            ReviewStatus,
            Vendor,
            PublicVendor,
            CreateVendorRequest,
            Clinic,
            PublicClinic,
            ClinicRequest,
            SubmitClinicRequest,
            Category,
            CategoryNode,
            CreateCategoryRequest,
            UpdateCategoryRequest,
            Product,
            Order,
            OrderItem,
            OrderStatus,
            CreateOrderRequest,
            CreateOrderItem,
            StoreStats
        )
    ),
    tags(
        (name = "Health", description = "Liveness and readiness probes"),
        (name = "Users", description = "Profile registration and self-service"),
        (name = "Catalog", description = "Public category tree and products"),
        (name = "Vendors", description = "Vendor storefronts and registrations"),
        (name = "Clinics", description = "Clinic directory and registration requests"),
        (name = "Orders", description = "Checkout and order history"),
        (name = "Admin", description = "Review queues and platform administration")
    )
)]
struct ApiDoc;
