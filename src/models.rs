// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DentalMall

//! # API Data Models
//!
//! Domain entities and the request/response structures used by the REST
//! API. All wire types derive `Serialize`/`Deserialize` and `ToSchema`
//! for JSON handling and OpenAPI documentation.
//!
//! ## Entity Categories
//!
//! - **Users**: application user records keyed by the external subject id
//! - **Vendors / Clinic Requests**: registrations with a review lifecycle
//! - **Catalog**: category tree and products
//! - **Orders**: checkout results, ownership-scoped per user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::Role;

// =============================================================================
// Users
// =============================================================================

/// The application's own user record, distinct from the external
/// identity. Created on first sign-in, never hard-deleted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApplicationUser {
    /// Internal user id.
    pub id: Uuid,
    /// External identity-provider subject identifier (unique).
    pub subject: String,
    /// Contact email.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Application role. Never client-writable; changed only by the
    /// admin review flow.
    pub role: Role,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl ApplicationUser {
    pub fn new(
        subject: impl Into<String>,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: Role,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            subject: subject.into(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            role,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Profile payload for first-sign-in registration (POST /api/users/me).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterProfileRequest {
    /// Contact email.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

/// Partial profile update (PUT /api/users/me). Role is not updatable here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

// =============================================================================
// Review lifecycle
// =============================================================================

/// Lifecycle status of a vendor registration or clinic request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    /// Submitted, awaiting admin review.
    Pending,
    /// Approved by an admin.
    Approved,
    /// Rejected by an admin.
    Rejected,
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewStatus::Pending => write!(f, "pending"),
            ReviewStatus::Approved => write!(f, "approved"),
            ReviewStatus::Rejected => write!(f, "rejected"),
        }
    }
}

// =============================================================================
// Vendors
// =============================================================================

/// A vendor storefront registration, owned by one application user.
///
/// Created by a user submission (pending, inactive); mutated only by the
/// admin review action.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Vendor {
    pub id: Uuid,
    /// Owning application user (internal id).
    pub owner_user_id: Uuid,
    /// Registered company name.
    pub company_name: String,
    /// Business identification number. Not public.
    pub identification_number: String,
    pub contact_email: String,
    pub contact_phone: String,
    /// Review lifecycle status.
    pub status: ReviewStatus,
    /// Whether the storefront is visible in public listings.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public projection of a vendor.
///
/// Omits every non-public field: owner id, identification number, and
/// lifecycle state never leave the server on public routes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PublicVendor {
    pub id: Uuid,
    pub company_name: String,
    pub contact_email: String,
    pub contact_phone: String,
}

impl From<&Vendor> for PublicVendor {
    fn from(vendor: &Vendor) -> Self {
        Self {
            id: vendor.id,
            company_name: vendor.company_name.clone(),
            contact_email: vendor.contact_email.clone(),
            contact_phone: vendor.contact_phone.clone(),
        }
    }
}

/// Vendor registration submission.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateVendorRequest {
    pub company_name: String,
    pub identification_number: String,
    pub contact_email: String,
    pub contact_phone: String,
}

// =============================================================================
// Clinics
// =============================================================================

/// A clinic registration request, owned by one application user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ClinicRequest {
    pub id: Uuid,
    pub owner_user_id: Uuid,
    pub clinic_name: String,
    pub identification_number: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub status: ReviewStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Clinic registration submission.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitClinicRequest {
    pub clinic_name: String,
    pub identification_number: String,
    pub contact_email: String,
    pub contact_phone: String,
}

/// An approved clinic, materialized from an accepted request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Clinic {
    pub id: Uuid,
    pub owner_user_id: Uuid,
    pub clinic_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub created_at: DateTime<Utc>,
}

/// Public projection of a clinic (no owner id).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PublicClinic {
    pub id: Uuid,
    pub clinic_name: String,
    pub contact_email: String,
    pub contact_phone: String,
}

impl From<&Clinic> for PublicClinic {
    fn from(clinic: &Clinic) -> Self {
        Self {
            id: clinic.id,
            clinic_name: clinic.clinic_name.clone(),
            contact_email: clinic.contact_email.clone(),
            contact_phone: clinic.contact_phone.clone(),
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// A catalog category. Categories form a tree via `parent_id`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    /// Parent category; `None` for top-level categories.
    pub parent_id: Option<Uuid>,
}

/// A category with its nested children (up to two levels deep).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CategoryNode {
    pub id: Uuid,
    pub name: String,
    pub parent_id: Option<Uuid>,
    /// Direct children, name ascending.
    #[schema(no_recursion)]
    pub children: Vec<CategoryNode>,
}

/// Admin request to create a category.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub parent_id: Option<Uuid>,
}

/// Admin request to update a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    /// Re-parent under this category when set.
    pub parent_id: Option<Uuid>,
}

/// A product listed by a vendor.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub description: String,
    /// Unit price in minor currency units.
    pub price_cents: i64,
    /// Inactive products are hidden from the catalog and not orderable.
    pub is_active: bool,
}

/// Fields for creating a product (seeding and vendor tooling).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewProduct {
    pub vendor_id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub is_active: bool,
}

// =============================================================================
// Orders
// =============================================================================

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Cancelled,
}

/// One priced line of an order. Unit price is captured at checkout time.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct OrderItem {
    pub product_id: Uuid,
    pub quantity: u32,
    pub unit_price_cents: i64,
}

/// A customer order, owned by one application user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub items: Vec<OrderItem>,
    pub total_cents: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// One requested line at checkout; the server prices it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderItem {
    pub product_id: Uuid,
    pub quantity: u32,
}

/// Checkout request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub items: Vec<CreateOrderItem>,
}
