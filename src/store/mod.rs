// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DentalMall

//! # Data Store
//!
//! Typed in-process store for all DentalMall entities. This is the
//! external-collaborator seam of the system: route handlers call typed
//! find/create/update operations and never reach into raw collections.
//!
//! The store is held behind `Arc<RwLock<..>>` in `AppState`; it is the
//! only shared resource across requests and serializes conflicting
//! writes. Operations per entity live in sibling modules:
//!
//! - `users` - directory lookup and profile upserts
//! - `catalog` - category tree and products
//! - `vendors` - vendor registrations and the review queue
//! - `clinics` - clinic requests and approved clinics
//! - `orders` - checkout and ownership-scoped reads
//! - `ownership` - owner verification traits

pub mod catalog;
pub mod clinics;
pub mod orders;
pub mod ownership;
pub mod users;
pub mod vendors;

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

pub use ownership::{OwnedResource, OwnershipCheck, OwnershipEnforcer};

use crate::models::{
    ApplicationUser, Category, Clinic, ClinicRequest, Order, Product, Vendor,
};

/// Store-level error taxonomy, mapped onto HTTP statuses in `error.rs`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested entity does not exist.
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// The caller does not own the resource.
    #[error("access to {resource} denied for user {user_id}")]
    PermissionDenied { user_id: Uuid, resource: &'static str },

    /// The request referenced invalid data.
    #[error("{0}")]
    Invalid(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// In-memory entity store.
#[derive(Default)]
pub struct Store {
    users: HashMap<Uuid, ApplicationUser>,
    /// External subject id -> internal user id.
    subjects: HashMap<String, Uuid>,
    vendors: HashMap<Uuid, Vendor>,
    clinics: HashMap<Uuid, Clinic>,
    clinic_requests: HashMap<Uuid, ClinicRequest>,
    categories: HashMap<Uuid, Category>,
    products: HashMap<Uuid, Product>,
    orders: HashMap<Uuid, Order>,
}

/// Entity counts for the admin dashboard.
#[derive(Debug, Serialize, ToSchema)]
pub struct StoreStats {
    pub total_users: usize,
    pub total_vendors: usize,
    pub pending_vendors: usize,
    pub total_clinics: usize,
    pub pending_clinic_requests: usize,
    pub total_categories: usize,
    pub total_products: usize,
    pub total_orders: usize,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entity counts across the store.
    pub fn stats(&self) -> StoreStats {
        use crate::models::ReviewStatus;

        StoreStats {
            total_users: self.users.len(),
            total_vendors: self.vendors.len(),
            pending_vendors: self
                .vendors
                .values()
                .filter(|v| v.status == ReviewStatus::Pending)
                .count(),
            total_clinics: self.clinics.len(),
            pending_clinic_requests: self
                .clinic_requests
                .values()
                .filter(|r| r.status == ReviewStatus::Pending)
                .count(),
            total_categories: self.categories.len(),
            total_products: self.products.len(),
            total_orders: self.orders.len(),
        }
    }

    /// Seed a small demo catalog for local development.
    ///
    /// Enabled via `SEED_DEMO_DATA=true`. Not used in production.
    pub fn seed_demo_data(&mut self) {
        use crate::models::{CreateCategoryRequest, CreateVendorRequest, NewProduct};
        use crate::auth::Role;

        let owner = self.upsert_user_profile(
            "demo_vendor_subject",
            crate::models::RegisterProfileRequest {
                email: "vendor@dentalmall.example".into(),
                first_name: "Demo".into(),
                last_name: "Vendor".into(),
            },
        );

        let vendor = self.create_vendor(
            owner.0.id,
            CreateVendorRequest {
                company_name: "DentaSupply".into(),
                identification_number: "DS-0001".into(),
                contact_email: "sales@dentasupply.example".into(),
                contact_phone: "+1 555 0100".into(),
            },
        );
        // Demo vendor goes live immediately; promotes the owner too.
        let vendor = self
            .approve_vendor(vendor.id)
            .expect("seeded vendor exists");
        debug_assert_eq!(
            self.get_user(owner.0.id).map(|u| u.role).ok(),
            Some(Role::Vendor)
        );

        let equipment = self
            .create_category(CreateCategoryRequest {
                name: "Equipment".into(),
                parent_id: None,
            })
            .expect("top-level category");
        let chairs = self
            .create_category(CreateCategoryRequest {
                name: "Chairs".into(),
                parent_id: Some(equipment.id),
            })
            .expect("child category");
        let _consumables = self
            .create_category(CreateCategoryRequest {
                name: "Consumables".into(),
                parent_id: None,
            })
            .expect("top-level category");

        self.create_product(NewProduct {
            vendor_id: vendor.id,
            category_id: chairs.id,
            name: "Ergonomic Dental Chair".into(),
            description: "Hydraulic chair with adjustable headrest.".into(),
            price_cents: 249_900,
            is_active: true,
        })
        .expect("seeded product references seeded vendor and category");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_demo_data_populates_catalog() {
        let mut store = Store::new();
        store.seed_demo_data();

        let stats = store.stats();
        assert_eq!(stats.total_users, 1);
        assert_eq!(stats.total_vendors, 1);
        assert_eq!(stats.pending_vendors, 0);
        assert_eq!(stats.total_categories, 3);
        assert_eq!(stats.total_products, 1);
        assert!(!store.list_public_vendors().is_empty());
    }

    #[test]
    fn empty_store_has_zero_stats() {
        let stats = Store::new().stats();
        assert_eq!(stats.total_users, 0);
        assert_eq!(stats.total_orders, 0);
    }
}
