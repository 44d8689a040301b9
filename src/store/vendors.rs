// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DentalMall

//! Vendor registrations and the admin review queue.

use chrono::Utc;
use uuid::Uuid;

use crate::auth::Role;
use crate::models::{CreateVendorRequest, PublicVendor, ReviewStatus, Vendor};

use super::{Store, StoreError, StoreResult};

impl Store {
    /// Submit a vendor registration for the given owner.
    ///
    /// New registrations are pending and inactive until an admin
    /// approves them.
    pub fn create_vendor(&mut self, owner_user_id: Uuid, request: CreateVendorRequest) -> Vendor {
        let now = Utc::now();
        let vendor = Vendor {
            id: Uuid::new_v4(),
            owner_user_id,
            company_name: request.company_name,
            identification_number: request.identification_number,
            contact_email: request.contact_email,
            contact_phone: request.contact_phone,
            status: ReviewStatus::Pending,
            is_active: false,
            created_at: now,
            updated_at: now,
        };
        self.vendors.insert(vendor.id, vendor.clone());
        vendor
    }

    /// Public storefront listing: approved and active vendors only,
    /// projected to the public DTO, company name ascending.
    pub fn list_public_vendors(&self) -> Vec<PublicVendor> {
        let mut vendors: Vec<_> = self
            .vendors
            .values()
            .filter(|v| v.status == ReviewStatus::Approved && v.is_active)
            .map(PublicVendor::from)
            .collect();
        vendors.sort_by(|a, b| a.company_name.cmp(&b.company_name));
        vendors
    }

    /// Public vendor detail; hidden vendors are not found.
    pub fn get_public_vendor(&self, id: Uuid) -> StoreResult<PublicVendor> {
        self.vendors
            .get(&id)
            .filter(|v| v.status == ReviewStatus::Approved && v.is_active)
            .map(PublicVendor::from)
            .ok_or(StoreError::NotFound { resource: "vendor" })
    }

    /// Ownership-scoped listing: only rows owned by the given user.
    pub fn list_vendors_owned_by(&self, owner_user_id: Uuid) -> Vec<Vendor> {
        let mut vendors: Vec<_> = self
            .vendors
            .values()
            .filter(|v| v.owner_user_id == owner_user_id)
            .cloned()
            .collect();
        vendors.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        vendors
    }

    /// Admin review queue, optionally filtered by status.
    pub fn list_vendors_by_status(&self, status: Option<ReviewStatus>) -> Vec<Vendor> {
        let mut vendors: Vec<_> = self
            .vendors
            .values()
            .filter(|v| status.is_none_or(|s| v.status == s))
            .cloned()
            .collect();
        vendors.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        vendors
    }

    /// Approve a vendor registration.
    ///
    /// Activates the storefront and promotes the owner from USER to
    /// VENDOR. Admin owners keep their role.
    pub fn approve_vendor(&mut self, id: Uuid) -> StoreResult<Vendor> {
        let vendor = self
            .vendors
            .get_mut(&id)
            .ok_or(StoreError::NotFound { resource: "vendor" })?;
        vendor.status = ReviewStatus::Approved;
        vendor.is_active = true;
        vendor.updated_at = Utc::now();
        let vendor = vendor.clone();

        if let Some(owner) = self.users.get_mut(&vendor.owner_user_id) {
            if owner.role == Role::User {
                owner.role = Role::Vendor;
                owner.updated_at = Utc::now();
            }
        }

        Ok(vendor)
    }

    /// Reject a vendor registration.
    pub fn reject_vendor(&mut self, id: Uuid) -> StoreResult<Vendor> {
        let vendor = self
            .vendors
            .get_mut(&id)
            .ok_or(StoreError::NotFound { resource: "vendor" })?;
        vendor.status = ReviewStatus::Rejected;
        vendor.is_active = false;
        vendor.updated_at = Utc::now();
        Ok(vendor.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RegisterProfileRequest;

    fn register_user(store: &mut Store, subject: &str) -> Uuid {
        store
            .upsert_user_profile(
                subject,
                RegisterProfileRequest {
                    email: format!("{subject}@example.com"),
                    first_name: "Pat".into(),
                    last_name: "Doe".into(),
                },
            )
            .0
            .id
    }

    fn registration(name: &str) -> CreateVendorRequest {
        CreateVendorRequest {
            company_name: name.into(),
            identification_number: "ID-9".into(),
            contact_email: "c@example.com".into(),
            contact_phone: "555".into(),
        }
    }

    #[test]
    fn new_registration_is_pending_and_inactive() {
        let mut store = Store::new();
        let owner = register_user(&mut store, "sub_1");

        let vendor = store.create_vendor(owner, registration("Acme"));
        assert_eq!(vendor.status, ReviewStatus::Pending);
        assert!(!vendor.is_active);

        // Pending vendors never appear publicly.
        assert!(store.list_public_vendors().is_empty());
        assert!(matches!(
            store.get_public_vendor(vendor.id),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn approval_activates_and_promotes_owner() {
        let mut store = Store::new();
        let owner = register_user(&mut store, "sub_1");
        let vendor = store.create_vendor(owner, registration("Acme"));

        let approved = store.approve_vendor(vendor.id).unwrap();
        assert_eq!(approved.status, ReviewStatus::Approved);
        assert!(approved.is_active);
        assert_eq!(store.get_user(owner).unwrap().role, Role::Vendor);

        assert_eq!(store.list_public_vendors().len(), 1);
    }

    #[test]
    fn approval_does_not_demote_admin_owner() {
        let mut store = Store::new();
        let owner = register_user(&mut store, "sub_1");
        store.set_user_role(owner, Role::Admin).unwrap();
        let vendor = store.create_vendor(owner, registration("Acme"));

        store.approve_vendor(vendor.id).unwrap();
        assert_eq!(store.get_user(owner).unwrap().role, Role::Admin);
    }

    #[test]
    fn rejection_keeps_vendor_hidden() {
        let mut store = Store::new();
        let owner = register_user(&mut store, "sub_1");
        let vendor = store.create_vendor(owner, registration("Acme"));

        let rejected = store.reject_vendor(vendor.id).unwrap();
        assert_eq!(rejected.status, ReviewStatus::Rejected);
        assert!(store.list_public_vendors().is_empty());
        // Rejection must not grant the vendor role.
        assert_eq!(store.get_user(owner).unwrap().role, Role::User);
    }

    #[test]
    fn ownership_scoped_listing_never_leaks_other_owners() {
        let mut store = Store::new();
        let owner_a = register_user(&mut store, "sub_a");
        let owner_b = register_user(&mut store, "sub_b");
        store.create_vendor(owner_a, registration("Acme"));
        store.create_vendor(owner_a, registration("Apex"));
        store.create_vendor(owner_b, registration("Bravo"));

        let mine = store.list_vendors_owned_by(owner_a);
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|v| v.owner_user_id == owner_a));
    }

    #[test]
    fn review_queue_filters_by_status() {
        let mut store = Store::new();
        let owner = register_user(&mut store, "sub_1");
        let pending = store.create_vendor(owner, registration("Pending Co"));
        let approved = store.create_vendor(owner, registration("Approved Co"));
        store.approve_vendor(approved.id).unwrap();

        let pending_list = store.list_vendors_by_status(Some(ReviewStatus::Pending));
        assert_eq!(pending_list.len(), 1);
        assert_eq!(pending_list[0].id, pending.id);

        assert_eq!(store.list_vendors_by_status(None).len(), 2);
    }

    #[test]
    fn public_projection_excludes_identification_number() {
        let mut store = Store::new();
        let owner = register_user(&mut store, "sub_1");
        let vendor = store.create_vendor(owner, registration("Acme"));
        store.approve_vendor(vendor.id).unwrap();

        let json = serde_json::to_value(store.list_public_vendors()).unwrap();
        assert!(json[0].get("identification_number").is_none());
        assert!(json[0].get("owner_user_id").is_none());
    }
}
