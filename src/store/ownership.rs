// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DentalMall

//! Ownership enforcement for stored resources.
//!
//! Ownership is the second half of authorization: after the role gate,
//! resource-level access filters by the requesting user's internal id.
//! Handlers verify through these traits rather than comparing ids inline.

use uuid::Uuid;

use crate::models::{ApplicationUser, Clinic, ClinicRequest, Order, Vendor};

use super::{StoreError, StoreResult};

/// A resource owned by exactly one application user.
pub trait OwnedResource {
    /// Resource name used in error messages.
    const RESOURCE: &'static str;

    /// The owning user's internal id.
    fn owner_user_id(&self) -> Uuid;
}

impl OwnedResource for Vendor {
    const RESOURCE: &'static str = "vendor";

    fn owner_user_id(&self) -> Uuid {
        self.owner_user_id
    }
}

impl OwnedResource for ClinicRequest {
    const RESOURCE: &'static str = "clinic request";

    fn owner_user_id(&self) -> Uuid {
        self.owner_user_id
    }
}

impl OwnedResource for Clinic {
    const RESOURCE: &'static str = "clinic";

    fn owner_user_id(&self) -> Uuid {
        self.owner_user_id
    }
}

impl OwnedResource for Order {
    const RESOURCE: &'static str = "order";

    fn owner_user_id(&self) -> Uuid {
        self.user_id
    }
}

/// Verify that a user owns a resource.
pub trait OwnershipEnforcer {
    /// Returns `StoreError::PermissionDenied` when the user is not the owner.
    fn verify_ownership(&self, user: &ApplicationUser) -> StoreResult<()>;
}

impl<T: OwnedResource> OwnershipEnforcer for T {
    fn verify_ownership(&self, user: &ApplicationUser) -> StoreResult<()> {
        if self.owner_user_id() == user.id {
            Ok(())
        } else {
            Err(StoreError::PermissionDenied {
                user_id: user.id,
                resource: T::RESOURCE,
            })
        }
    }
}

/// Chainable ownership check on store results.
pub trait OwnershipCheck<T> {
    /// Verify ownership and return the resource if authorized.
    fn verify_owner(self, user: &ApplicationUser) -> StoreResult<T>;
}

impl<T: OwnedResource> OwnershipCheck<T> for StoreResult<T> {
    fn verify_owner(self, user: &ApplicationUser) -> StoreResult<T> {
        let resource = self?;
        resource.verify_ownership(user)?;
        Ok(resource)
    }
}
