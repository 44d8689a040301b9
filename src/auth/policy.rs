// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DentalMall

//! Declarative access policies.
//!
//! Handlers never hand-roll role comparisons. Each role-gated route is
//! covered by an [`AccessPolicy`] evaluated through the pure [`authorize`]
//! function; the `RequireAdmin` / `RequireVendor` extractors compose it
//! with credential verification and the user directory lookup.
//!
//! Ownership is the other half of authorization: resource-level checks
//! go through `store::ownership` once the resource has been loaded.

use crate::models::ApplicationUser;

use super::error::AuthError;
use super::roles::Role;

/// Denial message for admin-gated routes. The exact wording is part of
/// the admin login-check contract.
pub const ADMIN_REQUIRED: &str = "Access denied. Admin privileges required.";

/// Denial message for vendor-gated routes.
pub const VENDOR_REQUIRED: &str = "Access denied. Vendor privileges required.";

/// A declarative role requirement for one route.
#[derive(Debug, Clone, Copy)]
pub struct AccessPolicy {
    required_role: Role,
    denial: &'static str,
}

impl AccessPolicy {
    /// ADMIN role required, exact match.
    pub fn admin_only() -> Self {
        Self {
            required_role: Role::Admin,
            denial: ADMIN_REQUIRED,
        }
    }

    /// VENDOR role required, exact match. Admins do not pass.
    pub fn vendor_only() -> Self {
        Self {
            required_role: Role::Vendor,
            denial: VENDOR_REQUIRED,
        }
    }
}

/// Evaluate a policy against a resolved user.
///
/// Pure decision: no I/O, no side effects, so the role gate is testable
/// independent of transport and navigation concerns.
pub fn authorize(user: &ApplicationUser, policy: &AccessPolicy) -> Result<(), AuthError> {
    if user.role.satisfies(policy.required_role) {
        Ok(())
    } else {
        Err(AuthError::AccessDenied(policy.denial))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApplicationUser;

    fn user_with_role(role: Role) -> ApplicationUser {
        ApplicationUser::new("idp_subject", "user@example.com", "Test", "User", role)
    }

    #[test]
    fn admin_policy_rejects_user_with_exact_message() {
        let policy = AccessPolicy::admin_only();
        let err = authorize(&user_with_role(Role::User), &policy).unwrap_err();
        assert_eq!(err.to_string(), "Access denied. Admin privileges required.");
    }

    #[test]
    fn admin_policy_admits_admin() {
        assert!(authorize(&user_with_role(Role::Admin), &AccessPolicy::admin_only()).is_ok());
    }

    #[test]
    fn vendor_policy_rejects_admin() {
        // No hierarchy: admin does not implicitly pass vendor checks.
        let policy = AccessPolicy::vendor_only();
        assert!(authorize(&user_with_role(Role::Admin), &policy).is_err());
        assert!(authorize(&user_with_role(Role::Vendor), &policy).is_ok());
    }

    #[test]
    fn vendor_policy_rejects_user_with_exact_message() {
        let err =
            authorize(&user_with_role(Role::User), &AccessPolicy::vendor_only()).unwrap_err();
        assert_eq!(err.to_string(), "Access denied. Vendor privileges required.");
    }
}
