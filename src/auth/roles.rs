// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DentalMall

//! User roles for authorization.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Application roles.
///
/// ## Role Policy
///
/// - `Admin` - back-office access (registration review, user directory)
/// - `Vendor` - owns vendor storefronts and their products
/// - `User` - regular shopper
///
/// Role checks are exact-match: `Admin` does NOT implicitly satisfy
/// `Vendor` checks. This mirrors current product behavior and must not
/// be changed without product sign-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Back-office administrator
    Admin,
    /// Approved vendor (storefront owner)
    Vendor,
    /// Regular shopper
    User,
}

impl Role {
    /// Check whether this role satisfies the required role.
    ///
    /// Exact match only. There is no role hierarchy.
    pub fn satisfies(&self, required: Role) -> bool {
        *self == required
    }
}

impl Default for Role {
    /// New accounts start as regular shoppers.
    fn default() -> Self {
        Role::User
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "ADMIN"),
            Role::Vendor => write!(f, "VENDOR"),
            Role::User => write!(f, "USER"),
        }
    }
}
