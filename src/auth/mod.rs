// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DentalMall

//! # Authentication & Authorization
//!
//! Bearer-token authentication and role-based authorization for the
//! DentalMall API.
//!
//! ## Request Flow
//!
//! 1. Client sends `Authorization: Bearer <JWT>` issued by the external
//!    identity provider
//! 2. Credential verification: signature, expiry, issuer, audience
//!    (JWKS fetched over HTTPS and cached with TTL)
//! 3. User directory lookup: `sub` claim resolved to the
//!    `ApplicationUser` record; no record means 404, never a default role
//! 4. Role gate: the route's declarative `AccessPolicy` is evaluated
//!    against the resolved user's role
//!
//! ## Security
//!
//! - Roles come from the user directory, never from token claims
//! - Role checks are exact-match; there is no hierarchy
//! - Clock skew tolerance is 60 seconds
//! - The client-side guard is advisory; these checks are the boundary

pub mod claims;
pub mod error;
pub mod extractor;
pub mod jwks;
pub mod policy;
pub mod roles;

pub use claims::AuthenticatedIdentity;
pub use error::AuthError;
pub use extractor::{Auth, CurrentUser, RequireAdmin, RequireVendor};
pub use jwks::JwksManager;
pub use policy::AccessPolicy;
pub use roles::Role;
