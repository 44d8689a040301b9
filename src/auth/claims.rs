// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DentalMall

//! Identity-provider token claims and the per-request identity record.

use serde::Deserialize;

/// Raw claims decoded from an identity-provider JWT.
///
/// Standard OIDC claims only. Application roles are NOT carried in the
/// token; they live on the `ApplicationUser` record and are resolved by
/// the user directory lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityClaims {
    /// Subject - the canonical identity-provider user identifier
    pub sub: String,

    /// Issued at timestamp
    #[serde(default)]
    pub iat: i64,

    /// Expiration timestamp
    #[serde(default)]
    pub exp: i64,

    /// Not before timestamp (optional)
    #[serde(default)]
    pub nbf: Option<i64>,

    /// Issuer (identity provider instance URL)
    #[serde(default)]
    pub iss: String,

    /// Audience (validated by the jsonwebtoken crate, not read directly)
    #[serde(default)]
    #[allow(dead_code)]
    pub aud: Option<serde_json::Value>,
}

/// Authenticated identity for one request.
///
/// Ephemeral: created per request after token verification, never
/// persisted. Carries no application role - the role belongs to the
/// resolved `ApplicationUser`.
#[derive(Debug, Clone)]
pub struct AuthenticatedIdentity {
    /// Canonical external subject identifier (`sub` claim)
    pub subject: String,
    /// Token issuer
    pub issuer: String,
    /// Token issue time (Unix timestamp)
    pub issued_at: i64,
    /// Token expiry (Unix timestamp)
    pub expires_at: i64,
}

impl AuthenticatedIdentity {
    /// Build the identity record from verified claims.
    pub fn from_claims(claims: IdentityClaims) -> Self {
        Self {
            subject: claims.sub,
            issuer: claims.iss,
            issued_at: claims.iat,
            expires_at: claims.exp,
        }
    }
}
