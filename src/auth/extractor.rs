// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DentalMall

//! Axum extractors composing the request-authorization flow.
//!
//! Per request the flow is: verify credential ([`Auth`]) -> resolve the
//! application user ([`CurrentUser`]) -> evaluate the route's access
//! policy ([`RequireAdmin`], [`RequireVendor`]). Each stage maps onto
//! the error taxonomy: 401 / 404 / 403.
//!
//! ```rust,ignore
//! async fn my_orders(
//!     State(state): State<AppState>,
//!     CurrentUser(user): CurrentUser,
//! ) -> Json<Vec<Order>> { /* ... */ }
//! ```

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{decode, decode_header, Validation};

use crate::models::ApplicationUser;
use crate::state::AppState;

use super::claims::{AuthenticatedIdentity, IdentityClaims};
use super::policy::{self, AccessPolicy};
use super::AuthError;

/// Clock skew tolerance (60 seconds).
const CLOCK_SKEW_LEEWAY: u64 = 60;

/// Credential verification: extracts and verifies the bearer token.
///
/// Yields the per-request [`AuthenticatedIdentity`]. This is the only
/// extractor that talks to the identity provider; everything below it
/// works on the verified subject.
pub struct Auth(pub AuthenticatedIdentity);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // A previous stage (or a test) may have verified already.
        if let Some(identity) = parts.extensions.get::<AuthenticatedIdentity>().cloned() {
            return Ok(Auth(identity));
        }

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthHeader)?
            .to_str()
            .map_err(|_| AuthError::InvalidAuthHeader)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidAuthHeader)?;

        let identity = verify_token(token, &state.auth_config).await?;

        Ok(Auth(identity))
    }
}

/// User directory lookup: verified identity resolved to the
/// application user record.
///
/// A verifiable identity with no matching user rejects with 404; the
/// role on the returned record is the only role the request carries.
pub struct CurrentUser(pub ApplicationUser);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // Test seams and middleware may inject a resolved user.
        if let Some(user) = parts.extensions.get::<ApplicationUser>().cloned() {
            return Ok(CurrentUser(user));
        }

        let Auth(identity) = Auth::from_request_parts(parts, state).await?;

        let user = state
            .store
            .read()
            .await
            .find_user_by_subject(&identity.subject)
            .ok_or(AuthError::UnknownUser)?;

        Ok(CurrentUser(user))
    }
}

/// Role gate: ADMIN-only routes.
pub struct RequireAdmin(pub ApplicationUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;
        if let Err(err) = policy::authorize(&user, &AccessPolicy::admin_only()) {
            tracing::warn!(user_id = %user.id, role = %user.role, "admin gate rejected request");
            return Err(err);
        }
        Ok(RequireAdmin(user))
    }
}

/// Role gate: VENDOR-only routes. Admins do not pass.
pub struct RequireVendor(pub ApplicationUser);

impl FromRequestParts<AppState> for RequireVendor {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;
        if let Err(err) = policy::authorize(&user, &AccessPolicy::vendor_only()) {
            tracing::warn!(user_id = %user.id, role = %user.role, "vendor gate rejected request");
            return Err(err);
        }
        Ok(RequireVendor(user))
    }
}

/// Verify a bearer token and produce the request identity.
///
/// Production mode (JWKS configured) verifies the signature against the
/// provider; development mode only validates structure and expiry.
async fn verify_token(
    token: &str,
    auth_config: &crate::state::AuthConfig,
) -> Result<AuthenticatedIdentity, AuthError> {
    if let Some(ref jwks) = auth_config.jwks {
        verify_token_production(token, jwks, auth_config).await
    } else {
        verify_token_development(token)
    }
}

async fn verify_token_production(
    token: &str,
    jwks: &super::JwksManager,
    auth_config: &crate::state::AuthConfig,
) -> Result<AuthenticatedIdentity, AuthError> {
    let header = decode_header(token).map_err(|_| AuthError::MalformedToken)?;

    let (decoding_key, algorithm) = jwks.key_for(header.kid.as_deref()).await?;

    let mut validation = Validation::new(algorithm);
    validation.leeway = CLOCK_SKEW_LEEWAY;

    if let Some(ref issuer) = auth_config.issuer {
        validation.set_issuer(&[issuer]);
    }

    if let Some(ref audience) = auth_config.audience {
        validation.set_audience(&[audience]);
    } else {
        validation.validate_aud = false;
    }

    let token_data =
        decode::<IdentityClaims>(token, &decoding_key, &validation).map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            jsonwebtoken::errors::ErrorKind::InvalidIssuer => AuthError::InvalidIssuer,
            jsonwebtoken::errors::ErrorKind::InvalidAudience => AuthError::InvalidAudience,
            jsonwebtoken::errors::ErrorKind::ImmatureSignature => AuthError::TokenNotYetValid,
            _ => AuthError::MalformedToken,
        })?;

    Ok(AuthenticatedIdentity::from_claims(token_data.claims))
}

/// Development verification (no signature check).
///
/// WARNING: only reachable when no JWKS URL is configured.
fn verify_token_development(token: &str) -> Result<AuthenticatedIdentity, AuthError> {
    let token_data = jsonwebtoken::dangerous::insecure_decode::<IdentityClaims>(token)
        .map_err(|_| AuthError::MalformedToken)?;

    let claims = token_data.claims;

    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_err(|e| AuthError::InternalError(e.to_string()))?
        .as_secs() as i64;

    if claims.exp > 0 && claims.exp < now - CLOCK_SKEW_LEEWAY as i64 {
        return Err(AuthError::TokenExpired);
    }

    Ok(AuthenticatedIdentity::from_claims(claims))
}
