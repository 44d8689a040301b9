// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DentalMall

//! Client-side guard decisions.
//!
//! The UI wraps protected views in a guard that mirrors the server's
//! authorization decision for UX purposes only: while auth state loads
//! it shows a placeholder, and unauthorized viewers are redirected
//! before protected content ever renders.
//!
//! The decision here is a pure function over an explicit auth context;
//! performing the navigation is the caller's effect. This is advisory:
//! the route handlers re-validate every request independently, and the
//! guard must never be the sole authorization mechanism.

use crate::auth::Role;

/// Navigation targets for redirect decisions.
pub const LOGIN_PATH: &str = "/login";
pub const PROFILE_PATH: &str = "/profile";
pub const HOME_PATH: &str = "/";

/// The protection variant a view declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardVariant {
    /// Any signed-in viewer.
    AuthenticatedOnly,
    /// Signed-in viewer with a completed profile.
    WithProfile,
    /// Signed-in viewer whose profile role is VENDOR.
    VendorOnly,
    /// Signed-out viewers only (e.g. the login page).
    GuestOnly,
}

/// The viewer's profile as known to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerProfile {
    pub role: Role,
}

/// Ambient auth context, passed explicitly to the guard.
///
/// `Loading` covers the window before the identity and profile have
/// resolved; `Authenticated` may still lack a profile when the identity
/// is known but registration has not completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Loading,
    Anonymous,
    Authenticated { profile: Option<ViewerProfile> },
}

/// What the guard should do with the wrapped view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth state unresolved: render the placeholder.
    Pending,
    /// Viewer satisfies the variant: render the content.
    Render,
    /// Viewer does not satisfy the variant: navigate to the target and
    /// keep rendering the placeholder (no content flash).
    Redirect(&'static str),
}

/// Decide whether a view may render for the given auth state.
pub fn decide(variant: GuardVariant, state: AuthState) -> GuardDecision {
    match (variant, state) {
        (_, AuthState::Loading) => GuardDecision::Pending,

        (GuardVariant::AuthenticatedOnly, AuthState::Authenticated { .. }) => GuardDecision::Render,
        (GuardVariant::AuthenticatedOnly, AuthState::Anonymous) => {
            GuardDecision::Redirect(LOGIN_PATH)
        }

        (GuardVariant::WithProfile, AuthState::Authenticated { profile: Some(_) }) => {
            GuardDecision::Render
        }
        (GuardVariant::WithProfile, AuthState::Authenticated { profile: None }) => {
            GuardDecision::Redirect(PROFILE_PATH)
        }
        (GuardVariant::WithProfile, AuthState::Anonymous) => GuardDecision::Redirect(LOGIN_PATH),

        (GuardVariant::VendorOnly, AuthState::Authenticated { profile: Some(profile) })
            if profile.role == Role::Vendor =>
        {
            GuardDecision::Render
        }
        // Everyone else lands on the profile page, signed in or not.
        (GuardVariant::VendorOnly, _) => GuardDecision::Redirect(PROFILE_PATH),

        (GuardVariant::GuestOnly, AuthState::Anonymous) => GuardDecision::Render,
        (GuardVariant::GuestOnly, AuthState::Authenticated { .. }) => {
            GuardDecision::Redirect(HOME_PATH)
        }
    }
}
