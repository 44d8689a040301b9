// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DentalMall

//! User directory operations.
//!
//! Every protected request resolves the external subject id to an
//! `ApplicationUser` through [`Store::find_user_by_subject`]; there is
//! no caching layer in front of this lookup.

use chrono::Utc;
use uuid::Uuid;

use crate::auth::Role;
use crate::models::{ApplicationUser, RegisterProfileRequest, UpdateProfileRequest};

use super::{Store, StoreError, StoreResult};

impl Store {
    /// Resolve an external subject identifier to the application user.
    ///
    /// Returns `None` when the identity has never registered; callers
    /// must treat that as not-found, not as a default-role user.
    pub fn find_user_by_subject(&self, subject: &str) -> Option<ApplicationUser> {
        self.subjects
            .get(subject)
            .and_then(|id| self.users.get(id))
            .cloned()
    }

    /// Fetch a user by internal id.
    pub fn get_user(&self, id: Uuid) -> StoreResult<ApplicationUser> {
        self.users
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { resource: "user" })
    }

    /// First-sign-in registration: create the user for this subject, or
    /// refresh the profile fields when the record already exists.
    ///
    /// Returns the record and whether it was newly created. The role is
    /// never touched by this path.
    pub fn upsert_user_profile(
        &mut self,
        subject: &str,
        profile: RegisterProfileRequest,
    ) -> (ApplicationUser, bool) {
        if let Some(id) = self.subjects.get(subject).copied() {
            let user = self
                .users
                .get_mut(&id)
                .expect("subject index always points at an existing user");
            user.email = profile.email;
            user.first_name = profile.first_name;
            user.last_name = profile.last_name;
            user.updated_at = Utc::now();
            return (user.clone(), false);
        }

        let user = ApplicationUser::new(
            subject,
            profile.email,
            profile.first_name,
            profile.last_name,
            Role::default(),
        );
        self.subjects.insert(subject.to_string(), user.id);
        self.users.insert(user.id, user.clone());
        (user, true)
    }

    /// Partial profile update for an existing user.
    pub fn update_user_profile(
        &mut self,
        id: Uuid,
        update: UpdateProfileRequest,
    ) -> StoreResult<ApplicationUser> {
        let user = self
            .users
            .get_mut(&id)
            .ok_or(StoreError::NotFound { resource: "user" })?;

        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(first_name) = update.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            user.last_name = last_name;
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }

    /// Change a user's role. Reserved for the admin review flow.
    pub fn set_user_role(&mut self, id: Uuid, role: Role) -> StoreResult<ApplicationUser> {
        let user = self
            .users
            .get_mut(&id)
            .ok_or(StoreError::NotFound { resource: "user" })?;
        user.role = role;
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    /// All users, email ascending. Admin directory view.
    pub fn list_users(&self) -> Vec<ApplicationUser> {
        let mut users: Vec<_> = self.users.values().cloned().collect();
        users.sort_by(|a, b| a.email.cmp(&b.email));
        users
    }
}
