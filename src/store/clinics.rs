// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DentalMall

//! Clinic registration requests and approved clinics.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{Clinic, ClinicRequest, PublicClinic, ReviewStatus, SubmitClinicRequest};

use super::{Store, StoreError, StoreResult};

impl Store {
    /// Submit a clinic registration request for the given owner.
    pub fn submit_clinic_request(
        &mut self,
        owner_user_id: Uuid,
        request: SubmitClinicRequest,
    ) -> ClinicRequest {
        let now = Utc::now();
        let clinic_request = ClinicRequest {
            id: Uuid::new_v4(),
            owner_user_id,
            clinic_name: request.clinic_name,
            identification_number: request.identification_number,
            contact_email: request.contact_email,
            contact_phone: request.contact_phone,
            status: ReviewStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        self.clinic_requests
            .insert(clinic_request.id, clinic_request.clone());
        clinic_request
    }

    /// Ownership-scoped listing of a user's own requests.
    pub fn list_clinic_requests_owned_by(&self, owner_user_id: Uuid) -> Vec<ClinicRequest> {
        let mut requests: Vec<_> = self
            .clinic_requests
            .values()
            .filter(|r| r.owner_user_id == owner_user_id)
            .cloned()
            .collect();
        requests.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        requests
    }

    /// Admin review queue, optionally filtered by status.
    pub fn list_clinic_requests_by_status(
        &self,
        status: Option<ReviewStatus>,
    ) -> Vec<ClinicRequest> {
        let mut requests: Vec<_> = self
            .clinic_requests
            .values()
            .filter(|r| status.is_none_or(|s| r.status == s))
            .cloned()
            .collect();
        requests.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        requests
    }

    /// Approve a clinic request and materialize the clinic record.
    pub fn approve_clinic_request(&mut self, id: Uuid) -> StoreResult<Clinic> {
        let request = self
            .clinic_requests
            .get_mut(&id)
            .ok_or(StoreError::NotFound { resource: "clinic request" })?;
        request.status = ReviewStatus::Approved;
        request.updated_at = Utc::now();

        let clinic = Clinic {
            id: Uuid::new_v4(),
            owner_user_id: request.owner_user_id,
            clinic_name: request.clinic_name.clone(),
            contact_email: request.contact_email.clone(),
            contact_phone: request.contact_phone.clone(),
            created_at: Utc::now(),
        };
        self.clinics.insert(clinic.id, clinic.clone());
        Ok(clinic)
    }

    /// Reject a clinic request.
    pub fn reject_clinic_request(&mut self, id: Uuid) -> StoreResult<ClinicRequest> {
        let request = self
            .clinic_requests
            .get_mut(&id)
            .ok_or(StoreError::NotFound { resource: "clinic request" })?;
        request.status = ReviewStatus::Rejected;
        request.updated_at = Utc::now();
        Ok(request.clone())
    }

    /// Public listing of approved clinics, name ascending.
    pub fn list_public_clinics(&self) -> Vec<PublicClinic> {
        let mut clinics: Vec<_> = self.clinics.values().map(PublicClinic::from).collect();
        clinics.sort_by(|a, b| a.clinic_name.cmp(&b.clinic_name));
        clinics
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

    fn submission(name: &str) -> SubmitClinicRequest {
        SubmitClinicRequest {
            clinic_name: name.into(),
            identification_number: "CL-1".into(),
            contact_email: "clinic@example.com".into(),
            contact_phone: "555".into(),
        }
    }

    #[test]
    fn submission_is_pending_and_not_publicly_listed() {
        let mut store = Store::new();
        let owner = register_user(&mut store, "sub_1");

        let request = store.submit_clinic_request(owner, submission("Smile Clinic"));
        assert_eq!(request.status, ReviewStatus::Pending);
        assert!(store.list_public_clinics().is_empty());
    }

    #[test]
    fn approval_materializes_a_clinic_owned_by_requester() {
        let mut store = Store::new();
        let owner = register_user(&mut store, "sub_1");
        let request = store.submit_clinic_request(owner, submission("Smile Clinic"));

        let clinic = store.approve_clinic_request(request.id).unwrap();
        assert_eq!(clinic.owner_user_id, owner);
        assert_eq!(clinic.clinic_name, "Smile Clinic");

        let listed = store.list_public_clinics();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].clinic_name, "Smile Clinic");

        let reviewed = store.list_clinic_requests_by_status(Some(ReviewStatus::Approved));
        assert_eq!(reviewed.len(), 1);
    }

    #[test]
    fn rejection_leaves_no_clinic_behind() {
        let mut store = Store::new();
        let owner = register_user(&mut store, "sub_1");
        let request = store.submit_clinic_request(owner, submission("Smile Clinic"));

        let rejected = store.reject_clinic_request(request.id).unwrap();
        assert_eq!(rejected.status, ReviewStatus::Rejected);
        assert!(store.list_public_clinics().is_empty());
    }

    #[test]
    fn review_of_missing_request_is_not_found() {
        let mut store = Store::new();
        assert!(matches!(
            store.approve_clinic_request(Uuid::new_v4()),
            Err(StoreError::NotFound { .. })
        ));
        assert!(matches!(
            store.reject_clinic_request(Uuid::new_v4()),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn owned_requests_are_scoped_to_the_owner() {
        let mut store = Store::new();
        let owner_a = register_user(&mut store, "sub_a");
        let owner_b = register_user(&mut store, "sub_b");
        store.submit_clinic_request(owner_a, submission("A Clinic"));
        store.submit_clinic_request(owner_b, submission("B Clinic"));

        let mine = store.list_clinic_requests_owned_by(owner_a);
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].owner_user_id, owner_a);
    }
}
