// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DentalMall

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::auth::AuthError;
use crate::store::StoreError;

/// Handler-level error response.
///
/// Every route handler converts its failures into this type locally;
/// nothing propagates unhandled to the transport layer.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Something went wrong. Please try again later.",
        )
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => Self::not_found(err.to_string()),
            // Ownership failures are forbidden; the user id stays in the
            // server-side log, not the response.
            StoreError::PermissionDenied { resource, .. } => {
                tracing::warn!(error = %err, "ownership check failed");
                Self::forbidden(format!("You do not have access to this {resource}"))
            }
            StoreError::Invalid(message) => Self::bad_request(message),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self::new(err.status_code(), err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(message = %self.message, "internal error response");
        }
        let body = Json(ErrorBody {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use uuid::Uuid;

    #[test]
    fn constructors_set_status_and_message() {
        let nf = ApiError::not_found("missing");
        assert_eq!(nf.status, StatusCode::NOT_FOUND);
        assert_eq!(nf.message, "missing");

        let bad = ApiError::bad_request("bad");
        assert_eq!(bad.status, StatusCode::BAD_REQUEST);

        let forbidden = ApiError::forbidden("no");
        assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn store_errors_map_onto_the_taxonomy() {
        let nf: ApiError = StoreError::NotFound { resource: "order" }.into();
        assert_eq!(nf.status, StatusCode::NOT_FOUND);

        let denied: ApiError = StoreError::PermissionDenied {
            user_id: Uuid::new_v4(),
            resource: "order",
        }
        .into();
        assert_eq!(denied.status, StatusCode::FORBIDDEN);
        // The requesting user's id must not leak into the body.
        assert_eq!(denied.message, "You do not have access to this order");

        let invalid: ApiError = StoreError::Invalid("bad input".into()).into();
        assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn auth_errors_keep_their_status() {
        let unauthorized: ApiError = AuthError::MissingAuthHeader.into();
        assert_eq!(unauthorized.status, StatusCode::UNAUTHORIZED);

        let not_found: ApiError = AuthError::UnknownUser.into();
        assert_eq!(not_found.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn into_response_returns_json_body() {
        let response = ApiError::bad_request("bad data").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body_bytes.to_vec()).unwrap();
        assert_eq!(body, r#"{"error":"bad data"}"#);
    }
}
