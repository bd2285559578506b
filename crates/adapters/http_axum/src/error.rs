//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use casedesk_domain::error::CaseDeskError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Every failure an API endpoint can answer with.
///
/// Domain errors map to a status by kind. Requests axum cannot decode keep
/// the status axum chose for them. Both render as `{"error": ..}`.
#[derive(Debug)]
pub enum ApiError {
    Domain(CaseDeskError),
    Rejected { status: StatusCode, message: String },
}

impl From<CaseDeskError> for ApiError {
    fn from(err: CaseDeskError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = match self {
            Self::Domain(err) => err,
            Self::Rejected { status, message } => {
                tracing::debug!(%status, %message, "request rejected");
                return (status, Json(ErrorBody { error: message })).into_response();
            }
        };
        let (status, message) = match &err {
            CaseDeskError::Validation(err) if err.is_missing_field() => (
                StatusCode::BAD_REQUEST,
                format!("Missing Information: {err}"),
            ),
            CaseDeskError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            CaseDeskError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            CaseDeskError::Template(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            CaseDeskError::Dispatch(err) => {
                tracing::error!(error = %err, "notification dispatch failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "notification could not be dispatched".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
