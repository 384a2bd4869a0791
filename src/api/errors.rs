use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::repositories::RepositoryError;

/// Fixed label for a body that could not be parsed as JSON.
pub const WRONG_JSON_FORMAT: &str = "wrong JSON format";

/// Fixed label for a body that parsed but failed validation.
pub const INVALID_ARGUMENT: &str = "invalid method argument";

/// Fixed label for a path/query parameter that failed type conversion.
pub const TYPE_MISMATCH: &str = "parameter could not be converted to required type";

/// Fixed label for a missing record.
pub const NOT_FOUND: &str = "not found";

/// Structured error payload returned to HTTP clients.
///
/// Created fresh per failed request and discarded after serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDto {
    pub error: String,
    pub error_description: String,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            error_description: description.into(),
        }
    }
}

/// The single error type returned by every handler.
///
/// Centralizes failure-to-response mapping so endpoints carry no
/// repetitive error-translation code. Every kind produces exactly one
/// log line and one response; clients never see a raw backtrace.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be parsed into the expected structure.
    /// Carries the status the rejecting extractor already selected.
    #[error("malformed request body: {detail}")]
    MalformedBody { status: StatusCode, detail: String },

    /// The body parsed but violated field constraints.
    #[error("request failed validation")]
    Validation(ValidationErrors),

    /// A path or query parameter could not be converted to its declared
    /// type. Carries the status supplied by the rejecting extractor.
    #[error("parameter type mismatch: {detail}")]
    TypeMismatch { status: StatusCode, detail: String },

    /// An identifier-keyed lookup found no row.
    #[error("{detail}")]
    NotFound { detail: String },

    /// Anything else. Handed to the default conversion (bare 500) after
    /// being logged in full.
    #[error("internal error: {0}")]
    Internal(#[from] RepositoryError),
}

impl ApiError {
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound {
            detail: detail.into(),
        }
    }

    /// Status code this error maps to on the wire.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedBody { status, .. } => *status,
            Self::Validation(errors) if errors.is_empty() => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::TypeMismatch { status, .. } => *status,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Payload this error maps to, or `None` for the bare responses.
    pub fn body(&self) -> Option<ErrorDto> {
        match self {
            Self::MalformedBody { detail, .. } => {
                Some(ErrorDto::new(WRONG_JSON_FORMAT, detail.clone()))
            }
            // A validation error with zero recorded violations is a
            // degenerate state; answer with a bare 500 instead of an
            // empty violation list.
            Self::Validation(errors) if errors.is_empty() => None,
            Self::Validation(errors) => {
                Some(ErrorDto::new(INVALID_ARGUMENT, errors.to_string()))
            }
            Self::TypeMismatch { detail, .. } => {
                Some(ErrorDto::new(TYPE_MISMATCH, detail.clone()))
            }
            Self::NotFound { detail } => Some(ErrorDto::new(NOT_FOUND, detail.clone())),
            Self::Internal(_) => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // One log line per failed request, emitted before the response
        // leaves the process.
        match &self {
            Self::MalformedBody { detail, .. } => {
                tracing::error!("request body could not be parsed: {detail}");
            }
            Self::Validation(errors) if errors.is_empty() => {
                tracing::error!("validation failed without recorded violations");
            }
            Self::Validation(errors) => {
                tracing::error!("request failed validation: {errors}");
            }
            Self::TypeMismatch { detail, .. } => {
                tracing::error!("request parameter could not be converted: {detail}");
            }
            Self::NotFound { detail } => {
                tracing::warn!("{detail}");
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "unhandled error while processing request");
            }
        }

        let status = self.status();
        match self.body() {
            Some(dto) => (status, Json(dto)).into_response(),
            None => status.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    fn one_violation() -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.add("address", ValidationError::new("length"));
        errors
    }

    #[test]
    fn malformed_body_keeps_extractor_status_and_label() {
        let err = ApiError::MalformedBody {
            status: StatusCode::BAD_REQUEST,
            detail: "expected value at line 1 column 2".to_string(),
        };
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        let dto = err.body().unwrap();
        assert_eq!(dto.error, WRONG_JSON_FORMAT);
        assert_eq!(dto.error_description, "expected value at line 1 column 2");
    }

    #[test]
    fn validation_with_violations_is_bad_request() {
        let err = ApiError::Validation(one_violation());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body().unwrap().error, INVALID_ARGUMENT);
    }

    #[test]
    fn validation_without_violations_is_bare_500() {
        let err = ApiError::Validation(ValidationErrors::new());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.body().is_none());
    }

    #[test]
    fn type_mismatch_uses_supplied_status() {
        let err = ApiError::TypeMismatch {
            status: StatusCode::BAD_REQUEST,
            detail: "Cannot parse `abc` to a `i64`".to_string(),
        };
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body().unwrap().error, TYPE_MISMATCH);
    }

    #[test]
    fn error_dto_serializes_with_camel_case_description_key() {
        let dto = ErrorDto::new(WRONG_JSON_FORMAT, "detail");
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["error"], WRONG_JSON_FORMAT);
        assert_eq!(value["errorDescription"], "detail");
    }

    #[test]
    fn internal_errors_carry_no_body() {
        let err = ApiError::Internal(RepositoryError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.body().is_none());
    }
}
