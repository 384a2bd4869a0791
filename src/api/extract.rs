//! Request extractors that report failures through [`ApiError`].
//!
//! Wrapping the axum extractors here keeps rejection-to-error mapping in
//! one place: a body that fails to parse becomes a malformed-body error,
//! a path or query parameter that fails type conversion becomes a
//! type-mismatch error. In both cases the status the inner extractor
//! already selected is kept.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::api::errors::ApiError;

/// JSON body extractor whose rejection is a malformed-body [`ApiError`].
pub struct Json<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::MalformedBody {
                status: rejection.status(),
                detail: rejection.body_text(),
            }),
        }
    }
}

impl<T> axum::response::IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> axum::response::Response {
        axum::Json(self.0).into_response()
    }
}

/// Path extractor whose rejection is a type-mismatch [`ApiError`].
pub struct Path<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Path::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::TypeMismatch {
                status: rejection.status(),
                detail: rejection.body_text(),
            }),
        }
    }
}

/// Query-string extractor whose rejection is a type-mismatch [`ApiError`].
pub struct Query<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Query::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::TypeMismatch {
                status: rejection.status(),
                detail: rejection.body_text(),
            }),
        }
    }
}
