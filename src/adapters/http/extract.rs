//! Request extractors that fail with the standard error envelope.

use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::domain::foundation::{DomainError, ErrorCode};

/// `Json<T>` whose rejection is a 400 in the API's envelope.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(ApiError(
                DomainError::new(ErrorCode::ValidationFailed, "Invalid request body")
                    .with_detail("reason", rejection.body_text()),
            )),
        }
    }
}

/// Parses a path segment as an ID, mapping garbage to the given error.
pub fn path_id<T: std::str::FromStr>(
    raw: &str,
    not_found: impl FnOnce() -> DomainError,
) -> Result<T, ApiError> {
    raw.parse().map_err(|_| ApiError(not_found()))
}
