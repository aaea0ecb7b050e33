use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;

pub const INVALID_JSON: &str = "Invalid JSON body";

/// JSON body that does not insist on a `Content-Type` header. Anything that
/// fails to parse into `T` is a 400 with the usual `{error}` body.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::bad_request(INVALID_JSON))?;
        let value = serde_json::from_slice::<T>(&bytes).map_err(|e| {
            debug!(error = %e, "rejecting request body");
            ApiError::bad_request(INVALID_JSON)
        })?;
        Ok(JsonBody(value))
    }
}

/// Numeric `:id` path segment.
#[derive(Debug)]
pub struct IdPath(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::bad_request("Invalid id"))?;
        Ok(IdPath(id))
    }
}

/// Required text field: present and not blank.
pub fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
