//! Caller identity extractor
//!
//! Authentication and authorization live in an upstream gateway; it resolves
//! the principal and forwards the user id as the `X-User-Id` header. This
//! service trusts that value as already authenticated.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use super::ApiResponse;

pub const CALLER_HEADER: &str = "x-user-id";

/// The authenticated caller's user id
#[derive(Debug, Clone, Copy)]
pub struct CallerId(pub Uuid);

impl<S> FromRequestParts<S> for CallerId
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ApiResponse<()>>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(CALLER_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ApiResponse::error("Missing X-User-Id header")),
                )
            })?;

        let id = raw.parse::<Uuid>().map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::error("Invalid X-User-Id header")),
            )
        })?;

        Ok(CallerId(id))
    }
}
