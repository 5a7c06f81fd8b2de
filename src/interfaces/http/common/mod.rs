//! Common API plumbing: response envelope, pagination, extractors, error
//! mapping

pub mod caller;
pub mod validated_json;

pub use caller::CallerId;
pub use validated_json::ValidatedJson;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::shared::{AppError, DomainError};

/// Standard API response wrapper.
///
/// All REST endpoints return data in this envelope.
/// On success: `{"success": true, "data": {...}}`,
/// on error: `{"success": false, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` if the request succeeded
    pub success: bool,
    /// Payload; `null` on error
    pub data: Option<T>,
    /// Error description; `null` on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Pagination parameters for list requests
#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct PaginationParams {
    /// Page number (1-based). Default: 1
    #[serde(default = "default_page")]
    pub page: u32,
    /// Items per page (1-100). Default: 50
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Largest page size a client may request
pub const MAX_PAGE_SIZE: u32 = 100;

impl PaginationParams {
    /// Requested page size clamped to the documented 1-100 range.
    pub fn limit(&self) -> u32 {
        self.limit.clamp(1, MAX_PAGE_SIZE)
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit())
    }
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    50
}

/// Paginated response: one page of data plus page metadata
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    /// Total item count across all pages
    pub total: u64,
    /// Current page (1-based)
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total.div_ceil(u64::from(limit)) as u32
        };
        Self {
            items,
            total,
            page,
            limit,
            total_pages,
        }
    }
}

/// Maps the error taxonomy onto HTTP statuses: invalid/cross-merchant
/// requests are 400, missing resources 404, lost stock races 409, and
/// infrastructure failures 500.
pub fn error_response(err: AppError) -> (StatusCode, Json<ApiResponse<()>>) {
    let status = match &err {
        AppError::Domain(DomainError::InvalidRequest(_))
        | AppError::Domain(DomainError::CrossMerchantOrder { .. }) => StatusCode::BAD_REQUEST,
        AppError::Domain(DomainError::ProductNotFound(_))
        | AppError::Domain(DomainError::NotFound { .. }) => StatusCode::NOT_FOUND,
        AppError::Domain(DomainError::InsufficientStock { .. }) => StatusCode::CONFLICT,
        AppError::Infra(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!(error = %err, "request failed");
    }

    (status, Json(ApiResponse::error(err.to_string())))
}
