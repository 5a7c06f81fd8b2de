use thiserror::Error;
use uuid::Uuid;

/// Business-rule violations. Each variant carries enough detail to name the
/// offending product or line to the caller.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Product not found: {0}")]
    ProductNotFound(Uuid),

    #[error("Order mixes products from more than one merchant (product {product_id})")]
    CrossMerchantOrder { product_id: Uuid },

    /// Raised both on a stale-read shortfall during validation and on a
    /// race-lost guarded decrement during commit; the commit-stage case has
    /// already been rolled back in full when this surfaces.
    #[error("Insufficient stock for product: {name}")]
    InsufficientStock { product_id: Uuid, name: String },

    #[error("Not found: {entity} with id={id}")]
    NotFound { entity: &'static str, id: String },
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfraError),
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Infra(InfraError::Database(err))
    }
}

/// Result type for pure domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Result type for operations that may also fail on infrastructure
pub type AppResult<T> = Result<T, AppError>;
