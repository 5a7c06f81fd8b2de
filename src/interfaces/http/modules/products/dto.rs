//! Product DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::product::{CatalogProduct, NewProduct};

/// Catalog product as returned to clients
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub id: Uuid,
    pub merchant_id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Decimal,
    pub stock_quantity: i32,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

impl From<CatalogProduct> for ProductDto {
    fn from(p: CatalogProduct) -> Self {
        Self {
            id: p.id,
            merchant_id: p.merchant_id,
            name: p.name,
            description: p.description,
            price: p.price,
            stock_quantity: p.stock_quantity,
            is_available: p.is_available,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Deserialize, validator::Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    /// Unit price, two decimal places
    pub price: Decimal,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub stock_quantity: i32,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

fn default_true() -> bool {
    true
}

impl CreateProductRequest {
    pub fn into_domain(self, merchant_id: Uuid) -> NewProduct {
        NewProduct {
            merchant_id,
            name: self.name,
            description: self.description,
            price: self.price,
            stock_quantity: self.stock_quantity,
            is_available: self.is_available,
        }
    }
}

/// Stock adjustment: positive restock or negative correction. The storage
/// guard refuses adjustments that would take stock below zero.
#[derive(Debug, Deserialize, validator::Validate, ToSchema)]
pub struct AdjustStockRequest {
    #[validate(range(min = -1_000_000, max = 1_000_000))]
    pub delta: i32,
}

/// Catalog listing filters
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct ProductListFilter {
    pub merchant_id: Option<Uuid>,
    pub is_available: Option<bool>,
}
