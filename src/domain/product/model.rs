//! Product domain entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Product as the order engine sees it: authoritative price, stock and owner.
///
/// Mutated by catalog-management collaborators; the order engine itself only
/// ever decrements `stock_quantity`, and only through the guarded update.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogProduct {
    pub id: Uuid,
    /// Owning merchant (merchant profile user id)
    pub merchant_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Unit price, two decimal places
    pub price: Decimal,
    /// Units on hand; never negative
    pub stock_quantity: i32,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a product. The id and timestamp are assigned on insert.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub merchant_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock_quantity: i32,
    pub is_available: bool,
}

/// Filters for catalog listing
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub merchant_id: Option<Uuid>,
    pub is_available: Option<bool>,
}
