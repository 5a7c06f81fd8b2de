//! Catalog management service
//!
//! The collaborator-facing side of the product table: creation, listing and
//! the restock/correction path. Stock writes go through the same guarded
//! conditional update the order committer uses; last-writer-wins is not
//! allowed anywhere.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::domain::product::{CatalogProduct, NewProduct, ProductFilter};
use crate::domain::RepositoryProvider;
use crate::shared::{AppResult, DomainError};

/// Largest storable price, matching a decimal(10,2) catalog column
fn max_price() -> Decimal {
    Decimal::new(9_999_999_999, 2)
}

pub struct CatalogService {
    repos: Arc<dyn RepositoryProvider>,
}

impl CatalogService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn create_product(&self, product: NewProduct) -> AppResult<CatalogProduct> {
        if product.name.trim().is_empty() {
            return Err(DomainError::InvalidRequest("product name must not be empty".into()).into());
        }
        if product.price < Decimal::ZERO || product.price > max_price() {
            return Err(DomainError::InvalidRequest(format!(
                "price {} is out of range",
                product.price
            ))
            .into());
        }
        if product.stock_quantity < 0 {
            return Err(
                DomainError::InvalidRequest("stock quantity must not be negative".into()).into(),
            );
        }

        let created = self.repos.products().create(product).await?;
        info!(product_id = %created.id, merchant_id = %created.merchant_id, "product created");
        Ok(created)
    }

    pub async fn get_product(&self, id: Uuid) -> AppResult<CatalogProduct> {
        self.repos
            .products()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::ProductNotFound(id).into())
    }

    pub async fn list_products(
        &self,
        filter: &ProductFilter,
        limit: u64,
        offset: u64,
    ) -> AppResult<(Vec<CatalogProduct>, u64)> {
        self.repos.products().find_all(filter, limit, offset).await
    }

    /// Restock (positive delta) or correction (negative delta). A negative
    /// adjustment may not take stock below zero; the guard decides, not a
    /// read-then-write check.
    pub async fn adjust_stock(&self, id: Uuid, delta: i32) -> AppResult<CatalogProduct> {
        let product = self.get_product(id).await?;
        if delta == 0 {
            return Ok(product);
        }

        let applied = self.repos.products().adjust_stock(id, delta).await?;
        if !applied {
            return Err(DomainError::InsufficientStock {
                product_id: id,
                name: product.name,
            }
            .into());
        }

        info!(product_id = %id, delta, "stock adjusted");
        self.get_product(id).await
    }
}
