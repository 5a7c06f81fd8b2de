//! Product repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{CatalogProduct, NewProduct, ProductFilter};
use crate::shared::AppResult;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Batch catalog lookup for order validation. Callers pass a deduplicated
    /// id set; ids without a matching row are simply absent from the result,
    /// and the validator detects the shortfall.
    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<CatalogProduct>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<CatalogProduct>>;

    /// Filtered listing; returns the page and the total row count.
    async fn find_all(
        &self,
        filter: &ProductFilter,
        limit: u64,
        offset: u64,
    ) -> AppResult<(Vec<CatalogProduct>, u64)>;

    async fn create(&self, product: NewProduct) -> AppResult<CatalogProduct>;

    /// Guarded stock adjustment: applies `delta` only if the resulting stock
    /// stays non-negative, checked and applied atomically by the storage
    /// layer. Returns `false` when the guard rejected the change (or the
    /// product does not exist).
    async fn adjust_stock(&self, id: Uuid, delta: i32) -> AppResult<bool>;
}
