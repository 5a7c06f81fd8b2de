//! Order repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{NewOrder, Order, OrderLine, OrderRole, OrderSummary, PricedLine};
use crate::shared::AppResult;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Atomically insert the order header, all its lines, and apply one
    /// guarded stock decrement per line, in a single storage transaction.
    ///
    /// If any decrement affects zero rows (a concurrent order took the
    /// stock first), the whole unit of work is rolled back and
    /// `DomainError::InsufficientStock` is returned; the caller never sees a
    /// partially committed order.
    async fn place(&self, order: NewOrder, lines: &[PricedLine]) -> AppResult<Order>;

    async fn find_with_lines(&self, id: Uuid) -> AppResult<Option<(Order, Vec<OrderLine>)>>;

    /// Orders where `user_id` matches the given side, most recent first,
    /// decorated with the counterparty display name.
    async fn list_for_user(
        &self,
        user_id: Uuid,
        role: OrderRole,
        limit: u64,
    ) -> AppResult<Vec<OrderSummary>>;
}
