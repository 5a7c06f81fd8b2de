//! Order placement and query service

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use super::validate::{self, RequestedLine};
use crate::domain::order::{NewOrder, Order, OrderLine, OrderRole, OrderSummary, PaymentMethod};
use crate::domain::RepositoryProvider;
use crate::shared::{AppError, AppResult, DomainError};

/// A cart payload as received from the HTTP layer, with the caller identity
/// already resolved by the upstream principal-resolution step.
#[derive(Debug, Clone)]
pub struct PlaceOrder {
    pub merchant_id: Uuid,
    pub items: Vec<RequestedLine>,
    pub payment_method: PaymentMethod,
    pub delivery_address_id: Option<Uuid>,
    pub notes: Option<String>,
}

pub struct OrderService {
    repos: Arc<dyn RepositoryProvider>,
}

impl OrderService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Catalog read, invariant validation, then the atomic commit. Any
    /// validation failure short-circuits before a single row is written.
    pub async fn place_order(&self, customer_id: Uuid, request: PlaceOrder) -> AppResult<Order> {
        let product_ids = validate::check_request_shape(&request.items)?;

        let catalog = self.repos.products().find_by_ids(&product_ids).await?;
        let validated = validate::validate_order(request.merchant_id, &request.items, &catalog)?;

        let result = self
            .repos
            .orders()
            .place(
                NewOrder {
                    customer_id,
                    merchant_id: request.merchant_id,
                    total: validated.total,
                    payment_method: request.payment_method,
                    delivery_address_id: request.delivery_address_id,
                    notes: request.notes,
                },
                &validated.lines,
            )
            .await;

        match result {
            Ok(order) => {
                info!(
                    order_id = %order.id,
                    customer_id = %customer_id,
                    merchant_id = %order.merchant_id,
                    total = %order.total,
                    lines = validated.lines.len(),
                    "order placed"
                );
                Ok(order)
            }
            Err(AppError::Domain(err @ DomainError::InsufficientStock { .. })) => {
                warn!(customer_id = %customer_id, error = %err, "order lost stock race at commit");
                Err(err.into())
            }
            Err(err) => Err(err),
        }
    }

    pub async fn list_orders(
        &self,
        user_id: Uuid,
        role: OrderRole,
        limit: u64,
    ) -> AppResult<Vec<OrderSummary>> {
        self.repos.orders().list_for_user(user_id, role, limit).await
    }

    /// Order detail with lines, visible only to its customer or merchant.
    /// A non-participant gets the same answer as a missing order.
    pub async fn get_order(&self, caller: Uuid, id: Uuid) -> AppResult<(Order, Vec<OrderLine>)> {
        match self.repos.orders().find_with_lines(id).await? {
            Some((order, lines))
                if order.customer_id == caller || order.merchant_id == caller =>
            {
                Ok((order, lines))
            }
            _ => Err(DomainError::NotFound {
                entity: "Order",
                id: id.to_string(),
            }
            .into()),
        }
    }
}
