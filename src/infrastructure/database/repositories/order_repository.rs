//! SeaORM implementation of OrderRepository
//!
//! `place` is the order committer: one transaction spanning the header
//! insert, the line inserts and the guarded stock decrements.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use tracing::debug;
use uuid::Uuid;

use super::{cents_to_decimal, decimal_to_cents};
use crate::domain::order::{
    NewOrder, Order, OrderLine, OrderRepository, OrderRole, OrderStatus, OrderSummary,
    PaymentMethod, PaymentStatus, PricedLine,
};
use crate::infrastructure::database::entities::{merchant_profile, order, order_item, product, user};
use crate::shared::{AppResult, DomainError, InfraError};

pub struct SeaOrmOrderRepository {
    db: DatabaseConnection,
}

impl SeaOrmOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn string_to_status(s: &str) -> OrderStatus {
    match s {
        "confirmed" => OrderStatus::Confirmed,
        "preparing" => OrderStatus::Preparing,
        "delivered" => OrderStatus::Delivered,
        "cancelled" => OrderStatus::Cancelled,
        _ => OrderStatus::Pending,
    }
}

fn string_to_payment_method(s: &str) -> PaymentMethod {
    match s {
        "credit_card" => PaymentMethod::CreditCard,
        "pix" => PaymentMethod::Pix,
        _ => PaymentMethod::Cash,
    }
}

fn string_to_payment_status(s: &str) -> PaymentStatus {
    match s {
        "paid" => PaymentStatus::Paid,
        "failed" => PaymentStatus::Failed,
        "refunded" => PaymentStatus::Refunded,
        _ => PaymentStatus::Pending,
    }
}

fn model_to_domain(o: order::Model) -> Order {
    Order {
        id: o.id,
        customer_id: o.customer_id,
        merchant_id: o.merchant_id,
        status: string_to_status(&o.status),
        total: cents_to_decimal(o.total_cents),
        payment_method: string_to_payment_method(&o.payment_method),
        payment_status: string_to_payment_status(&o.payment_status),
        delivery_address_id: o.delivery_address_id,
        notes: o.notes,
        created_at: o.created_at,
        updated_at: o.updated_at,
    }
}

fn line_to_domain(i: order_item::Model) -> OrderLine {
    OrderLine {
        id: i.id,
        order_id: i.order_id,
        product_id: i.product_id,
        quantity: i.quantity,
        unit_price: cents_to_decimal(i.unit_price_cents),
    }
}

// ── OrderRepository impl ────────────────────────────────────────

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn place(&self, new: NewOrder, lines: &[PricedLine]) -> AppResult<Order> {
        // Scale every amount up front; a non-storable total fails the whole
        // order before any row is written.
        let total_cents = decimal_to_cents(new.total)?;
        let line_cents = lines
            .iter()
            .map(|line| decimal_to_cents(line.unit_price))
            .collect::<AppResult<Vec<_>>>()?;

        let txn = self.db.begin().await.map_err(InfraError::Database)?;

        let now = Utc::now();
        let order_id = Uuid::new_v4();
        debug!(order_id = %order_id, lines = lines.len(), "committing order");

        let header = order::ActiveModel {
            id: Set(order_id),
            customer_id: Set(new.customer_id),
            merchant_id: Set(new.merchant_id),
            status: Set(OrderStatus::Pending.as_str().to_string()),
            total_cents: Set(total_cents),
            payment_method: Set(new.payment_method.as_str().to_string()),
            payment_status: Set(PaymentStatus::Pending.as_str().to_string()),
            delivery_address_id: Set(new.delivery_address_id),
            notes: Set(new.notes),
            created_at: Set(now),
            updated_at: Set(now),
        };
        // A DbErr on any step drops the transaction uncommitted.
        let inserted = header.insert(&txn).await.map_err(InfraError::Database)?;

        for (line, unit_price_cents) in lines.iter().zip(line_cents) {
            order_item::ActiveModel {
                id: Set(Uuid::new_v4()),
                order_id: Set(order_id),
                product_id: Set(line.product_id),
                quantity: Set(line.quantity),
                unit_price_cents: Set(unit_price_cents),
            }
            .insert(&txn)
            .await
            .map_err(InfraError::Database)?;
        }

        for line in lines {
            // Guarded decrement: only applies while stock covers the line, so
            // a concurrent order racing for the same units cannot drive the
            // count negative. Zero affected rows means this order lost.
            let result = product::Entity::update_many()
                .col_expr(
                    product::Column::StockQuantity,
                    Expr::col(product::Column::StockQuantity).sub(line.quantity),
                )
                .filter(product::Column::Id.eq(line.product_id))
                .filter(product::Column::StockQuantity.gte(line.quantity))
                .exec(&txn)
                .await
                .map_err(InfraError::Database)?;

            if result.rows_affected == 0 {
                let name = product::Entity::find_by_id(line.product_id)
                    .one(&txn)
                    .await
                    .map_err(InfraError::Database)?
                    .map(|p| p.name)
                    .unwrap_or_default();

                txn.rollback().await.map_err(InfraError::Database)?;
                return Err(DomainError::InsufficientStock {
                    product_id: line.product_id,
                    name,
                }
                .into());
            }
        }

        txn.commit().await.map_err(InfraError::Database)?;
        Ok(model_to_domain(inserted))
    }

    async fn find_with_lines(&self, id: Uuid) -> AppResult<Option<(Order, Vec<OrderLine>)>> {
        let Some(header) = order::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(InfraError::Database)?
        else {
            return Ok(None);
        };

        let items = order_item::Entity::find()
            .filter(order_item::Column::OrderId.eq(id))
            .all(&self.db)
            .await
            .map_err(InfraError::Database)?;

        Ok(Some((
            model_to_domain(header),
            items.into_iter().map(line_to_domain).collect(),
        )))
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
        role: OrderRole,
        limit: u64,
    ) -> AppResult<Vec<OrderSummary>> {
        let summaries = match role {
            OrderRole::Customer => order::Entity::find()
                .filter(order::Column::CustomerId.eq(user_id))
                .find_also_related(merchant_profile::Entity)
                .order_by_desc(order::Column::CreatedAt)
                .limit(limit)
                .all(&self.db)
                .await
                .map_err(InfraError::Database)?
                .into_iter()
                .map(|(o, profile)| to_summary(o, profile.map(|p| p.business_name)))
                .collect(),
            OrderRole::Merchant => order::Entity::find()
                .filter(order::Column::MerchantId.eq(user_id))
                .find_also_related(user::Entity)
                .order_by_desc(order::Column::CreatedAt)
                .limit(limit)
                .all(&self.db)
                .await
                .map_err(InfraError::Database)?
                .into_iter()
                .map(|(o, customer)| to_summary(o, customer.map(|u| u.name)))
                .collect(),
        };
        Ok(summaries)
    }
}

fn to_summary(o: order::Model, counterparty_name: Option<String>) -> OrderSummary {
    OrderSummary {
        id: o.id,
        status: string_to_status(&o.status),
        total: cents_to_decimal(o.total_cents),
        payment_method: string_to_payment_method(&o.payment_method),
        counterparty_name,
        created_at: o.created_at,
    }
}
