//! Order DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;
use uuid::Uuid;

use crate::application::orders::RequestedLine;
use crate::domain::order::{Order, OrderLine, OrderSummary, PaymentMethod};

/// Payment method accepted on order creation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodDto {
    CreditCard,
    Pix,
    Cash,
}

impl From<PaymentMethodDto> for PaymentMethod {
    fn from(dto: PaymentMethodDto) -> Self {
        match dto {
            PaymentMethodDto::CreditCard => Self::CreditCard,
            PaymentMethodDto::Pix => Self::Pix,
            PaymentMethodDto::Cash => Self::Cash,
        }
    }
}

/// One (product, quantity) pair in the cart payload
#[derive(Debug, Serialize, Deserialize, validator::Validate, ToSchema)]
pub struct OrderItemRequest {
    pub product_id: Uuid,
    #[validate(range(min = 1, message = "quantity must be positive"))]
    pub quantity: i32,
}

#[derive(Debug, Deserialize, validator::Validate, ToSchema)]
pub struct CreateOrderRequest {
    pub merchant_id: Uuid,
    #[validate(
        length(min = 1, message = "order must contain at least one item"),
        nested
    )]
    pub items: Vec<OrderItemRequest>,
    pub payment_method: PaymentMethodDto,
    pub delivery_address_id: Option<Uuid>,
    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

impl CreateOrderRequest {
    pub fn items_as_lines(&self) -> Vec<RequestedLine> {
        self.items
            .iter()
            .map(|item| RequestedLine {
                product_id: item.product_id,
                quantity: item.quantity,
            })
            .collect()
    }
}

/// One committed order line with its price snapshot
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderLineDto {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub unit_price: Decimal,
}

impl From<OrderLine> for OrderLineDto {
    fn from(line: OrderLine) -> Self {
        Self {
            id: line.id,
            product_id: line.product_id,
            quantity: line.quantity,
            unit_price: line.unit_price,
        }
    }
}

/// Committed order header, optionally with its lines
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderDto {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub merchant_id: Uuid,
    pub status: String,
    pub total: Decimal,
    pub payment_method: String,
    pub payment_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderLineDto>>,
}

impl OrderDto {
    pub fn from_domain(order: Order) -> Self {
        Self {
            id: order.id,
            customer_id: order.customer_id,
            merchant_id: order.merchant_id,
            status: order.status.as_str().to_string(),
            total: order.total,
            payment_method: order.payment_method.as_str().to_string(),
            payment_status: order.payment_status.as_str().to_string(),
            delivery_address_id: order.delivery_address_id,
            notes: order.notes,
            created_at: order.created_at,
            updated_at: order.updated_at,
            items: None,
        }
    }

    pub fn with_lines(order: Order, lines: Vec<OrderLine>) -> Self {
        let mut dto = Self::from_domain(order);
        dto.items = Some(lines.into_iter().map(Into::into).collect());
        dto
    }
}

/// Order history row decorated with the counterparty name
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderSummaryDto {
    pub id: Uuid,
    pub status: String,
    pub total: Decimal,
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterparty_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<OrderSummary> for OrderSummaryDto {
    fn from(summary: OrderSummary) -> Self {
        Self {
            id: summary.id,
            status: summary.status.as_str().to_string(),
            total: summary.total,
            payment_method: summary.payment_method.as_str().to_string(),
            counterparty_name: summary.counterparty_name,
            created_at: summary.created_at,
        }
    }
}

/// Listing parameters: a plain limit, newest first
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct OrderListParams {
    #[serde(default = "default_list_limit")]
    pub limit: u32,
}

fn default_list_limit() -> u32 {
    50
}
