//! Order domain entities

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Order lifecycle status.
///
/// This engine only ever creates `Pending`; the later transitions belong to
/// fulfillment collaborators and are modeled here for read fidelity only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment method recorded with the order. Payment capture is out of scope;
/// the value is validated against the allowed set and stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    CreditCard,
    Pix,
    Cash,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "credit_card",
            Self::Pix => "pix",
            Self::Cash => "cash",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment settlement state; this engine only ever records `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }
}

/// Which side of an order an identity is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderRole {
    Customer,
    Merchant,
}

/// Committed order header
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub merchant_id: Uuid,
    pub status: OrderStatus,
    /// Sum of `quantity x unit_price` over the lines, rounded to 2 decimals
    pub total: Decimal,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    /// Opaque reference into the external address book; not validated here
    pub delivery_address_id: Option<Uuid>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One line of a committed order
#[derive(Debug, Clone)]
pub struct OrderLine {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    /// Unit price snapshotted at order time; immutable thereafter even if the
    /// catalog price changes
    pub unit_price: Decimal,
}

/// Header fields for a new order; id and timestamps are assigned at commit
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_id: Uuid,
    pub merchant_id: Uuid,
    pub total: Decimal,
    pub payment_method: PaymentMethod,
    pub delivery_address_id: Option<Uuid>,
    pub notes: Option<String>,
}

/// A validated line ready for commit: the quantity plus the price snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct PricedLine {
    pub product_id: Uuid,
    pub quantity: i32,
    pub unit_price: Decimal,
}

/// Read-side listing row decorated with the counterparty display name
#[derive(Debug, Clone)]
pub struct OrderSummary {
    pub id: Uuid,
    pub status: OrderStatus,
    pub total: Decimal,
    pub payment_method: PaymentMethod,
    /// Merchant business name for the customer view, customer name for the
    /// merchant view; absent if the profile row is gone
    pub counterparty_name: Option<String>,
    pub created_at: DateTime<Utc>,
}
