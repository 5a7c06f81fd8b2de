//! Order header entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub customer_id: Uuid,

    /// Single merchant per order (merchant_profiles.user_id)
    pub merchant_id: Uuid,

    /// pending, confirmed, preparing, delivered, cancelled
    pub status: String,

    /// Sum of line subtotals in cents, rounded at order time
    pub total_cents: i64,

    /// credit_card, pix, cash
    pub payment_method: String,

    /// pending, paid, failed, refunded; recorded only, never processed here
    pub payment_status: String,

    /// Opaque reference into the external address book
    #[sea_orm(nullable)]
    pub delivery_address_id: Option<Uuid>,

    #[sea_orm(nullable)]
    pub notes: Option<String>,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CustomerId",
        to = "super::user::Column::Id"
    )]
    Customer,

    #[sea_orm(
        belongs_to = "super::merchant_profile::Entity",
        from = "Column::MerchantId",
        to = "super::merchant_profile::Column::UserId"
    )]
    Merchant,

    #[sea_orm(has_many = "super::order_item::Entity")]
    Items,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::merchant_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Merchant.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
