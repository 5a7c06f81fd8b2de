//! Product entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Owning merchant (merchant_profiles.user_id)
    pub merchant_id: Uuid,

    pub name: String,

    #[sea_orm(nullable)]
    pub description: Option<String>,

    /// Unit price in cents
    pub price_cents: i64,

    /// Units on hand; the guarded update keeps this >= 0 under concurrency
    pub stock_quantity: i32,

    pub is_available: bool,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::merchant_profile::Entity",
        from = "Column::MerchantId",
        to = "super::merchant_profile::Column::UserId"
    )]
    Merchant,

    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItems,
}

impl Related<super::merchant_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Merchant.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
