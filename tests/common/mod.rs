//! Shared test fixtures: in-memory database and seed helpers.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, Set};
use sea_orm_migration::MigratorTrait;
use uuid::Uuid;

use bairro_market::domain::RepositoryProvider;
use bairro_market::infrastructure::database::entities::{merchant_profile, product, user};
use bairro_market::infrastructure::database::migrator::Migrator;
use bairro_market::SeaOrmRepositoryProvider;

/// Fresh in-memory SQLite with the full schema applied. A single pooled
/// connection keeps every handle on the same database.
pub async fn setup_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_string());
    opts.max_connections(1);
    let db = Database::connect(opts).await.expect("connect in-memory db");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

pub fn provider(db: &DatabaseConnection) -> Arc<dyn RepositoryProvider> {
    Arc::new(SeaOrmRepositoryProvider::new(db.clone()))
}

pub async fn seed_customer(db: &DatabaseConnection, name: &str) -> Uuid {
    seed_user(db, name, "customer").await
}

async fn seed_user(db: &DatabaseConnection, name: &str, user_type: &str) -> Uuid {
    let id = Uuid::new_v4();
    user::ActiveModel {
        id: Set(id),
        email: Set(format!("{}@example.com", id)),
        name: Set(name.to_string()),
        user_type: Set(user_type.to_string()),
        created_at: Set(Utc::now()),
    }
    .insert(db)
    .await
    .expect("insert user");
    id
}

/// Merchant user plus their profile row; returns the merchant id.
pub async fn seed_merchant(db: &DatabaseConnection, business_name: &str) -> Uuid {
    let id = seed_user(db, business_name, "merchant").await;
    merchant_profile::ActiveModel {
        user_id: Set(id),
        business_name: Set(business_name.to_string()),
    }
    .insert(db)
    .await
    .expect("insert merchant profile");
    id
}

pub async fn seed_product(
    db: &DatabaseConnection,
    merchant_id: Uuid,
    name: &str,
    price_cents: i64,
    stock: i32,
) -> Uuid {
    let id = Uuid::new_v4();
    product::ActiveModel {
        id: Set(id),
        merchant_id: Set(merchant_id),
        name: Set(name.to_string()),
        description: Set(None),
        price_cents: Set(price_cents),
        stock_quantity: Set(stock),
        is_available: Set(true),
        created_at: Set(Utc::now()),
    }
    .insert(db)
    .await
    .expect("insert product");
    id
}

pub async fn stock_of(db: &DatabaseConnection, id: Uuid) -> i32 {
    product::Entity::find_by_id(id)
        .one(db)
        .await
        .expect("query product")
        .expect("product exists")
        .stock_quantity
}
