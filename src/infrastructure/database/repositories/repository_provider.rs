//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::order::OrderRepository;
use crate::domain::product::ProductRepository;
use crate::domain::repositories::RepositoryProvider;

use super::order_repository::SeaOrmOrderRepository;
use super::product_repository::SeaOrmProductRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
pub struct SeaOrmRepositoryProvider {
    products: SeaOrmProductRepository,
    orders: SeaOrmOrderRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            products: SeaOrmProductRepository::new(db.clone()),
            orders: SeaOrmOrderRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn products(&self) -> &dyn ProductRepository {
        &self.products
    }

    fn orders(&self) -> &dyn OrderRepository {
        &self.orders
    }
}
