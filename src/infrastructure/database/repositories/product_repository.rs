//! SeaORM implementation of ProductRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::{cents_to_decimal, decimal_to_cents};
use crate::domain::product::{CatalogProduct, NewProduct, ProductFilter, ProductRepository};
use crate::infrastructure::database::entities::product;
use crate::shared::{AppResult, InfraError};

pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn model_to_domain(p: product::Model) -> CatalogProduct {
    CatalogProduct {
        id: p.id,
        merchant_id: p.merchant_id,
        name: p.name,
        description: p.description,
        price: cents_to_decimal(p.price_cents),
        stock_quantity: p.stock_quantity,
        is_available: p.is_available,
        created_at: p.created_at,
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<CatalogProduct>> {
        let models = product::Entity::find()
            .filter(product::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(InfraError::Database)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<CatalogProduct>> {
        let model = product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(InfraError::Database)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(
        &self,
        filter: &ProductFilter,
        limit: u64,
        offset: u64,
    ) -> AppResult<(Vec<CatalogProduct>, u64)> {
        let mut query = product::Entity::find();
        if let Some(merchant_id) = filter.merchant_id {
            query = query.filter(product::Column::MerchantId.eq(merchant_id));
        }
        if let Some(is_available) = filter.is_available {
            query = query.filter(product::Column::IsAvailable.eq(is_available));
        }

        let total = query
            .clone()
            .count(&self.db)
            .await
            .map_err(InfraError::Database)?;

        let models = query
            .order_by_desc(product::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(InfraError::Database)?;

        Ok((models.into_iter().map(model_to_domain).collect(), total))
    }

    async fn create(&self, new: NewProduct) -> AppResult<CatalogProduct> {
        let model = product::ActiveModel {
            id: Set(Uuid::new_v4()),
            merchant_id: Set(new.merchant_id),
            name: Set(new.name),
            description: Set(new.description),
            price_cents: Set(decimal_to_cents(new.price)?),
            stock_quantity: Set(new.stock_quantity),
            is_available: Set(new.is_available),
            created_at: Set(Utc::now()),
        };
        let inserted = model.insert(&self.db).await.map_err(InfraError::Database)?;
        Ok(model_to_domain(inserted))
    }

    async fn adjust_stock(&self, id: Uuid, delta: i32) -> AppResult<bool> {
        // Guarded update: a negative delta only applies while enough stock
        // remains, checked and applied in one statement.
        let mut update = product::Entity::update_many()
            .col_expr(
                product::Column::StockQuantity,
                Expr::col(product::Column::StockQuantity).add(delta),
            )
            .filter(product::Column::Id.eq(id));
        if delta < 0 {
            update = update.filter(product::Column::StockQuantity.gte(-delta));
        }

        let result = update.exec(&self.db).await.map_err(InfraError::Database)?;
        Ok(result.rows_affected > 0)
    }
}
