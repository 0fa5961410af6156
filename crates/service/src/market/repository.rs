use async_trait::async_trait;
use models::market::{self, NewAd};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::errors::ServiceError;

/// Persistence for ads. Each call is one unit of work: it either commits
/// completely or leaves the store untouched.
#[async_trait]
pub trait MarketRepository: Send + Sync {
    async fn create(&self, ad: NewAd) -> Result<market::Model, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<market::Model>, ServiceError>;
    /// Returns `NotFound` when no row has this id.
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmMarketRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmMarketRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

// 未提交的事务在 drop 时自动回滚，下面每个 `?` 提前返回都不会落库
#[async_trait]
impl MarketRepository for SeaOrmMarketRepository {
    async fn create(&self, ad: NewAd) -> Result<market::Model, ServiceError> {
        let txn = self.db.begin().await?;
        let created = market::insert(&txn, ad).await?;
        txn.commit().await?;
        Ok(created)
    }

    async fn get(&self, id: i32) -> Result<Option<market::Model>, ServiceError> {
        let txn = self.db.begin().await?;
        let found = market::find(&txn, id).await?;
        txn.commit().await?;
        Ok(found)
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;
        if market::find(&txn, id).await?.is_none() {
            return Err(ServiceError::not_found("item"));
        }
        market::delete(&txn, id).await?;
        txn.commit().await?;
        Ok(())
    }
}
