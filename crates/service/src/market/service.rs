use std::sync::Arc;

use models::market::{self, validate_new_ad};
use serde_json::Value;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::market::repository::MarketRepository;

/// Application service for the ad resource: validation first, then one
/// repository call per operation.
#[derive(Clone)]
pub struct MarketService {
    repo: Arc<dyn MarketRepository>,
}

impl MarketService {
    pub fn new(repo: Arc<dyn MarketRepository>) -> Self { Self { repo } }

    /// Validate an untyped payload and persist it.
    #[instrument(skip_all)]
    pub async fn create(&self, payload: &Value) -> Result<market::Model, ServiceError> {
        let ad = validate_new_ad(payload)?;
        let created = self.repo.create(ad).await?;
        info!(id = created.id, owner = %created.owner, "ad created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<market::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("item"))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete(id).await?;
        info!(id, "ad deleted");
        Ok(())
    }
}
