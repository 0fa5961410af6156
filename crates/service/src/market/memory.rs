use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use models::market::{self, NewAd, OWNER_MAX_CHARS};
use tokio::sync::Mutex;

use super::repository::MarketRepository;
use crate::errors::ServiceError;

/// In-memory repository for tests and running without a database.
///
/// Mirrors the store's behaviour: ids start at 1 and are never reused, and an
/// `owner` longer than the column allows is refused.
pub struct InMemoryMarketRepository {
    inner: Mutex<State>,
}

struct State {
    next_id: i32,
    rows: BTreeMap<i32, market::Model>,
}

impl Default for InMemoryMarketRepository {
    fn default() -> Self {
        Self { inner: Mutex::new(State { next_id: 1, rows: BTreeMap::new() }) }
    }
}

impl InMemoryMarketRepository {
    pub fn new() -> Self { Self::default() }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl MarketRepository for InMemoryMarketRepository {
    async fn create(&self, ad: NewAd) -> Result<market::Model, ServiceError> {
        if ad.owner.chars().count() > OWNER_MAX_CHARS {
            return Err(ServiceError::Malformed(format!("owner exceeds {OWNER_MAX_CHARS} characters")));
        }
        let mut state = self.inner.lock().await;
        let id = state.next_id;
        state.next_id += 1;
        let model = market::Model {
            id,
            title: ad.title,
            description: ad.description,
            creation_time: Utc::now().into(),
            owner: ad.owner,
        };
        state.rows.insert(id, model.clone());
        Ok(model)
    }

    async fn get(&self, id: i32) -> Result<Option<market::Model>, ServiceError> {
        Ok(self.inner.lock().await.rows.get(&id).cloned())
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        match self.inner.lock().await.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(ServiceError::not_found("item")),
        }
    }
}
