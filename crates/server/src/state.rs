use std::sync::Arc;

use service::market::{MarketRepository, MarketService};

/// Shared handler state. Cloned per request; the repository behind it is
/// shared.
#[derive(Clone)]
pub struct AppState {
    pub market: MarketService,
}

impl AppState {
    pub fn new(repo: Arc<dyn MarketRepository>) -> Self {
        Self { market: MarketService::new(repo) }
    }
}
