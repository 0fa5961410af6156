//! Service layer for market ads.
//! - Validates creation payloads before they reach the store.
//! - Wraps every operation in its own transaction.
//! - Hides the persistence backend behind [`market::repository::MarketRepository`].

pub mod errors;
pub mod market;
#[cfg(test)]
pub mod test_support;
