pub mod memory;
pub mod repository;
pub mod service;

pub use memory::InMemoryMarketRepository;
pub use repository::{MarketRepository, SeaOrmMarketRepository};
pub use service::MarketService;
