pub mod query;
pub mod repository;
pub mod seed;

pub use repository::InMemoryRepository;
pub use seed::{CatalogSeed, MemoryCatalog};
