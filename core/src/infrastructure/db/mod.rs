pub mod postgres;
pub mod query;
pub mod repository;

pub use query::{SqlQuery, SqlSpecifiable};
pub use repository::PostgresRepository;
