pub mod catalog;
pub mod query_extractor;
pub mod query_params;
pub mod server;
