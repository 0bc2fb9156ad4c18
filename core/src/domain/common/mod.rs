use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::{
    catalog::entities::ProductField,
    specification::entities::{SortDirection, SortKey},
};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct StorefrontConfig {
    pub database: DatabaseConfig,
    pub store: StoreBackend,
    pub catalog: CatalogConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

/// Where catalog entities are read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    /// Immutable snapshot loaded from a JSON seed file at startup.
    Memory { seed_file: PathBuf },
}

/// Paging bounds and sort vocabulary handed to the criteria builder.
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub default_page_size: u64,
    pub max_page_size: u64,
    pub default_sort: String,
    pub sort_table: BTreeMap<String, SortKey<ProductField>>,
}

impl CatalogConfig {
    pub fn with_page_sizes(default_page_size: u64, max_page_size: u64) -> Self {
        Self {
            default_page_size,
            max_page_size,
            ..Self::default()
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let sort_table = BTreeMap::from([
            (
                "name".to_string(),
                SortKey::new(ProductField::Name, SortDirection::Asc),
            ),
            (
                "priceAsc".to_string(),
                SortKey::new(ProductField::Price, SortDirection::Asc),
            ),
            (
                "priceDesc".to_string(),
                SortKey::new(ProductField::Price, SortDirection::Desc),
            ),
        ]);

        Self {
            default_page_size: 6,
            max_page_size: 50,
            default_sort: "name".to_string(),
            sort_table,
        }
    }
}
