use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::{
    catalog::entities::{Product, ProductBrand, ProductType},
    common::entities::app_errors::CoreError,
};
use crate::infrastructure::memory::repository::InMemoryRepository;

/// Catalog snapshot as stored in a JSON seed file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSeed {
    pub brands: Vec<ProductBrand>,
    pub types: Vec<ProductType>,
    pub products: Vec<Product>,
}

pub struct MemoryCatalog {
    pub products: InMemoryRepository<Product>,
    pub brands: InMemoryRepository<ProductBrand>,
    pub types: InMemoryRepository<ProductType>,
}

impl CatalogSeed {
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            error!("Failed to read catalog seed {}: {}", path.display(), e);
            CoreError::InvalidConfiguration(format!("cannot read {}: {e}", path.display()))
        })?;

        let seed: CatalogSeed = serde_json::from_str(&raw).map_err(|e| {
            error!("Failed to parse catalog seed {}: {}", path.display(), e);
            CoreError::InvalidConfiguration(format!("cannot parse {}: {e}", path.display()))
        })?;

        info!(
            products = seed.products.len(),
            brands = seed.brands.len(),
            types = seed.types.len(),
            "loaded catalog seed"
        );

        Ok(seed)
    }

    /// Attaches each product's brand and type so the snapshot is fully hydrated.
    pub fn into_catalog(self) -> MemoryCatalog {
        let brands: HashMap<i32, &ProductBrand> = self.brands.iter().map(|b| (b.id, b)).collect();
        let types: HashMap<i32, &ProductType> = self.types.iter().map(|t| (t.id, t)).collect();

        let products = self
            .products
            .into_iter()
            .map(|mut product| {
                product.product_brand = brands.get(&product.product_brand_id).map(|b| (*b).clone());
                product.product_type = types.get(&product.product_type_id).map(|t| (*t).clone());
                product
            })
            .collect();

        MemoryCatalog {
            products: InMemoryRepository::new(products),
            brands: InMemoryRepository::new(self.brands),
            types: InMemoryRepository::new(self.types),
        }
    }
}
