use tracing::info;

use crate::{
    domain::{
        catalog::{
            builder::ProductCriteriaBuilder,
            entities::{Product, ProductBrand, ProductType},
        },
        common::{CatalogConfig, StoreBackend, StorefrontConfig, services::Service},
    },
    infrastructure::{
        db::{
            PostgresRepository,
            postgres::{Postgres, PostgresConfig},
        },
        memory::{CatalogSeed, MemoryCatalog},
        store::CatalogStore,
    },
};

pub type StorefrontService =
    Service<CatalogStore<Product>, CatalogStore<ProductBrand>, CatalogStore<ProductType>>;

pub async fn create_service(config: StorefrontConfig) -> Result<StorefrontService, anyhow::Error> {
    let service = match &config.store {
        StoreBackend::Postgres => {
            let postgres = Postgres::new(PostgresConfig {
                database_url: config.database.database_url(),
            })
            .await?;

            Service::new(
                CatalogStore::Postgres(PostgresRepository::new(postgres.get_db())),
                CatalogStore::Postgres(PostgresRepository::new(postgres.get_db())),
                CatalogStore::Postgres(PostgresRepository::new(postgres.get_db())),
                ProductCriteriaBuilder::new(config.catalog),
            )
        }
        StoreBackend::Memory { seed_file } => {
            info!("serving catalog from seed {}", seed_file.display());
            memory_service(CatalogSeed::load(seed_file)?, config.catalog)
        }
    };

    Ok(service)
}

/// Builds a service over an in-memory snapshot of `seed`.
pub fn memory_service(seed: CatalogSeed, catalog: CatalogConfig) -> StorefrontService {
    let MemoryCatalog {
        products,
        brands,
        types,
    } = seed.into_catalog();

    Service::new(
        CatalogStore::Memory(products),
        CatalogStore::Memory(brands),
        CatalogStore::Memory(types),
        ProductCriteriaBuilder::new(catalog),
    )
}
