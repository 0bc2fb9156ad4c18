use sea_orm::EntityTrait;

use crate::domain::{
    common::entities::app_errors::CoreError,
    specification::{Criteria, Repository},
};
use crate::infrastructure::{
    db::{PostgresRepository, SqlSpecifiable},
    memory::InMemoryRepository,
};

/// Repository backend chosen at startup.
#[derive(Debug, Clone)]
pub enum CatalogStore<T> {
    Postgres(PostgresRepository<T>),
    Memory(InMemoryRepository<T>),
}

impl<T> Repository<T> for CatalogStore<T>
where
    T: SqlSpecifiable,
    <T::Entity as EntityTrait>::Model: Sync,
{
    async fn list_all(&self) -> Result<Vec<T>, CoreError> {
        match self {
            CatalogStore::Postgres(repository) => repository.list_all().await,
            CatalogStore::Memory(repository) => repository.list_all().await,
        }
    }

    async fn list_by_specification(&self, criteria: &Criteria<T>) -> Result<Vec<T>, CoreError> {
        match self {
            CatalogStore::Postgres(repository) => repository.list_by_specification(criteria).await,
            CatalogStore::Memory(repository) => repository.list_by_specification(criteria).await,
        }
    }

    async fn get_by_specification(&self, criteria: &Criteria<T>) -> Result<Option<T>, CoreError> {
        match self {
            CatalogStore::Postgres(repository) => repository.get_by_specification(criteria).await,
            CatalogStore::Memory(repository) => repository.get_by_specification(criteria).await,
        }
    }

    async fn count_by_specification(&self, criteria: &Criteria<T>) -> Result<u64, CoreError> {
        match self {
            CatalogStore::Postgres(repository) => repository.count_by_specification(criteria).await,
            CatalogStore::Memory(repository) => repository.count_by_specification(criteria).await,
        }
    }
}
