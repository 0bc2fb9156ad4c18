use std::marker::PhantomData;

use sea_orm::{DatabaseConnection, EntityName, EntityTrait, PaginatorTrait};
use tracing::{debug, error};

use crate::domain::{
    common::entities::app_errors::CoreError,
    specification::{
        Criteria, Repository,
        evaluator::{apply_count, apply_specification},
    },
};
use crate::infrastructure::db::query::{SqlQuery, SqlSpecifiable};

/// Generic sea-orm repository for any [`SqlSpecifiable`] entity.
#[derive(Debug, Clone)]
pub struct PostgresRepository<T> {
    pub db: DatabaseConnection,
    _entity: PhantomData<fn() -> T>,
}

impl<T> PostgresRepository<T> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

fn table<T: SqlSpecifiable>() -> String {
    T::Entity::default().table_name().to_owned()
}

impl<T> Repository<T> for PostgresRepository<T>
where
    T: SqlSpecifiable,
    <T::Entity as EntityTrait>::Model: Sync,
{
    async fn list_all(&self) -> Result<Vec<T>, CoreError> {
        let rows = T::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list {}: {}", table::<T>(), e);
                CoreError::StoreError(e.to_string())
            })?
            .into_iter()
            .map(T::from)
            .collect::<Vec<T>>();

        Ok(rows)
    }

    async fn list_by_specification(&self, criteria: &Criteria<T>) -> Result<Vec<T>, CoreError> {
        let (select, includes) = apply_specification(SqlQuery::new(), criteria).into_parts();

        let mut rows = select
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to query {}: {}", table::<T>(), e);
                CoreError::StoreError(e.to_string())
            })?
            .into_iter()
            .map(T::from)
            .collect::<Vec<T>>();

        T::load_relations(&self.db, &mut rows, &includes)
            .await
            .map_err(|e| {
                error!("Failed to load {} relations: {}", table::<T>(), e);
                CoreError::StoreError(e.to_string())
            })?;

        debug!(table = %table::<T>(), rows = rows.len(), "evaluated criteria");

        Ok(rows)
    }

    async fn get_by_specification(&self, criteria: &Criteria<T>) -> Result<Option<T>, CoreError> {
        let (select, includes) = apply_specification(SqlQuery::new(), criteria).into_parts();

        let row = select.one(&self.db).await.map_err(|e| {
            error!("Failed to get {}: {}", table::<T>(), e);
            CoreError::StoreError(e.to_string())
        })?;

        let Some(mut row) = row.map(T::from) else {
            return Ok(None);
        };

        T::load_relations(&self.db, std::slice::from_mut(&mut row), &includes)
            .await
            .map_err(|e| {
                error!("Failed to load {} relations: {}", table::<T>(), e);
                CoreError::StoreError(e.to_string())
            })?;

        Ok(Some(row))
    }

    async fn count_by_specification(&self, criteria: &Criteria<T>) -> Result<u64, CoreError> {
        let (select, _) = apply_count(SqlQuery::new(), criteria).into_parts();

        select.count(&self.db).await.map_err(|e| {
            error!("Failed to count {}: {}", table::<T>(), e);
            CoreError::StoreError(e.to_string())
        })
    }
}
