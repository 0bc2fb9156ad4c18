use std::sync::Arc;

use crate::domain::{
    common::entities::app_errors::CoreError,
    specification::{
        Criteria, Repository, Specifiable,
        evaluator::{apply_count, apply_specification},
    },
};
use crate::infrastructure::memory::query::MemoryQuery;

/// Repository over an immutable, shared snapshot of fully hydrated entities.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    rows: Arc<[T]>,
}

impl<T: Specifiable> InMemoryRepository<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self { rows: rows.into() }
    }
}

impl<T: Specifiable> Repository<T> for InMemoryRepository<T> {
    async fn list_all(&self) -> Result<Vec<T>, CoreError> {
        Ok(self.rows.to_vec())
    }

    async fn list_by_specification(&self, criteria: &Criteria<T>) -> Result<Vec<T>, CoreError> {
        Ok(apply_specification(MemoryQuery::new(&*self.rows), criteria).into_rows())
    }

    async fn get_by_specification(&self, criteria: &Criteria<T>) -> Result<Option<T>, CoreError> {
        Ok(apply_specification(MemoryQuery::new(&*self.rows), criteria).first())
    }

    async fn count_by_specification(&self, criteria: &Criteria<T>) -> Result<u64, CoreError> {
        Ok(apply_count(MemoryQuery::new(&*self.rows), criteria).count())
    }
}
