use std::fmt::Debug;
use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    specification::entities::{Criteria, FieldValue, Predicate, SortKey},
};

/// An entity type that criteria can be written against.
///
/// Implementors name their filterable/sortable fields and their eager-loadable
/// relations as small `Copy` enums, and expose field values for in-memory evaluation.
pub trait Specifiable: Debug + Clone + Send + Sync + 'static {
    type Field: Debug + Copy + Eq + Send + Sync + 'static;
    type Relation: Debug + Copy + Eq + Send + Sync + 'static;

    /// Unique, stable field used as the final tie-break of every ordered read.
    const KEY: Self::Field;

    /// All relations this entity can carry.
    const RELATIONS: &'static [Self::Relation];

    fn value_of(&self, field: Self::Field) -> FieldValue;

    /// Drops an attached relation so the entity only carries what was included.
    fn detach(&mut self, relation: Self::Relation);
}

/// Query primitives a backing store must offer for criteria to be evaluated against it.
///
/// `order_by` is cumulative: each call adds a lower-priority key.
pub trait QuerySource<T: Specifiable>: Sized {
    fn filter(self, predicate: &Predicate<T::Field>) -> Self;

    fn include(self, relation: T::Relation) -> Self;

    fn order_by(self, key: SortKey<T::Field>) -> Self;

    fn skip(self, count: u64) -> Self;

    fn take(self, count: u64) -> Self;
}

#[cfg_attr(test, mockall::automock)]
pub trait Repository<T: Specifiable>: Send + Sync {
    fn list_all(&self) -> impl Future<Output = Result<Vec<T>, CoreError>> + Send;

    fn list_by_specification(
        &self,
        criteria: &Criteria<T>,
    ) -> impl Future<Output = Result<Vec<T>, CoreError>> + Send;

    fn get_by_specification(
        &self,
        criteria: &Criteria<T>,
    ) -> impl Future<Output = Result<Option<T>, CoreError>> + Send;

    /// Number of entities matching the filters, ignoring sort, paging and includes.
    fn count_by_specification(
        &self,
        criteria: &Criteria<T>,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
