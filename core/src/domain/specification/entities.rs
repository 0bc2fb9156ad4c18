use std::cmp::Ordering;
use std::num::NonZeroU64;

use rust_decimal::Decimal;

use crate::domain::specification::ports::Specifiable;

/// Typed value of an entity field as seen by filters and sort keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Int(i64),
    Decimal(Decimal),
    Text(String),
}

impl FieldValue {
    fn rank(&self) -> u8 {
        match self {
            FieldValue::Int(_) => 0,
            FieldValue::Decimal(_) => 1,
            FieldValue::Text(_) => 2,
        }
    }
}

impl Ord for FieldValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Int(a), FieldValue::Int(b)) => a.cmp(b),
            (FieldValue::Decimal(a), FieldValue::Decimal(b)) => a.cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for FieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(value.into())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        FieldValue::Decimal(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// A single boolean condition over one field. Criteria only ever AND these together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate<F> {
    Equals { field: F, value: FieldValue },
    /// Case-insensitive substring match; `needle` is stored lower-cased.
    Contains { field: F, needle: String },
}

impl<F: Copy> Predicate<F> {
    pub fn equals(field: F, value: impl Into<FieldValue>) -> Self {
        Predicate::Equals {
            field,
            value: value.into(),
        }
    }

    pub fn contains(field: F, needle: &str) -> Self {
        Predicate::Contains {
            field,
            needle: needle.to_lowercase(),
        }
    }

    pub fn field(&self) -> F {
        match self {
            Predicate::Equals { field, .. } | Predicate::Contains { field, .. } => *field,
        }
    }

    pub fn matches<T>(&self, entity: &T) -> bool
    where
        T: Specifiable<Field = F>,
    {
        match self {
            Predicate::Equals { field, value } => entity.value_of(*field) == *value,
            Predicate::Contains { field, needle } => match entity.value_of(*field) {
                FieldValue::Text(text) => text.to_lowercase().contains(needle.as_str()),
                _ => false,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F> SortKey<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn ascending(field: F) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn descending(field: F) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

/// Contiguous slice of the filtered and sorted result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    skip: u64,
    take: NonZeroU64,
}

impl PageWindow {
    /// Returns `None` when `take` is zero.
    pub fn new(skip: u64, take: u64) -> Option<Self> {
        NonZeroU64::new(take).map(|take| Self { skip, take })
    }

    pub fn skip(&self) -> u64 {
        self.skip
    }

    pub fn take(&self) -> u64 {
        self.take.get()
    }
}

/// Declarative query over one entity type: filters, includes, ordering and paging.
///
/// Built fresh for each call and never mutated once handed to a repository.
#[derive(Debug, Clone)]
pub struct Criteria<T: Specifiable> {
    filters: Vec<Predicate<T::Field>>,
    single: Option<Predicate<T::Field>>,
    includes: Vec<T::Relation>,
    order: Option<SortKey<T::Field>>,
    paging: Option<PageWindow>,
}

impl<T: Specifiable> Default for Criteria<T> {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
            single: None,
            includes: Vec::new(),
            order: None,
            paging: None,
        }
    }
}

impl<T: Specifiable> Criteria<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Criteria resolving to at most one entity. Sort and paging are ignored in this mode.
    pub fn single(predicate: Predicate<T::Field>) -> Self {
        Self {
            single: Some(predicate),
            ..Self::default()
        }
    }

    pub fn with_filter(mut self, predicate: Predicate<T::Field>) -> Self {
        self.filters.push(predicate);
        self
    }

    pub fn include(mut self, relation: T::Relation) -> Self {
        if !self.includes.contains(&relation) {
            self.includes.push(relation);
        }
        self
    }

    pub fn order_by(self, field: T::Field) -> Self {
        self.sorted(SortKey::ascending(field))
    }

    pub fn order_by_descending(self, field: T::Field) -> Self {
        self.sorted(SortKey::descending(field))
    }

    /// Replaces any previously active sort key.
    pub fn sorted(mut self, key: SortKey<T::Field>) -> Self {
        self.order = Some(key);
        self
    }

    pub fn paged(mut self, window: PageWindow) -> Self {
        self.paging = Some(window);
        self
    }

    pub fn filters(&self) -> &[Predicate<T::Field>] {
        &self.filters
    }

    pub fn single_filter(&self) -> Option<&Predicate<T::Field>> {
        self.single.as_ref()
    }

    pub fn includes(&self) -> &[T::Relation] {
        &self.includes
    }

    pub fn order(&self) -> Option<SortKey<T::Field>> {
        self.order
    }

    pub fn paging(&self) -> Option<PageWindow> {
        self.paging
    }

    pub fn is_paging_enabled(&self) -> bool {
        self.paging.is_some()
    }

    pub fn is_single(&self) -> bool {
        self.single.is_some()
    }
}
