use std::cmp::Ordering;

use crate::domain::specification::{
    Predicate, QuerySource, SortDirection, SortKey, Specifiable,
};

/// Query over a borrowed snapshot of entities.
///
/// Filters and paging act immediately. Sort keys accumulate until the next paging
/// step or materialization, then are applied as one stable sort.
#[derive(Debug)]
pub struct MemoryQuery<'a, T: Specifiable> {
    rows: Vec<&'a T>,
    ordering: Vec<SortKey<T::Field>>,
    included: Vec<T::Relation>,
}

impl<'a, T: Specifiable> MemoryQuery<'a, T> {
    pub fn new(rows: &'a [T]) -> Self {
        Self {
            rows: rows.iter().collect(),
            ordering: Vec::new(),
            included: Vec::new(),
        }
    }

    pub fn count(&self) -> u64 {
        self.rows.len() as u64
    }

    pub fn into_rows(mut self) -> Vec<T> {
        self.sort_pending();

        let excluded: Vec<T::Relation> = T::RELATIONS
            .iter()
            .copied()
            .filter(|relation| !self.included.contains(relation))
            .collect();

        self.rows
            .into_iter()
            .map(|row| {
                let mut row = row.clone();
                for relation in &excluded {
                    row.detach(*relation);
                }
                row
            })
            .collect()
    }

    pub fn first(self) -> Option<T> {
        self.into_rows().into_iter().next()
    }

    fn sort_pending(&mut self) {
        if self.ordering.is_empty() {
            return;
        }

        let ordering = std::mem::take(&mut self.ordering);
        self.rows.sort_by(|a, b| compare(*a, *b, &ordering));
    }
}

fn compare<T: Specifiable>(a: &T, b: &T, ordering: &[SortKey<T::Field>]) -> Ordering {
    for key in ordering {
        let ordering = a.value_of(key.field).cmp(&b.value_of(key.field));
        let ordering = match key.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}

impl<T: Specifiable> QuerySource<T> for MemoryQuery<'_, T> {
    fn filter(mut self, predicate: &Predicate<T::Field>) -> Self {
        self.rows.retain(|row| predicate.matches(*row));
        self
    }

    fn include(mut self, relation: T::Relation) -> Self {
        if !self.included.contains(&relation) {
            self.included.push(relation);
        }
        self
    }

    fn order_by(mut self, key: SortKey<T::Field>) -> Self {
        self.ordering.push(key);
        self
    }

    fn skip(mut self, count: u64) -> Self {
        self.sort_pending();
        let count = usize::try_from(count).unwrap_or(usize::MAX).min(self.rows.len());
        self.rows.drain(..count);
        self
    }

    fn take(mut self, count: u64) -> Self {
        self.sort_pending();
        self.rows
            .truncate(usize::try_from(count).unwrap_or(usize::MAX));
        self
    }
}
