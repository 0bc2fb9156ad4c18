use tracing::trace;

use crate::domain::specification::{
    entities::{Criteria, SortKey},
    ports::{QuerySource, Specifiable},
};

/// Applies `criteria` to `source` in a fixed order: filters, includes, ordering, paging.
///
/// Ordering always ends with the entity key so that pages are reproducible even when
/// the sort field has duplicates or no sort was requested. In single-entity mode only
/// filters and includes are applied.
pub fn apply_specification<T, Q>(source: Q, criteria: &Criteria<T>) -> Q
where
    T: Specifiable,
    Q: QuerySource<T>,
{
    let mut query = apply_filters(source, criteria);

    query = criteria
        .includes()
        .iter()
        .fold(query, |query, relation| query.include(*relation));

    if criteria.is_single() {
        return query;
    }

    if let Some(key) = criteria.order() {
        query = query.order_by(key);
    }
    query = query.order_by(SortKey::ascending(T::KEY));

    if let Some(window) = criteria.paging() {
        trace!(skip = window.skip(), take = window.take(), "applying page window");
        query = query.skip(window.skip()).take(window.take());
    }

    query
}

/// Applies only the filter predicates, for counting.
pub fn apply_count<T, Q>(source: Q, criteria: &Criteria<T>) -> Q
where
    T: Specifiable,
    Q: QuerySource<T>,
{
    apply_filters(source, criteria)
}

fn apply_filters<T, Q>(source: Q, criteria: &Criteria<T>) -> Q
where
    T: Specifiable,
    Q: QuerySource<T>,
{
    let query = criteria
        .filters()
        .iter()
        .fold(source, |query, predicate| query.filter(predicate));

    match criteria.single_filter() {
        Some(predicate) => query.filter(predicate),
        None => query,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::specification::entities::{FieldValue, PageWindow, Predicate};

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        group: i64,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum RowField {
        Id,
        Group,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum RowRelation {
        Owner,
    }

    impl Specifiable for Row {
        type Field = RowField;
        type Relation = RowRelation;

        const KEY: RowField = RowField::Id;
        const RELATIONS: &'static [RowRelation] = &[RowRelation::Owner];

        fn value_of(&self, field: RowField) -> FieldValue {
            match field {
                RowField::Id => FieldValue::Int(self.id),
                RowField::Group => FieldValue::Int(self.group),
            }
        }

        fn detach(&mut self, _relation: RowRelation) {}
    }

    /// Records the primitive calls made by the evaluator.
    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl QuerySource<Row> for Recorder {
        fn filter(mut self, predicate: &Predicate<RowField>) -> Self {
            self.0.push(format!("filter {:?}", predicate.field()));
            self
        }

        fn include(mut self, relation: RowRelation) -> Self {
            self.0.push(format!("include {relation:?}"));
            self
        }

        fn order_by(mut self, key: SortKey<RowField>) -> Self {
            self.0
                .push(format!("order {:?} {:?}", key.field, key.direction));
            self
        }

        fn skip(mut self, count: u64) -> Self {
            self.0.push(format!("skip {count}"));
            self
        }

        fn take(mut self, count: u64) -> Self {
            self.0.push(format!("take {count}"));
            self
        }
    }

    #[test]
    fn test_primitives_applied_in_fixed_order() {
        let criteria = Criteria::<Row>::new()
            .paged(PageWindow::new(4, 2).unwrap())
            .order_by_descending(RowField::Group)
            .include(RowRelation::Owner)
            .with_filter(Predicate::equals(RowField::Group, 1));

        let calls = apply_specification(Recorder::default(), &criteria).0;

        assert_eq!(
            calls,
            vec![
                "filter Group",
                "include Owner",
                "order Group Desc",
                "order Id Asc",
                "skip 4",
                "take 2",
            ]
        );
    }

    #[test]
    fn test_unsorted_criteria_falls_back_to_key_order() {
        let criteria = Criteria::<Row>::new();

        let calls = apply_specification(Recorder::default(), &criteria).0;

        assert_eq!(calls, vec!["order Id Asc"]);
    }

    #[test]
    fn test_single_mode_ignores_sort_and_paging() {
        let criteria = Criteria::<Row>::single(Predicate::equals(RowField::Id, 3))
            .include(RowRelation::Owner)
            .order_by(RowField::Group)
            .paged(PageWindow::new(0, 5).unwrap());

        let calls = apply_specification(Recorder::default(), &criteria).0;

        assert_eq!(calls, vec!["filter Id", "include Owner"]);
    }

    #[test]
    fn test_count_applies_filters_only() {
        let criteria = Criteria::<Row>::new()
            .with_filter(Predicate::equals(RowField::Group, 2))
            .include(RowRelation::Owner)
            .order_by(RowField::Group)
            .paged(PageWindow::new(6, 6).unwrap());

        let calls = apply_count(Recorder::default(), &criteria).0;

        assert_eq!(calls, vec!["filter Group"]);
    }

    #[test]
    fn test_later_sort_overrides_earlier() {
        let criteria = Criteria::<Row>::new()
            .order_by(RowField::Group)
            .order_by_descending(RowField::Id);

        assert_eq!(criteria.order(), Some(SortKey::descending(RowField::Id)));
    }

    #[test]
    fn test_zero_take_is_not_a_page_window() {
        assert!(PageWindow::new(0, 0).is_none());
    }
}
