use std::future::Future;

use sea_orm::{
    DatabaseConnection, DbErr, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect, Select,
    sea_query::{Expr, Func},
};

use crate::domain::specification::{
    FieldValue, Predicate, QuerySource, SortDirection, SortKey, Specifiable,
};

/// Binds a specifiable entity to its sea-orm table.
pub trait SqlSpecifiable: Specifiable + From<<Self::Entity as EntityTrait>::Model> {
    type Entity: EntityTrait;

    fn column(field: Self::Field) -> <Self::Entity as EntityTrait>::Column;

    /// Resolves the requested relations for rows already fetched, one query per relation.
    fn load_relations(
        db: &DatabaseConnection,
        rows: &mut [Self],
        relations: &[Self::Relation],
    ) -> impl Future<Output = Result<(), DbErr>> + Send;
}

/// Criteria translated into a sea-orm `Select`, plus the relations to load afterwards.
#[derive(Debug)]
pub struct SqlQuery<T: SqlSpecifiable> {
    select: Select<T::Entity>,
    includes: Vec<T::Relation>,
}

impl<T: SqlSpecifiable> Default for SqlQuery<T> {
    fn default() -> Self {
        Self {
            select: T::Entity::find(),
            includes: Vec::new(),
        }
    }
}

impl<T: SqlSpecifiable> SqlQuery<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_parts(self) -> (Select<T::Entity>, Vec<T::Relation>) {
        (self.select, self.includes)
    }
}

impl<T: SqlSpecifiable> QuerySource<T> for SqlQuery<T> {
    fn filter(mut self, predicate: &Predicate<T::Field>) -> Self {
        let condition = match predicate {
            Predicate::Equals { field, value } => {
                Expr::col(T::column(*field)).eq(to_value(value))
            }
            Predicate::Contains { field, needle } => {
                Expr::expr(Func::lower(Expr::col(T::column(*field)))).like(like_contains(needle))
            }
        };

        self.select = self.select.filter(condition);
        self
    }

    fn include(mut self, relation: T::Relation) -> Self {
        if !self.includes.contains(&relation) {
            self.includes.push(relation);
        }
        self
    }

    fn order_by(mut self, key: SortKey<T::Field>) -> Self {
        let order = match key.direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        };

        self.select = self.select.order_by(T::column(key.field), order);
        self
    }

    fn skip(mut self, count: u64) -> Self {
        self.select = self.select.offset(bind_bound(count));
        self
    }

    fn take(mut self, count: u64) -> Self {
        self.select = self.select.limit(bind_bound(count));
        self
    }
}

/// Postgres binds OFFSET and LIMIT as BIGINT.
fn bind_bound(count: u64) -> u64 {
    count.min(i64::MAX as u64)
}

fn to_value(value: &FieldValue) -> sea_orm::Value {
    match value {
        FieldValue::Int(value) => (*value).into(),
        FieldValue::Decimal(value) => (*value).into(),
        FieldValue::Text(value) => value.clone().into(),
    }
}

fn like_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '%' | '_' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            c => out.push(c),
        }
    }
    out
}

fn like_contains(s: &str) -> String {
    format!("%{}%", like_escape(s))
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryTrait, Statement, Value};

    use super::*;
    use crate::domain::{
        catalog::{
            builder::ProductCriteriaBuilder,
            entities::{Product, ProductField},
            value_objects::ProductSpecParams,
        },
        specification::{
            Criteria, PageWindow,
            evaluator::{apply_count, apply_specification},
        },
    };

    fn listing(criteria: &Criteria<Product>) -> Statement {
        let (select, _) = apply_specification(SqlQuery::<Product>::new(), criteria).into_parts();
        select.build(DbBackend::Postgres)
    }

    fn position(sql: &str, fragment: &str) -> usize {
        sql.find(fragment)
            .unwrap_or_else(|| panic!("`{fragment}` missing from {sql}"))
    }

    fn filtered_page() -> Criteria<Product> {
        ProductCriteriaBuilder::default()
            .build(&ProductSpecParams {
                brand_id: Some(2),
                search: Some("Board".to_string()),
                sort: Some("priceDesc".to_string()),
                page_index: Some(3),
                page_size: Some(6),
                ..Default::default()
            })
            .criteria
    }

    #[test]
    fn test_listing_sql_filters_sorts_then_pages() {
        let sql = listing(&filtered_page()).to_string();

        let filter = position(&sql, r#""product_brand_id" = 2"#);
        let search = position(&sql, r#"LOWER("name") LIKE '%board%'"#);
        let price = position(&sql, r#""price" DESC"#);
        let key = position(&sql, r#""id" ASC"#);
        let limit = position(&sql, "LIMIT 6");
        let offset = position(&sql, "OFFSET 12");

        assert!(position(&sql, "WHERE") < filter);
        assert!(filter < search);
        assert!(sql[filter..search].contains(" AND "));
        assert!(search < position(&sql, "ORDER BY"));
        assert!(position(&sql, "ORDER BY") < price);
        assert!(price < key);
        assert!(key < limit);
        assert!(limit < offset);
    }

    #[test]
    fn test_count_sql_has_filters_only() {
        let (select, _) = apply_count(SqlQuery::<Product>::new(), &filtered_page()).into_parts();
        let sql = select.build(DbBackend::Postgres).to_string();

        assert!(sql.contains(r#""product_brand_id" = 2"#));
        assert!(sql.contains(r#"LOWER("name") LIKE '%board%'"#));
        assert!(!sql.contains("ORDER BY"));
        assert!(!sql.contains("LIMIT"));
        assert!(!sql.contains("OFFSET"));
    }

    #[test]
    fn test_single_lookup_sql_drops_sort_and_paging() {
        let criteria = ProductCriteriaBuilder::default().build_by_id(42);

        let sql = listing(&criteria).to_string();

        assert!(sql.contains(r#""id" = 42"#));
        assert!(!sql.contains("ORDER BY"));
        assert!(!sql.contains("LIMIT"));
        assert!(!sql.contains("OFFSET"));
    }

    #[test]
    fn test_unsorted_listing_still_orders_by_key() {
        let criteria = Criteria::<Product>::new().paged(PageWindow::new(0, 6).unwrap());

        let sql = listing(&criteria).to_string();

        assert!(position(&sql, "ORDER BY") < position(&sql, r#""id" ASC"#));
        assert!(!sql.contains(r#""name" ASC"#));
    }

    #[test]
    fn test_oversized_offset_binds_as_bigint() {
        let criteria = Criteria::<Product>::new()
            .order_by(ProductField::Name)
            .paged(PageWindow::new(u64::MAX, 6).unwrap());

        let statement = listing(&criteria);
        let values = statement.values.clone().map(|values| values.0).unwrap_or_default();

        assert!(statement.to_string().contains("OFFSET 9223372036854775807"));
        assert!(values.iter().all(|value| !matches!(
            value,
            Value::BigUnsigned(Some(n)) if *n > i64::MAX as u64
        )));
    }

    #[test]
    fn test_huge_page_index_offset_fits_bigint() {
        let criteria = ProductCriteriaBuilder::default()
            .build(&ProductSpecParams {
                page_index: Some(i64::MAX),
                ..Default::default()
            })
            .criteria;

        let sql = listing(&criteria).to_string();

        assert!(sql.contains("OFFSET 9223372036854775807"));
        assert!(!sql.contains("18446744073709551615"));
    }

    #[test]
    fn test_like_metacharacters_are_escaped() {
        assert_eq!(like_contains("50%_off"), "%50\\%\\_off%");
    }

    #[test]
    fn test_plain_needle() {
        assert_eq!(like_contains("hat"), "%hat%");
    }
}
