use tracing::debug;

use crate::domain::{
    catalog::{
        entities::{Product, ProductField, ProductRelation},
        value_objects::{ProductQuery, ProductSpecParams},
    },
    common::CatalogConfig,
    specification::{Criteria, PageWindow, Predicate, SortKey},
};

/// Largest offset a SQL store accepts as a signed 64-bit bind value.
const MAX_OFFSET: u64 = i64::MAX as u64;

/// Turns raw listing parameters into product criteria.
///
/// Never rejects input. Anything out of range or unrecognized falls back to a default.
#[derive(Debug, Clone)]
pub struct ProductCriteriaBuilder {
    config: CatalogConfig,
}

impl Default for ProductCriteriaBuilder {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}

impl ProductCriteriaBuilder {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn build(&self, params: &ProductSpecParams) -> ProductQuery {
        let page_index = params.page_index.filter(|index| *index >= 1).unwrap_or(1) as u64;
        let page_size = self.page_size(params.page_size);
        let skip = (page_index - 1)
            .saturating_mul(page_size)
            .min(MAX_OFFSET);

        let mut criteria = Self::with_includes(Criteria::new());

        if let Some(brand_id) = Self::id_filter(params.brand_id) {
            criteria = criteria.with_filter(Predicate::equals(ProductField::BrandId, brand_id));
        }

        if let Some(type_id) = Self::id_filter(params.type_id) {
            criteria = criteria.with_filter(Predicate::equals(ProductField::TypeId, type_id));
        }

        if let Some(search) = params
            .search
            .as_deref()
            .map(|search| search.trim().to_lowercase())
            .filter(|search| !search.is_empty())
        {
            criteria = criteria.with_filter(Predicate::contains(ProductField::Name, &search));
        }

        if let Some(key) = self.sort_key(params.sort.as_deref()) {
            criteria = criteria.sorted(key);
        }

        if let Some(window) = PageWindow::new(skip, page_size) {
            criteria = criteria.paged(window);
        }

        debug!(page_index, page_size, skip, "built product criteria");

        ProductQuery {
            criteria,
            page_index,
            page_size,
        }
    }

    pub fn build_by_id(&self, product_id: i32) -> Criteria<Product> {
        Self::with_includes(Criteria::single(Predicate::equals(
            ProductField::Id,
            product_id,
        )))
    }

    fn with_includes(criteria: Criteria<Product>) -> Criteria<Product> {
        criteria
            .include(ProductRelation::Type)
            .include(ProductRelation::Brand)
    }

    /// `0` is the "All" sentinel.
    fn id_filter(id: Option<i64>) -> Option<i64> {
        id.filter(|id| *id != 0)
    }

    fn page_size(&self, requested: Option<i64>) -> u64 {
        let max = self.config.max_page_size.max(1);
        let default = self.config.default_page_size.clamp(1, max);

        match requested {
            Some(size) if size >= 1 => (size as u64).min(max),
            _ => default,
        }
    }

    fn sort_key(&self, token: Option<&str>) -> Option<SortKey<ProductField>> {
        token
            .and_then(|token| self.config.sort_table.get(token.trim()))
            .or_else(|| self.config.sort_table.get(&self.config.default_sort))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::specification::{FieldValue, SortDirection};

    fn params() -> ProductSpecParams {
        ProductSpecParams::default()
    }

    #[test]
    fn test_defaults() {
        let query = ProductCriteriaBuilder::default().build(&params());

        assert_eq!(query.page_index, 1);
        assert_eq!(query.page_size, 6);
        assert!(query.criteria.filters().is_empty());
        assert_eq!(
            query.criteria.order(),
            Some(SortKey::ascending(ProductField::Name))
        );
        assert_eq!(query.criteria.paging(), PageWindow::new(0, 6));
        assert_eq!(
            query.criteria.includes(),
            &[ProductRelation::Type, ProductRelation::Brand]
        );
    }

    #[test]
    fn test_all_sentinel_adds_no_filter() {
        let query = ProductCriteriaBuilder::default().build(&ProductSpecParams {
            brand_id: Some(0),
            type_id: Some(0),
            ..params()
        });

        assert!(query.criteria.filters().is_empty());
    }

    #[test]
    fn test_brand_and_type_filters() {
        let query = ProductCriteriaBuilder::default().build(&ProductSpecParams {
            brand_id: Some(2),
            type_id: Some(3),
            ..params()
        });

        assert_eq!(
            query.criteria.filters(),
            &[
                Predicate::Equals {
                    field: ProductField::BrandId,
                    value: FieldValue::Int(2)
                },
                Predicate::Equals {
                    field: ProductField::TypeId,
                    value: FieldValue::Int(3)
                },
            ]
        );
    }

    #[test]
    fn test_search_is_trimmed_and_lowercased() {
        let query = ProductCriteriaBuilder::default().build(&ProductSpecParams {
            search: Some("  Blue Hat ".to_string()),
            ..params()
        });

        assert_eq!(
            query.criteria.filters(),
            &[Predicate::Contains {
                field: ProductField::Name,
                needle: "blue hat".to_string()
            }]
        );
    }

    #[test]
    fn test_blank_search_adds_no_filter() {
        let query = ProductCriteriaBuilder::default().build(&ProductSpecParams {
            search: Some("   ".to_string()),
            ..params()
        });

        assert!(query.criteria.filters().is_empty());
    }

    #[test]
    fn test_sort_tokens() {
        let builder = ProductCriteriaBuilder::default();
        let order_for = |sort: &str| {
            builder
                .build(&ProductSpecParams {
                    sort: Some(sort.to_string()),
                    ..params()
                })
                .criteria
                .order()
        };

        assert_eq!(
            order_for("priceAsc"),
            Some(SortKey::new(ProductField::Price, SortDirection::Asc))
        );
        assert_eq!(
            order_for("priceDesc"),
            Some(SortKey::new(ProductField::Price, SortDirection::Desc))
        );
        assert_eq!(
            order_for("bogus"),
            Some(SortKey::new(ProductField::Name, SortDirection::Asc))
        );
    }

    #[test]
    fn test_page_index_below_one_is_coerced() {
        let query = ProductCriteriaBuilder::default().build(&ProductSpecParams {
            page_index: Some(-4),
            ..params()
        });

        assert_eq!(query.page_index, 1);
        assert_eq!(query.criteria.paging().map(|w| w.skip()), Some(0));
    }

    #[test]
    fn test_skip_follows_page_index() {
        let query = ProductCriteriaBuilder::default().build(&ProductSpecParams {
            page_index: Some(3),
            page_size: Some(4),
            ..params()
        });

        assert_eq!(query.criteria.paging(), PageWindow::new(8, 4));
    }

    #[test]
    fn test_huge_page_index_keeps_skip_in_signed_range() {
        let query = ProductCriteriaBuilder::default().build(&ProductSpecParams {
            page_index: Some(i64::MAX),
            ..params()
        });

        let window = query.criteria.paging().unwrap();

        assert_eq!(query.page_index, i64::MAX as u64);
        assert_eq!(window.skip(), i64::MAX as u64);
        assert_eq!(window.take(), 6);
    }

    #[test]
    fn test_page_size_is_clamped_to_maximum() {
        let query = ProductCriteriaBuilder::new(CatalogConfig::with_page_sizes(6, 10)).build(
            &ProductSpecParams {
                page_size: Some(500),
                ..params()
            },
        );

        assert_eq!(query.page_size, 10);
        assert_eq!(query.criteria.paging().map(|w| w.take()), Some(10));
    }

    #[test]
    fn test_non_positive_page_size_uses_default() {
        let query = ProductCriteriaBuilder::default().build(&ProductSpecParams {
            page_size: Some(0),
            ..params()
        });

        assert_eq!(query.page_size, 6);
    }

    #[test]
    fn test_build_by_id_is_single_with_includes() {
        let criteria = ProductCriteriaBuilder::default().build_by_id(7);

        assert!(criteria.is_single());
        assert_eq!(criteria.includes().len(), 2);
        assert!(!criteria.is_paging_enabled());
    }
}
