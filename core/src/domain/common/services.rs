use crate::domain::{
    catalog::{
        builder::ProductCriteriaBuilder,
        entities::{Product, ProductBrand, ProductType},
    },
    specification::Repository,
};

/// Application service wiring the catalog repositories to the criteria builder.
#[derive(Clone)]
pub struct Service<P, B, T>
where
    P: Repository<Product>,
    B: Repository<ProductBrand>,
    T: Repository<ProductType>,
{
    pub(crate) product_repository: P,
    pub(crate) brand_repository: B,
    pub(crate) type_repository: T,
    pub(crate) criteria_builder: ProductCriteriaBuilder,
}

impl<P, B, T> Service<P, B, T>
where
    P: Repository<Product>,
    B: Repository<ProductBrand>,
    T: Repository<ProductType>,
{
    pub fn new(
        product_repository: P,
        brand_repository: B,
        type_repository: T,
        criteria_builder: ProductCriteriaBuilder,
    ) -> Self {
        Self {
            product_repository,
            brand_repository,
            type_repository,
            criteria_builder,
        }
    }
}
