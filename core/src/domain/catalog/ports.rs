use std::future::Future;

use crate::domain::{
    catalog::{
        entities::{Product, ProductBrand, ProductType},
        value_objects::{Pagination, ProductSpecParams},
    },
    common::entities::app_errors::CoreError,
};

pub trait CatalogService: Send + Sync {
    /// One page of products plus the total count of products matching the same filters.
    fn get_products(
        &self,
        params: ProductSpecParams,
    ) -> impl Future<Output = Result<Pagination<Product>, CoreError>> + Send;

    fn get_product(
        &self,
        product_id: i32,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;

    fn get_brands(&self) -> impl Future<Output = Result<Vec<ProductBrand>, CoreError>> + Send;

    fn get_types(&self) -> impl Future<Output = Result<Vec<ProductType>, CoreError>> + Send;
}
