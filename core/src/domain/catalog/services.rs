use tracing::instrument;

use crate::domain::{
    catalog::{
        entities::{Product, ProductBrand, ProductType},
        ports::CatalogService,
        value_objects::{Pagination, ProductQuery, ProductSpecParams},
    },
    common::{entities::app_errors::CoreError, services::Service},
    specification::Repository,
};

impl<P, B, T> CatalogService for Service<P, B, T>
where
    P: Repository<Product>,
    B: Repository<ProductBrand>,
    T: Repository<ProductType>,
{
    #[instrument(skip(self))]
    async fn get_products(
        &self,
        params: ProductSpecParams,
    ) -> Result<Pagination<Product>, CoreError> {
        let ProductQuery {
            criteria,
            page_index,
            page_size,
        } = self.criteria_builder.build(&params);

        // Count and page are separate round trips against the same filters.
        let count = self
            .product_repository
            .count_by_specification(&criteria)
            .await?;

        let data = self
            .product_repository
            .list_by_specification(&criteria)
            .await?;

        Ok(Pagination {
            page_index,
            page_size,
            count,
            data,
        })
    }

    #[instrument(skip(self))]
    async fn get_product(&self, product_id: i32) -> Result<Option<Product>, CoreError> {
        let criteria = self.criteria_builder.build_by_id(product_id);

        self.product_repository.get_by_specification(&criteria).await
    }

    async fn get_brands(&self) -> Result<Vec<ProductBrand>, CoreError> {
        self.brand_repository.list_all().await
    }

    async fn get_types(&self) -> Result<Vec<ProductType>, CoreError> {
        self.type_repository.list_all().await
    }
}
