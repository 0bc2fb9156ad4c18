use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use storefront_core::domain::catalog::{entities::Product, value_objects::Pagination};
use url::Url;
use utoipa::ToSchema;

/// Product as exposed to clients: relations flattened to their names.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductToReturnDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub picture_url: String,
    pub product_type: String,
    pub product_brand: String,
}

impl ProductToReturnDto {
    pub fn from_product(product: Product, api_url: &Url) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            picture_url: resolve_picture_url(api_url, &product.picture_url),
            product_type: product.product_type.map(|t| t.name).unwrap_or_default(),
            product_brand: product.product_brand.map(|b| b.name).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetProductsResponse {
    pub page_index: u64,
    pub page_size: u64,
    pub count: u64,
    pub data: Vec<ProductToReturnDto>,
}

impl From<Pagination<ProductToReturnDto>> for GetProductsResponse {
    fn from(page: Pagination<ProductToReturnDto>) -> Self {
        Self {
            page_index: page.page_index,
            page_size: page.page_size,
            count: page.count,
            data: page.data,
        }
    }
}

fn resolve_picture_url(api_url: &Url, picture_url: &str) -> String {
    if picture_url.is_empty() {
        return String::new();
    }

    api_url
        .join(picture_url)
        .map(|url| url.to_string())
        .unwrap_or_else(|_| picture_url.to_string())
}
