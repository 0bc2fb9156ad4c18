use super::handlers::{
    get_brands::{__path_get_brands, get_brands},
    get_product::{__path_get_product, get_product},
    get_products::{__path_get_products, get_products},
    get_types::{__path_get_types, get_types},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_products, get_product, get_brands, get_types))]
pub struct CatalogApiDoc;

pub fn catalog_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/products", root_path), get(get_products))
        .route(&format!("{}/products/brands", root_path), get(get_brands))
        .route(&format!("{}/products/types", root_path), get(get_types))
        .route(&format!("{}/products/{{id}}", root_path), get(get_product))
}
