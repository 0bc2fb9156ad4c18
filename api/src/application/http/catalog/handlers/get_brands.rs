use axum::extract::State;
use storefront_core::domain::catalog::{entities::ProductBrand, ports::CatalogService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/brands",
    tag = "products",
    summary = "List product brands",
    responses(
        (status = 200, body = Vec<ProductBrand>)
    )
)]
pub async fn get_brands(
    State(state): State<AppState>,
) -> Result<Response<Vec<ProductBrand>>, ApiError> {
    let brands = state.service.get_brands().await.map_err(|e| {
        tracing::error!("Failed to list brands: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(brands))
}
