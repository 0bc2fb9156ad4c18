use axum::extract::State;
use storefront_core::domain::catalog::{entities::ProductType, ports::CatalogService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/types",
    tag = "products",
    summary = "List product types",
    responses(
        (status = 200, body = Vec<ProductType>)
    )
)]
pub async fn get_types(
    State(state): State<AppState>,
) -> Result<Response<Vec<ProductType>>, ApiError> {
    let types = state.service.get_types().await.map_err(|e| {
        tracing::error!("Failed to list types: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(types))
}
