use axum::extract::State;
use storefront_core::domain::catalog::ports::CatalogService;

use crate::application::http::{
    catalog::dtos::{GetProductsResponse, ProductToReturnDto},
    query_extractor::ShopParamsExtractor,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "products",
    summary = "List products",
    description = "One page of products matching the optional brand, type and name filters, with the total match count. Unparseable values are ignored.",
    params(
        ("brandId" = Option<i64>, Query, description = "Brand id, 0 or absent for all brands"),
        ("typeId" = Option<i64>, Query, description = "Type id, 0 or absent for all types"),
        ("search" = Option<String>, Query, description = "Case-insensitive name substring"),
        ("sort" = Option<String>, Query, description = "name, priceAsc or priceDesc"),
        ("pageIndex" = Option<i64>, Query, description = "1-based page number"),
        ("pageSize" = Option<i64>, Query, description = "Items per page, capped by the server"),
    ),
    responses(
        (status = 200, body = GetProductsResponse)
    )
)]
pub async fn get_products(
    State(state): State<AppState>,
    params: ShopParamsExtractor,
) -> Result<Response<GetProductsResponse>, ApiError> {
    let page = state
        .service
        .get_products(params.into_params())
        .await
        .map_err(|e| {
            tracing::error!("Failed to list products: {}", e);
            ApiError::from(e)
        })?;

    let page = page.map(|product| ProductToReturnDto::from_product(product, &state.api_url));

    Ok(Response::OK(GetProductsResponse::from(page)))
}
