use axum::extract::{Path, State};
use storefront_core::domain::catalog::ports::CatalogService;

use crate::application::http::{
    catalog::dtos::ProductToReturnDto,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "products",
    summary = "Get a product",
    description = "Get a single product with its brand and type by id",
    params(
        ("id" = i32, Path, description = "Product id"),
    ),
    responses(
        (status = 200, body = ProductToReturnDto),
        (status = 400, body = ApiErrorResponse, description = "Id is not an integer"),
        (status = 404, body = ApiErrorResponse, description = "Product not found")
    )
)]
pub async fn get_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<ProductToReturnDto>, ApiError> {
    let product_id = id
        .parse::<i32>()
        .map_err(|_| ApiError::BadRequest(format!("'{id}' is not a valid product id")))?;

    let product = state
        .service
        .get_product(product_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get product {}: {}", product_id, e);
            ApiError::from(e)
        })?
        .ok_or_else(|| ApiError::NotFound("A resource was not found".to_string()))?;

    Ok(Response::OK(ProductToReturnDto::from_product(
        product,
        &state.api_url,
    )))
}
