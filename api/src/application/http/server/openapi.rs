use crate::application::http::catalog::router::CatalogApiDoc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API"
    ),
    nest(
        (path = "/products", api = CatalogApiDoc),
    )
)]
pub struct ApiDoc;
