use std::collections::HashMap;
use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use storefront_core::domain::catalog::value_objects::ProductSpecParams;

use super::query_params::ShopQueryParams;

/// Product listing parameters taken from the URI. Never rejects: a query string
/// that fails to decode reads as no parameters at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopParamsExtractor(pub ShopQueryParams);

impl ShopParamsExtractor {
    fn from_query(query: Option<&str>) -> Self {
        let pairs = query
            .and_then(|raw| serde_urlencoded::from_str::<HashMap<String, String>>(raw).ok())
            .unwrap_or_default();

        Self(ShopQueryParams::from_query_map(&pairs))
    }

    pub fn into_params(self) -> ProductSpecParams {
        self.0.into_inner()
    }
}

impl<S> FromRequestParts<S> for ShopParamsExtractor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_query(parts.uri.query()))
    }
}
