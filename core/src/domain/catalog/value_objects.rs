use serde::{Deserialize, Serialize};

use crate::domain::{catalog::entities::Product, specification::Criteria};

/// Raw product listing parameters as supplied by a client. Nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductSpecParams {
    pub brand_id: Option<i64>,
    pub type_id: Option<i64>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub page_index: Option<i64>,
    pub page_size: Option<i64>,
}

/// Criteria for one listing call plus the effective paging values it was built from.
#[derive(Debug, Clone)]
pub struct ProductQuery {
    pub criteria: Criteria<Product>,
    pub page_index: u64,
    pub page_size: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination<T> {
    pub page_index: u64,
    pub page_size: u64,
    /// Total matching entities before paging.
    pub count: u64,
    pub data: Vec<T>,
}

impl<T> Pagination<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Pagination<U> {
        Pagination {
            page_index: self.page_index,
            page_size: self.page_size,
            count: self.count,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}
