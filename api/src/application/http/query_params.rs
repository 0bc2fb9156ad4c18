use std::collections::HashMap;

use storefront_core::domain::catalog::value_objects::ProductSpecParams;

/// Product listing parameters read from a raw query map.
///
/// Keys are matched case-insensitively. Values that do not parse are
/// dropped, so `pageSize=abc` behaves exactly like an absent `pageSize`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopQueryParams(pub ProductSpecParams);

impl ShopQueryParams {
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        let mut params = ProductSpecParams::default();

        for (key, value) in query_map {
            match key.to_ascii_lowercase().as_str() {
                "brandid" => params.brand_id = parse_number(value),
                "typeid" => params.type_id = parse_number(value),
                "search" => params.search = Some(value.clone()),
                "sort" => params.sort = Some(value.clone()),
                "pageindex" => params.page_index = parse_number(value),
                "pagesize" => params.page_size = parse_number(value),
                _ => {}
            }
        }

        Self(params)
    }

    pub fn into_inner(self) -> ProductSpecParams {
        self.0
    }
}

fn parse_number(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}
