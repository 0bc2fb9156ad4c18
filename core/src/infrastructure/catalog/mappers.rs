use crate::domain::catalog::entities::{Product, ProductBrand, ProductType};
use crate::entity::{product_brands, product_types, products};

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Product {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            picture_url: model.picture_url,
            product_type_id: model.product_type_id,
            product_brand_id: model.product_brand_id,
            product_type: None,
            product_brand: None,
        }
    }
}

impl From<product_brands::Model> for ProductBrand {
    fn from(model: product_brands::Model) -> Self {
        ProductBrand {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<product_types::Model> for ProductType {
    fn from(model: product_types::Model) -> Self {
        ProductType {
            id: model.id,
            name: model.name,
        }
    }
}
