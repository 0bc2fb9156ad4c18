pub mod get_brands;
pub mod get_product;
pub mod get_products;
pub mod get_types;
