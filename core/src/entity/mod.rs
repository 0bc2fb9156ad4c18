pub mod product_brands;
pub mod product_types;
pub mod products;
