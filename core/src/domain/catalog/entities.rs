use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::specification::{FieldValue, Specifiable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductBrand {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductType {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub picture_url: String,
    pub product_type_id: i32,
    pub product_brand_id: i32,
    /// Populated only when [`ProductRelation::Type`] was included.
    pub product_type: Option<ProductType>,
    /// Populated only when [`ProductRelation::Brand`] was included.
    pub product_brand: Option<ProductBrand>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Id,
    Name,
    Price,
    BrandId,
    TypeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductRelation {
    Brand,
    Type,
}

/// Lookup tables carry no relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoRelation {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupField {
    Id,
    Name,
}

impl Specifiable for Product {
    type Field = ProductField;
    type Relation = ProductRelation;

    const KEY: ProductField = ProductField::Id;
    const RELATIONS: &'static [ProductRelation] = &[ProductRelation::Brand, ProductRelation::Type];

    fn value_of(&self, field: ProductField) -> FieldValue {
        match field {
            ProductField::Id => self.id.into(),
            ProductField::Name => self.name.as_str().into(),
            ProductField::Price => self.price.into(),
            ProductField::BrandId => self.product_brand_id.into(),
            ProductField::TypeId => self.product_type_id.into(),
        }
    }

    fn detach(&mut self, relation: ProductRelation) {
        match relation {
            ProductRelation::Brand => self.product_brand = None,
            ProductRelation::Type => self.product_type = None,
        }
    }
}

impl Specifiable for ProductBrand {
    type Field = LookupField;
    type Relation = NoRelation;

    const KEY: LookupField = LookupField::Id;
    const RELATIONS: &'static [NoRelation] = &[];

    fn value_of(&self, field: LookupField) -> FieldValue {
        match field {
            LookupField::Id => self.id.into(),
            LookupField::Name => self.name.as_str().into(),
        }
    }

    fn detach(&mut self, relation: NoRelation) {
        match relation {}
    }
}

impl Specifiable for ProductType {
    type Field = LookupField;
    type Relation = NoRelation;

    const KEY: LookupField = LookupField::Id;
    const RELATIONS: &'static [NoRelation] = &[];

    fn value_of(&self, field: LookupField) -> FieldValue {
        match field {
            LookupField::Id => self.id.into(),
            LookupField::Name => self.name.as_str().into(),
        }
    }

    fn detach(&mut self, relation: NoRelation) {
        match relation {}
    }
}
