use std::collections::{BTreeSet, HashMap};

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::domain::catalog::entities::{
    LookupField, NoRelation, Product, ProductBrand, ProductField, ProductRelation, ProductType,
};
use crate::entity::{product_brands, product_types, products};
use crate::infrastructure::db::{PostgresRepository, SqlSpecifiable};

pub type PostgresProductRepository = PostgresRepository<Product>;
pub type PostgresProductBrandRepository = PostgresRepository<ProductBrand>;
pub type PostgresProductTypeRepository = PostgresRepository<ProductType>;

impl SqlSpecifiable for Product {
    type Entity = products::Entity;

    fn column(field: ProductField) -> products::Column {
        match field {
            ProductField::Id => products::Column::Id,
            ProductField::Name => products::Column::Name,
            ProductField::Price => products::Column::Price,
            ProductField::BrandId => products::Column::ProductBrandId,
            ProductField::TypeId => products::Column::ProductTypeId,
        }
    }

    async fn load_relations(
        db: &DatabaseConnection,
        rows: &mut [Product],
        relations: &[ProductRelation],
    ) -> Result<(), DbErr> {
        if rows.is_empty() {
            return Ok(());
        }

        for relation in relations {
            match relation {
                ProductRelation::Brand => {
                    let ids: BTreeSet<i32> = rows.iter().map(|p| p.product_brand_id).collect();
                    let brands: HashMap<i32, ProductBrand> = product_brands::Entity::find()
                        .filter(product_brands::Column::Id.is_in(ids))
                        .all(db)
                        .await?
                        .into_iter()
                        .map(|model| (model.id, ProductBrand::from(model)))
                        .collect();

                    for row in rows.iter_mut() {
                        row.product_brand = brands.get(&row.product_brand_id).cloned();
                    }
                }
                ProductRelation::Type => {
                    let ids: BTreeSet<i32> = rows.iter().map(|p| p.product_type_id).collect();
                    let types: HashMap<i32, ProductType> = product_types::Entity::find()
                        .filter(product_types::Column::Id.is_in(ids))
                        .all(db)
                        .await?
                        .into_iter()
                        .map(|model| (model.id, ProductType::from(model)))
                        .collect();

                    for row in rows.iter_mut() {
                        row.product_type = types.get(&row.product_type_id).cloned();
                    }
                }
            }
        }

        Ok(())
    }
}

impl SqlSpecifiable for ProductBrand {
    type Entity = product_brands::Entity;

    fn column(field: LookupField) -> product_brands::Column {
        match field {
            LookupField::Id => product_brands::Column::Id,
            LookupField::Name => product_brands::Column::Name,
        }
    }

    async fn load_relations(
        _db: &DatabaseConnection,
        _rows: &mut [ProductBrand],
        _relations: &[NoRelation],
    ) -> Result<(), DbErr> {
        Ok(())
    }
}

impl SqlSpecifiable for ProductType {
    type Entity = product_types::Entity;

    fn column(field: LookupField) -> product_types::Column {
        match field {
            LookupField::Id => product_types::Column::Id,
            LookupField::Name => product_types::Column::Name,
        }
    }

    async fn load_relations(
        _db: &DatabaseConnection,
        _rows: &mut [ProductType],
        _relations: &[NoRelation],
    ) -> Result<(), DbErr> {
        Ok(())
    }
}
