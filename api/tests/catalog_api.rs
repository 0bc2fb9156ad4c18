use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use serde_json::{Value, json};
use storefront_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use test_context::{AsyncTestContext, test_context};

struct CatalogContext {
    server: TestServer,
}

impl AsyncTestContext for CatalogContext {
    async fn setup() -> Self {
        let seed_file = concat!(env!("CARGO_MANIFEST_DIR"), "/seed/catalog.json");
        let args = Args::parse_from([
            "storefront-api",
            "--store",
            "memory",
            "--seed-file",
            seed_file,
            "--api-url",
            "http://localhost:5000",
        ]);

        let state = state(Arc::new(args)).await.unwrap();
        let server = TestServer::new(router(state).unwrap()).unwrap();

        Self { server }
    }
}

fn names(page: &Value) -> Vec<String> {
    page["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|product| product["name"].as_str().unwrap().to_string())
        .collect()
}

#[test_context(CatalogContext)]
#[tokio::test]
async fn test_default_listing_is_first_page_by_name(ctx: &mut CatalogContext) {
    let response = ctx.server.get("/products").await;

    response.assert_status_ok();
    let page = response.json::<Value>();

    assert_eq!(page["pageIndex"], json!(1));
    assert_eq!(page["pageSize"], json!(6));
    assert_eq!(page["count"], json!(18));
    assert_eq!(names(&page).len(), 6);
    assert_eq!(page["data"][0]["name"], json!("Angular Blue Boots"));
    assert_eq!(page["data"][0]["productBrand"], json!("Angular"));
    assert_eq!(page["data"][0]["productType"], json!("Boots"));
    assert_eq!(
        page["data"][0]["pictureUrl"],
        json!("http://localhost:5000/images/products/boot-ang1.png")
    );
}

#[test_context(CatalogContext)]
#[tokio::test]
async fn test_page_past_end_is_empty_with_full_count(ctx: &mut CatalogContext) {
    let response = ctx.server.get("/products?pageIndex=4").await;

    response.assert_status_ok();
    let page = response.json::<Value>();

    assert_eq!(page["count"], json!(18));
    assert_eq!(page["pageIndex"], json!(4));
    assert!(names(&page).is_empty());
}

#[test_context(CatalogContext)]
#[tokio::test]
async fn test_malformed_values_are_ignored(ctx: &mut CatalogContext) {
    let malformed = ctx
        .server
        .get("/products?pageSize=abc&brandId=x&pageIndex=")
        .await;
    let plain = ctx.server.get("/products").await;

    malformed.assert_status_ok();
    assert_eq!(malformed.json::<Value>(), plain.json::<Value>());
}

#[test_context(CatalogContext)]
#[tokio::test]
async fn test_brand_and_type_filters_combine(ctx: &mut CatalogContext) {
    let page = ctx
        .server
        .get("/products?brandId=2&typeId=1")
        .await
        .json::<Value>();

    assert_eq!(page["count"], json!(2));
    assert_eq!(
        names(&page),
        vec!["Core Board Speed Rush 3", "Net Core Super Board"]
    );
}

#[test_context(CatalogContext)]
#[tokio::test]
async fn test_search_ignores_case(ctx: &mut CatalogContext) {
    let page = ctx.server.get("/products?search=BOOTS").await.json::<Value>();

    assert_eq!(page["count"], json!(5));
}

#[test_context(CatalogContext)]
#[tokio::test]
async fn test_price_desc_starts_with_most_expensive(ctx: &mut CatalogContext) {
    let page = ctx
        .server
        .get("/products?sort=priceDesc&pageSize=3")
        .await
        .json::<Value>();

    assert_eq!(page["data"][0]["name"], json!("Net Core Super Board"));
    assert_eq!(page["data"][0]["price"], json!(300.0));
}

#[test_context(CatalogContext)]
#[tokio::test]
async fn test_page_size_is_capped(ctx: &mut CatalogContext) {
    let page = ctx.server.get("/products?pageSize=1000").await.json::<Value>();

    assert_eq!(page["pageSize"], json!(50));
    assert_eq!(names(&page).len(), 18);
}

#[test_context(CatalogContext)]
#[tokio::test]
async fn test_get_product_by_id(ctx: &mut CatalogContext) {
    let response = ctx.server.get("/products/15").await;

    response.assert_status_ok();
    let product = response.json::<Value>();

    assert_eq!(product["name"], json!("Core Red Boots"));
    assert_eq!(product["productBrand"], json!("NetCore"));
}

#[test_context(CatalogContext)]
#[tokio::test]
async fn test_unknown_product_is_not_found(ctx: &mut CatalogContext) {
    let response = ctx.server.get("/products/42").await;

    response.assert_status_not_found();
    let body = response.json::<Value>();

    assert_eq!(body["statusCode"], json!(404));
    assert!(body["message"].is_string());
}

#[test_context(CatalogContext)]
#[tokio::test]
async fn test_non_numeric_id_is_bad_request(ctx: &mut CatalogContext) {
    let response = ctx.server.get("/products/abc").await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["statusCode"], json!(400));
}

#[test_context(CatalogContext)]
#[tokio::test]
async fn test_lookups_are_unfiltered(ctx: &mut CatalogContext) {
    let brands = ctx.server.get("/products/brands").await.json::<Value>();
    let types = ctx.server.get("/products/types").await.json::<Value>();

    assert_eq!(brands.as_array().unwrap().len(), 6);
    assert_eq!(types.as_array().unwrap().len(), 4);
    assert_eq!(types[0], json!({ "id": 1, "name": "Boards" }));
}
