use std::sync::Arc;

use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use clap::Parser;
use storefront_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logger(args: &Args) {
    let filter = EnvFilter::try_new(&args.log.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if args.log.json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args);

    let state = state(args.clone()).await?;

    // Installed here only: the recorder is process-global.
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
    let app = router(state)?
        .route(
            &format!("{}/metrics", args.server.root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(prometheus_layer);

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("storefront api listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
