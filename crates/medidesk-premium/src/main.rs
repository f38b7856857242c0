//! Premium prediction server entry point.

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use medidesk_premium::api;
use medidesk_premium::classifier::ScorecardClassifier;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let addr = std::env::var("MEDIDESK_PREMIUM_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8000".to_string());

    let classifier = Arc::new(ScorecardClassifier::new());
    let app = api::router(classifier);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("premium server listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
