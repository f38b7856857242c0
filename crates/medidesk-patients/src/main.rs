//! Patient management server entry point.

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use medidesk_patients::api;
use medidesk_patients::store::PatientStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let addr = std::env::var("MEDIDESK_PATIENTS_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8001".to_string());
    let file = std::env::var("MEDIDESK_PATIENTS_FILE")
        .unwrap_or_else(|_| "patients.json".to_string());

    let store = Arc::new(PatientStore::open(&file)?);
    let app = api::router(store);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("patients server listening on http://{addr}, store at {file}");
    axum::serve(listener, app).await?;

    Ok(())
}
