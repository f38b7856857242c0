//! HTTP surface for the premium prediction service.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::applicant::Applicant;
use crate::classifier::Classifier;
use crate::PremiumError;

/// Shared router state: the injected premium model.
pub type SharedClassifier = Arc<dyn Classifier>;

#[derive(Debug, Serialize)]
struct PredictionResponse {
    predicted_category: String,
}

/// Build the service router around an injected classifier.
///
/// CORS is open so the companion form UI can call the endpoint directly.
pub fn router(classifier: SharedClassifier) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/predict", post(predict))
        .layer(cors)
        .with_state(classifier)
}

async fn health() -> &'static str {
    "ok"
}

async fn predict(
    State(classifier): State<SharedClassifier>,
    Json(applicant): Json<Applicant>,
) -> Response {
    match crate::predict(&applicant, classifier.as_ref()) {
        Ok(predicted_category) => {
            tracing::info!(category = %predicted_category, "prediction served");
            (
                StatusCode::OK,
                Json(PredictionResponse { predicted_category }),
            )
                .into_response()
        }
        Err(PremiumError::Validation(errors)) => {
            tracing::warn!(?errors, "rejected applicant");
            let payload = json!({ "detail": errors });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}
