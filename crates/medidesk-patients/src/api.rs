//! HTTP surface for the patient management service.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::patient::{Patient, PatientRecord, PatientUpdate};
use crate::store::{PatientStore, SortField, SortOrder, StoreError};

/// Shared router state: the file-backed store.
pub type SharedStore = Arc<PatientStore>;

/// Build the service router around an opened store.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/about", get(about))
        .route("/view", get(view))
        .route("/patient/:id", get(view_patient))
        .route("/sort", get(sort_patients))
        .route("/create", post(create_patient))
        .route("/edit/:id", put(update_patient))
        .route("/delete/:id", delete(delete_patient))
        .with_state(store)
}

/// Store error carried to the HTTP boundary.
struct ApiError(StoreError);

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Conflict(_)
            | StoreError::InvalidSortField(_)
            | StoreError::InvalidSortOrder(_) => StatusCode::BAD_REQUEST,
            StoreError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            StoreError::Io(_) | StoreError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let detail = match self.0 {
            // validation keeps the per-field messages
            StoreError::Validation(errors) => json!(errors),
            other => {
                if status == StatusCode::INTERNAL_SERVER_ERROR {
                    tracing::error!(error = %other, "store failure");
                }
                json!(other.to_string())
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Patient Management System API" }))
}

async fn about() -> Json<serde_json::Value> {
    Json(json!({ "message": "A fully functional API to manage patient records" }))
}

async fn view(
    State(store): State<SharedStore>,
) -> Result<Json<BTreeMap<String, PatientRecord>>, ApiError> {
    Ok(Json(store.list()?))
}

async fn view_patient(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<PatientRecord>, ApiError> {
    Ok(Json(store.get(&id)?))
}

#[derive(Debug, Deserialize)]
struct SortParams {
    sort_by: String,
    order: Option<String>,
}

async fn sort_patients(
    State(store): State<SharedStore>,
    Query(params): Query<SortParams>,
) -> Result<Json<Vec<PatientRecord>>, ApiError> {
    let field: SortField = params.sort_by.parse()?;
    let order: SortOrder = match params.order.as_deref() {
        Some(raw) => raw.parse()?,
        None => SortOrder::default(),
    };
    Ok(Json(store.sort(field, order)?))
}

async fn create_patient(
    State(store): State<SharedStore>,
    Json(patient): Json<Patient>,
) -> Result<Response, ApiError> {
    let (id, record) = patient.into_entry().map_err(StoreError::Validation)?;
    store.create(id.clone(), record)?;
    tracing::info!(%id, "patient created");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "patient record created" })),
    )
        .into_response())
}

async fn update_patient(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    Json(update): Json<PatientUpdate>,
) -> Result<Json<serde_json::Value>, ApiError> {
    store.update(&id, &update)?;
    tracing::info!(%id, "patient updated");
    Ok(Json(json!({ "message": "patient record updated" })))
}

async fn delete_patient(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    store.delete(&id)?;
    tracing::info!(%id, "patient deleted");
    Ok(Json(json!({ "message": "patient record deleted" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> (tempfile::TempDir, Router) {
        let dir = tempfile::tempdir().unwrap();
        let store = PatientStore::open(dir.path().join("patients.json")).unwrap();
        (dir, router(Arc::new(store)))
    }

    fn patient_body(id: &str) -> String {
        format!(
            r#"{{"id": "{id}", "name": "Ayesha", "city": "Lahore", "age": 28,
                "gender": "female", "height": 1.62, "weight": 58.0}}"#
        )
    }

    async fn send(router: Router, method: &str, uri: &str, body: Option<String>) -> (StatusCode, Value) {
        let request = match body {
            Some(body) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    #[tokio::test]
    async fn test_create_then_view_patient() {
        let (_dir, app) = app();

        let (status, _) = send(app.clone(), "POST", "/create", Some(patient_body("P001"))).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, value) = send(app, "GET", "/patient/P001", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["name"], "Ayesha");
        assert_eq!(value["bmi"], 22.1);
        assert_eq!(value["verdict"], "Normal");
    }

    #[tokio::test]
    async fn test_duplicate_create_is_bad_request() {
        let (_dir, app) = app();

        let (status, _) = send(app.clone(), "POST", "/create", Some(patient_body("P001"))).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, value) = send(app, "POST", "/create", Some(patient_body("P001"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(value["detail"].as_str().unwrap().contains("already exists"));
    }

    #[tokio::test]
    async fn test_missing_patient_is_not_found() {
        let (_dir, app) = app();
        let (status, _) = send(app, "GET", "/patient/P404", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_sort_field_is_bad_request() {
        let (_dir, app) = app();
        let (status, value) = send(app, "GET", "/sort?sort_by=name", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(value["detail"].as_str().unwrap().contains("invalid sort field"));
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_merged_record() {
        let (_dir, app) = app();

        let (status, _) = send(app.clone(), "POST", "/create", Some(patient_body("P001"))).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, value) = send(
            app,
            "PUT",
            "/edit/P001",
            Some(r#"{"age": 300}"#.to_string()),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(value["detail"][0].as_str().unwrap().contains("age"));
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let (_dir, app) = app();

        let (status, _) = send(app.clone(), "POST", "/create", Some(patient_body("P001"))).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, _) = send(app.clone(), "DELETE", "/delete/P001", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(app, "DELETE", "/delete/P001", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_root_and_about() {
        let (_dir, app) = app();

        let (status, value) = send(app.clone(), "GET", "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(value["message"].as_str().unwrap().contains("Patient Management"));

        let (status, _) = send(app, "GET", "/about", None).await;
        assert_eq!(status, StatusCode::OK);
    }
}
