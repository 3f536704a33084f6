//! HTTP surface of the feedback service.
//!
//! | Method | Path            | Success                  | Failure               |
//! |--------|-----------------|--------------------------|-----------------------|
//! | POST   | `/api/feedback` | `201 {"message": ...}`   | `500 {"error": ...}`  |
//! | GET    | `/api/feedback` | `200 [record, ...]`      | `500 {"error": ...}`  |
//!
//! Validation and storage failures share the same response; the distinct cause
//! only shows up in the server log.

use super::store::SqliteStore;
use super::{FeedbackError, FeedbackRecord, FeedbackSubmission, FEEDBACK_PATH};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

pub const SUBMIT_OK: &str = "Feedback submitted successfully";
pub const SUBMIT_FAILED: &str = "Failed to submit feedback";
pub const LIST_FAILED: &str = "Failed to fetch feedback";

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// Generic 500 with an `{"error": ...}` body
#[derive(Debug)]
pub struct ApiError {
    message: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": self.message }))).into_response()
    }
}

fn log_failure(operation: &str, err: &FeedbackError) {
    if err.is_validation() {
        warn!(operation, error = %err, "feedback request rejected");
    } else {
        error!(operation, error = %err, "feedback storage failed");
    }
}

async fn submit_feedback(
    State(store): State<SqliteStore>,
    body: Result<Json<FeedbackSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageBody>), ApiError> {
    let Json(submission) = body.map_err(|rejection| {
        warn!(error = %rejection, "unreadable feedback body");
        ApiError { message: SUBMIT_FAILED }
    })?;

    let result = match submission.validate() {
        Ok(valid) => store.insert(valid).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(record) => {
            info!(id = %record.id, "feedback stored");
            Ok((
                StatusCode::CREATED,
                Json(MessageBody { message: SUBMIT_OK.to_string() }),
            ))
        }
        Err(e) => {
            log_failure("submit", &e);
            Err(ApiError { message: SUBMIT_FAILED })
        }
    }
}

async fn list_feedback(
    State(store): State<SqliteStore>,
) -> Result<Json<Vec<FeedbackRecord>>, ApiError> {
    match store.list().await {
        Ok(records) => Ok(Json(records)),
        Err(e) => {
            log_failure("list", &e);
            Err(ApiError { message: LIST_FAILED })
        }
    }
}

async fn health() -> &'static str {
    "ok"
}

/// Routes without middleware.
pub fn router(store: SqliteStore) -> Router {
    Router::new()
        .route(FEEDBACK_PATH, post(submit_feedback).get(list_feedback))
        .route("/health", get(health))
        .with_state(store)
}

/// CORS for the browser client: a single origin when configured, any otherwise.
pub fn cors_layer(allow_origin: Option<HeaderValue>) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);
    match allow_origin {
        Some(origin) => layer.allow_origin(origin),
        None => layer.allow_origin(Any),
    }
}

/// Full application: routes plus request tracing and CORS.
pub fn app(store: SqliteStore, allow_origin: Option<HeaderValue>) -> Router {
    router(store)
        .layer(cors_layer(allow_origin))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn memory_store() -> SqliteStore {
        SqliteStore::in_memory().await.unwrap()
    }

    fn post_json(body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(FEEDBACK_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_list() -> Request<Body> {
        Request::builder().uri(FEEDBACK_PATH).body(Body::empty()).unwrap()
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn ada() -> Value {
        json!({ "name": "Ada", "designation": "Prof", "institute": "X", "query": "Q" })
    }

    #[tokio::test]
    async fn test_submit_then_list() {
        let app = router(memory_store().await);

        let (status, body) = send(&app, post_json(ada())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({ "message": SUBMIT_OK }));

        let (status, body) = send(&app, get_list()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["name"], "Ada");
        assert!(body[0]["id"].is_string());
        assert!(body[0]["createdAt"].is_string());
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let app = router(memory_store().await);
        for name in ["A", "B", "C"] {
            let mut body = ada();
            body["name"] = json!(name);
            let (status, _) = send(&app, post_json(body)).await;
            assert_eq!(status, StatusCode::CREATED);
        }
        let (_, body) = send(&app, get_list()).await;
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[tokio::test]
    async fn test_empty_list() {
        let app = router(memory_store().await);
        let (status, body) = send(&app, get_list()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_missing_required_field_is_500() {
        let store = memory_store().await;
        let app = router(store.clone());
        for field in ["name", "designation", "institute", "query"] {
            let mut body = ada();
            body.as_object_mut().unwrap().remove(field);
            let (status, body) = send(&app, post_json(body)).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "missing {}", field);
            assert_eq!(body, json!({ "error": SUBMIT_FAILED }));
        }
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_optional_fields_round_trip() {
        let app = router(memory_store().await);
        let mut body = ada();
        body["suggestion"] = json!("More field lines");
        body["platformDiscovery"] = json!("Search engine");
        send(&app, post_json(body)).await;

        let (_, listed) = send(&app, get_list()).await;
        assert_eq!(listed[0]["suggestion"], "More field lines");
        assert_eq!(listed[0]["platformDiscovery"], "Search engine");
    }

    #[tokio::test]
    async fn test_unreadable_body_is_500() {
        let app = router(memory_store().await);
        let req = Request::builder()
            .method(Method::POST)
            .uri(FEEDBACK_PATH)
            .body(Body::from("name=Ada"))
            .unwrap();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], SUBMIT_FAILED);
    }

    #[tokio::test]
    async fn test_storage_failure_looks_like_validation_failure() {
        let store = memory_store().await;
        store.close().await;
        let app = router(store);
        let (status, body) = send(&app, post_json(ada())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": SUBMIT_FAILED }));

        let (status, body) = send(&app, get_list()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": LIST_FAILED }));
    }

    #[tokio::test]
    async fn test_health_and_cors() {
        let app = app(memory_store().await, None);
        let req = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, "http://localhost:8081")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }
}
