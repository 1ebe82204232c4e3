pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/upload", post(handlers::handle_upload))
        .route("/api/v1/parse", post(handlers::handle_parse))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route("/api/v1/score", post(handlers::handle_score))
        .route(
            "/api/v1/results/:analysis_id",
            get(handlers::handle_get_results),
        )
        .route(
            "/api/v1/batch-compare",
            post(handlers::handle_batch_compare),
        )
        .route(
            "/api/v1/generate-cover-letter",
            post(handlers::handle_cover_letter),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::service;
    use crate::config::{Config, RecordBackend};
    use crate::store::{MemoryStore, RecordStore};

    fn test_state(store: Arc<MemoryStore>) -> AppState {
        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::new("test", "test", None, None, "test"))
            .endpoint_url("http://localhost:9000")
            .force_path_style(true)
            .build();

        AppState {
            store,
            s3: aws_sdk_s3::Client::from_conf(s3_config),
            config: Config {
                record_store: RecordBackend::Memory,
                database_url: None,
                s3_bucket: "resumes".to_string(),
                s3_endpoint: "http://localhost:9000".to_string(),
                aws_access_key_id: "test".to_string(),
                aws_secret_access_key: "test".to_string(),
                port: 0,
                rust_log: "info".to_string(),
                upload_url_ttl: Duration::from_secs(3600),
            },
        }
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state(Arc::new(MemoryStore::new())));
        let (status, body) = send(app, get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_results_not_found() {
        let app = build_router(test_state(Arc::new(MemoryStore::new())));
        let (status, body) = send(app, get_request("/api/v1/results/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_score_then_fetch_results() {
        let store = Arc::new(MemoryStore::new());
        let record = service::parse_and_store(
            store.as_ref(),
            "resumes/cv.txt",
            "Developer, 4 years of experience. Skills: Python, Docker".to_string(),
        )
        .await
        .unwrap();
        let state = test_state(store.clone());

        let (status, body) = send(
            build_router(state.clone()),
            post_json(
                "/api/v1/score",
                json!({"analysis_id": &record.analysis_id, "job_description": "Python and Docker, 3+ years"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["analysis_id"], record.analysis_id.as_str());
        let score = body["results"]["compatibility_score"].as_f64().unwrap();
        assert!((0.0..=100.0).contains(&score));

        let uri = format!("/api/v1/results/{}", record.analysis_id);
        let (status, body) = send(build_router(state), get_request(&uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["analysis"]["status"], "completed");
        assert_eq!(body["analysis"]["score"].as_f64(), Some(score));
        assert!(store.get(&record.analysis_id).await.unwrap().feedback.is_some());
    }

    #[tokio::test]
    async fn test_score_requires_fields() {
        let app = build_router(test_state(Arc::new(MemoryStore::new())));
        let (status, body) = send(app, post_json("/api/v1/score", json!({"analysis_id": "x"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_batch_compare_needs_two_jobs() {
        let app = build_router(test_state(Arc::new(MemoryStore::new())));
        let request = post_json(
            "/api/v1/batch-compare",
            json!({"resume_key": "cv.pdf", "jobs": [{"title": "Only", "description": "Rust"}]}),
        );
        let (status, _) = send(app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_issues_presigned_url() {
        let app = build_router(test_state(Arc::new(MemoryStore::new())));
        let (status, body) = send(
            app,
            post_json("/api/v1/upload", json!({"filename": "cv.pdf"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let key = body["key"].as_str().unwrap();
        assert!(key.starts_with("resumes/") && key.ends_with("_cv.pdf"));
        assert_eq!(body["bucket"], "resumes");
        assert!(body["upload_url"].as_str().unwrap().contains("X-Amz-Signature"));
    }
}
