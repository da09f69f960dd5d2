//! HTTP API of the uploader service.

pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use handlers::AppState;

/// Build the service routes.
pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Processing
        .route("/process-file", post(handlers::process_single_file))
        .route("/process", post(handlers::process_all_files))
        // State
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Relay;
    use crate::types::UploaderConfig;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    #[derive(Default)]
    struct CountingRelay {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Relay for CountingRelay {
        async fn send_chunks(&self, chunks: &[String]) -> Value {
            self.calls.fetch_add(1, Ordering::SeqCst);
            json!({ "status": "ok", "processed": chunks.len() })
        }
    }

    fn app(dir: &std::path::Path, relay: Arc<CountingRelay>) -> Router {
        let config = UploaderConfig::default().with_docs_dir(dir);
        routes(Arc::new(AppState::new(config, relay)))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn process_file_request(filename: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/process-file")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "filename": filename }).to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_process_file_relays_chunks() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("stew.md"), "# Stew\n\nBrown the beef first.").unwrap();
        let relay = Arc::new(CountingRelay::default());

        let (status, body) = send(app(dir.path(), relay.clone()), process_file_request("stew.md")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "processed_chunks": ["Stew\n\nBrown the beef first."],
                "next_response": { "status": "ok", "processed": 1 }
            })
        );
        assert_eq!(relay.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_process_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let relay = Arc::new(CountingRelay::default());

        let (status, body) =
            send(app(dir.path(), relay.clone()), process_file_request("missing.md")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "detail": "File not found: missing.md" }));
        assert_eq!(relay.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_process_file_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sheet.xlsx"), "binary").unwrap();
        let relay = Arc::new(CountingRelay::default());

        let (status, body) =
            send(app(dir.path(), relay.clone()), process_file_request("sheet.xlsx")).await;

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body, json!({ "detail": "Unsupported file type: .xlsx" }));
        assert_eq!(relay.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_process_file_parse_failure() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.docx"), "not a zip archive").unwrap();
        let relay = Arc::new(CountingRelay::default());

        let (status, body) =
            send(app(dir.path(), relay.clone()), process_file_request("broken.docx")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.starts_with("Failed to parse '"), "{detail}");
        assert!(detail.contains("broken.docx"), "{detail}");
        assert_eq!(relay.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_process_file_without_chunks() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("empty.md"), "\n\n").unwrap();
        let relay = Arc::new(CountingRelay::default());

        let (status, body) =
            send(app(dir.path(), relay.clone()), process_file_request("empty.md")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "processed_chunks": [] }));
        assert_eq!(relay.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_process_all() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("soup.txt"), "Simmer for an hour.").unwrap();
        fs::write(dir.path().join("data.xyz"), "??").unwrap();
        let relay = Arc::new(CountingRelay::default());

        let request = Request::builder()
            .method("POST")
            .uri("/process")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(dir.path(), relay.clone()), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "processed": [
                    {
                        "file": "soup.txt",
                        "processed": 1,
                        "next_response": { "status": "ok", "processed": 1 }
                    },
                    { "file": "data.xyz", "error": "Unsupported file type: .xyz" }
                ]
            })
        );
        assert_eq!(relay.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

        let (status, body) = send(app(dir.path(), Arc::default()), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }
}
