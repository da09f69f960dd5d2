//! HTTP client forwarding chunks to the downstream relay.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

/// Destination for a document's text chunks.
///
/// Implementations never fail: problems on the way are folded into the
/// returned payload.
#[async_trait]
pub trait Relay: Send + Sync {
    /// Forward `chunks` and return the downstream payload.
    async fn send_chunks(&self, chunks: &[String]) -> Value;
}

/// Payload reported when there is nothing to send.
pub fn no_chunks_payload() -> Value {
    json!({ "note": "no chunks" })
}

/// Request payload for the relay.
#[derive(Debug, Serialize)]
struct UploadChunksRequest<'a> {
    chunks: &'a [String],
}

/// Client for the downstream upload-chunks endpoint.
pub struct HttpRelayClient {
    client: Client,
    url: String,
}

impl HttpRelayClient {
    /// Create a new relay client posting to `url`.
    pub fn new(url: &str) -> reqwest::Result<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl Relay for HttpRelayClient {
    async fn send_chunks(&self, chunks: &[String]) -> Value {
        if chunks.is_empty() {
            return no_chunks_payload();
        }

        info!(chunk_count = chunks.len(), url = %self.url, "Sending chunks to relay");

        let response = match self
            .client
            .post(&self.url)
            .json(&UploadChunksRequest { chunks })
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, url = %self.url, "Relay request failed");
                return json!({ "status_code": null, "text": e.to_string() });
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, status = status.as_u16(), "Failed to read relay response");
                return json!({ "status_code": status.as_u16(), "text": e.to_string() });
            }
        };

        match serde_json::from_str::<Value>(&text) {
            Ok(payload) => {
                debug!(status = status.as_u16(), "Relay responded");
                payload
            }
            Err(_) => {
                warn!(status = status.as_u16(), "Relay response is not JSON");
                json!({ "status_code": status.as_u16(), "text": text })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::post, Json, Router};
    use pretty_assertions::assert_eq;

    async fn spawn_server(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/api/upload-chunks", addr)
    }

    #[tokio::test]
    async fn test_json_response_passed_through() {
        let app = Router::new().route(
            "/api/upload-chunks",
            post(|Json(body): Json<Value>| async move {
                let count = body["chunks"].as_array().map_or(0, |a| a.len());
                Json(json!({ "status": "ok", "processed": count }))
            }),
        );
        let url = spawn_server(app).await;

        let client = HttpRelayClient::new(&url).unwrap();
        let payload = client
            .send_chunks(&["a".to_string(), "b".to_string()])
            .await;

        assert_eq!(payload, json!({ "status": "ok", "processed": 2 }));
    }

    #[tokio::test]
    async fn test_non_json_response_degraded() {
        let app = Router::new().route(
            "/api/upload-chunks",
            post(|| async { (axum::http::StatusCode::BAD_GATEWAY, "upstream exploded") }),
        );
        let url = spawn_server(app).await;

        let client = HttpRelayClient::new(&url).unwrap();
        let payload = client.send_chunks(&["a".to_string()]).await;

        assert_eq!(payload, json!({ "status_code": 502, "text": "upstream exploded" }));
    }

    #[tokio::test]
    async fn test_unreachable_relay_degraded() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpRelayClient::new(&format!("http://{}/api/upload-chunks", addr)).unwrap();
        let payload = client.send_chunks(&["a".to_string()]).await;

        assert!(payload["status_code"].is_null());
        assert!(payload["text"].as_str().map_or(false, |t| !t.is_empty()));
    }

    #[tokio::test]
    async fn test_empty_chunks_skip_network() {
        let client = HttpRelayClient::new("http://127.0.0.1:9/never").unwrap();
        assert_eq!(client.send_chunks(&[]).await, no_chunks_payload());
    }
}
