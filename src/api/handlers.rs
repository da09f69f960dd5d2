//! HTTP request handlers for the uploader service.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::batch::{BatchConfig, BatchProcessor};
use crate::error::Result;
use crate::output::Relay;
use crate::processing::FileProcessor;
use crate::types::{BatchResponse, ProcessFileRequest, ProcessFileResponse, UploaderConfig};

/// Application state shared across handlers.
pub struct AppState {
    pub processor: Arc<FileProcessor>,
    pub relay: Arc<dyn Relay>,
    pub config: UploaderConfig,
}

impl AppState {
    /// Build the state from configuration and a relay.
    pub fn new(config: UploaderConfig, relay: Arc<dyn Relay>) -> Self {
        Self {
            processor: Arc::new(FileProcessor::new(config.chunking.clone())),
            relay,
            config,
        }
    }

    /// Process one file from the shared directory and relay its chunks.
    pub async fn process_file(&self, filename: &str) -> Result<ProcessFileResponse> {
        let path = self.processor.resolve(&self.config.docs_dir, filename)?;
        let texts = Arc::clone(&self.processor).process_blocking(path).await?;

        if texts.is_empty() {
            info!(file = %filename, "No chunks produced, skipping relay");
            return Ok(ProcessFileResponse::empty());
        }

        info!(file = %filename, chunks = texts.len(), "Relaying chunks");
        let next_response = self.relay.send_chunks(&texts).await;

        Ok(ProcessFileResponse {
            processed_chunks: texts,
            next_response: Some(next_response),
        })
    }

    /// Process every supported file in the shared directory.
    pub async fn process_all(&self) -> Result<BatchResponse> {
        let batch = BatchProcessor::new(
            Arc::clone(&self.processor),
            Arc::clone(&self.relay),
            BatchConfig::new(&self.config.docs_dir)
                .with_report_unsupported(self.config.report_unsupported),
        );

        Ok(BatchResponse {
            processed: batch.process_all().await?,
        })
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check endpoint.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Process exactly one file from the shared directory.
pub async fn process_single_file(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ProcessFileRequest>,
) -> Result<Json<ProcessFileResponse>> {
    info!(file = %request.filename, "Received process-file request");
    state.process_file(&request.filename).await.map(Json)
}

/// Process all supported files in the shared directory.
pub async fn process_all_files(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BatchResponse>> {
    info!("Received batch process request");
    state.process_all().await.map(Json)
}
