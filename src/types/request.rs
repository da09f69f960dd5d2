//! Request and response bodies of the HTTP API.

use serde::{Deserialize, Serialize};

/// Request to process a single file from the shared directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessFileRequest {
    /// File name relative to the shared directory, e.g. `"pancakes.md"`
    pub filename: String,
}

/// Response of the single-file endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessFileResponse {
    /// Non-empty text chunks, in document order
    pub processed_chunks: Vec<String>,

    /// Relay response payload; absent when no chunks were produced
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub next_response: Option<serde_json::Value>,
}

impl ProcessFileResponse {
    /// Response for a document that produced no chunks.
    pub fn empty() -> Self {
        Self {
            processed_chunks: Vec::new(),
            next_response: None,
        }
    }
}

/// Outcome of one file in a batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileOutcome {
    /// The file was chunked and, if any chunks resulted, relayed.
    Processed {
        file: String,
        processed: usize,
        next_response: serde_json::Value,
    },
    /// The file failed; the batch carried on.
    Failed { file: String, error: String },
}

impl FileOutcome {
    /// Name of the file this outcome belongs to.
    pub fn file(&self) -> &str {
        match self {
            FileOutcome::Processed { file, .. } | FileOutcome::Failed { file, .. } => file,
        }
    }

    /// Check if the file failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, FileOutcome::Failed { .. })
    }
}

/// Response of the batch endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResponse {
    pub processed: Vec<FileOutcome>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_response_omits_relay_payload() {
        let value = serde_json::to_value(ProcessFileResponse::empty()).unwrap();
        assert_eq!(value, json!({ "processed_chunks": [] }));
    }

    #[test]
    fn test_outcome_shapes() {
        let ok = FileOutcome::Processed {
            file: "a.md".to_string(),
            processed: 2,
            next_response: json!({ "status": "ok" }),
        };
        let failed = FileOutcome::Failed {
            file: "b.xyz".to_string(),
            error: "Unsupported file type: .xyz".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({ "file": "a.md", "processed": 2, "next_response": { "status": "ok" } })
        );
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({ "file": "b.xyz", "error": "Unsupported file type: .xyz" })
        );
        assert_eq!(failed.file(), "b.xyz");
        assert!(failed.is_failure());
        assert!(!ok.is_failure());
    }
}
