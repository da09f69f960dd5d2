//! Core types for the uploader service.

mod chunk;
mod config;
mod element;
mod request;

pub use chunk::TextChunk;
pub use config::{ChunkConfig, UploaderConfig};
pub use element::{Element, ElementKind};
pub use request::{BatchResponse, FileOutcome, ProcessFileRequest, ProcessFileResponse};
