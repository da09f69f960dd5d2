//! Processing module: turns a shared-folder file into relay-ready texts.
//!
//! This module provides:
//! - File name resolution inside the shared directory
//! - The partition → chunk → filter pipeline
//! - Text filtering of chunk output

pub mod file_processor;
pub mod filter;

pub use file_processor::FileProcessor;
pub use filter::{chunk_texts, filter_texts, is_hidden, is_plain_file_name};
