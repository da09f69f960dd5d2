//! Output module for sending chunks to the downstream relay.

mod relay_client;

pub use relay_client::{no_chunks_payload, HttpRelayClient, Relay};
