//! HTTP key service
//!
//! Implements `KeyService` with multipart POSTs to the matching service.

mod client;

pub use client::HttpKeyService;
