//! Key service port
//!
//! Defines the contract of the remote key-matching service.

use async_trait::async_trait;

use super::super::error::ServiceError;
use super::super::models::{CheckResponse, FileRef, UploadResponse};

/// Remote service that stores and matches keys
///
/// Implementations send one request per call and never retry.
#[async_trait]
pub trait KeyService: Send + Sync {
    /// Store the keys in `file` under `app_name`
    async fn upload(&self, file: &FileRef, app_name: &str) -> Result<UploadResponse, ServiceError>;

    /// Match the keys in `file` against the stored keys
    ///
    /// `app_name` is forwarded only when present.
    async fn check(
        &self,
        file: &FileRef,
        app_name: Option<&str>,
    ) -> Result<CheckResponse, ServiceError>;
}
