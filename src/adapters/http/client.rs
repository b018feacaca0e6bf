//! reqwest-backed key service client

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

use crate::core::error::ServiceError;
use crate::core::models::{CheckResponse, FileRef, UploadResponse};
use crate::core::ports::KeyService;

const UPLOAD_PATH: &str = "app/upload";
const CHECK_PATH: &str = "app/check";

/// Talks to the key-matching service over HTTP
#[derive(Debug, Clone)]
pub struct HttpKeyService {
    base_url: String,
    client: Client,
}

impl HttpKeyService {
    /// Client for the service at `base_url`, giving up on requests after `timeout`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ServiceError> {
        let client = Client::builder().timeout(timeout).build().map_err(|error| {
            ServiceError::Request(format!("failed to build HTTP client: {error}"))
        })?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// The service root
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let suffix = path.trim_start_matches('/');
        format!("{base}/{suffix}")
    }

    async fn file_part(file: &FileRef) -> Result<Part, ServiceError> {
        let bytes = tokio::fs::read(&file.path).await.map_err(|source| ServiceError::ReadFile {
            path: file.path.clone(),
            source,
        })?;
        Ok(Part::bytes(bytes).file_name(file.display_name.clone()))
    }

    async fn post_form<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T, ServiceError> {
        let url = self.endpoint(path);
        debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|error| ServiceError::Request(error.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| ServiceError::Request(format!("reading response: {error}")))?;
        debug!("POST {url} -> {status} ({} bytes)", body.len());

        if !status.is_success() {
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|error| ServiceError::Decode(error.to_string()))
    }
}

#[async_trait]
impl KeyService for HttpKeyService {
    async fn upload(&self, file: &FileRef, app_name: &str) -> Result<UploadResponse, ServiceError> {
        let form = Form::new()
            .part("file", Self::file_part(file).await?)
            .text("appName", app_name.to_string());
        self.post_form(UPLOAD_PATH, form).await
    }

    async fn check(
        &self,
        file: &FileRef,
        app_name: Option<&str>,
    ) -> Result<CheckResponse, ServiceError> {
        let mut form = Form::new().part("file", Self::file_part(file).await?);
        if let Some(name) = app_name {
            form = form.text("appName", name.to_string());
        }
        self.post_form(CHECK_PATH, form).await
    }
}
