//! Service response bodies
//!
//! Field names follow the service's JSON (`matchedCount`, `appName`).

use serde::{Deserialize, Serialize};

/// Body returned by `POST /app/upload`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Name the service stored the file under
    pub filename: String,
    /// Free-form status message
    pub message: String,
    /// The uploaded dataset as raw CSV
    pub file: String,
}

/// Body returned by `POST /app/check`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    /// Name of the checked file
    pub filename: String,
    /// Keys found in the service's store
    #[serde(default)]
    pub entries: Option<Vec<MatchedKey>>,
    /// Number of matching keys
    #[serde(default)]
    pub matched_count: Option<u64>,
    /// The matched dataset as raw CSV
    pub file: String,
}

/// One key the service already knew about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedKey {
    /// The key itself
    pub key: String,
    /// Application the key was uploaded under
    pub app_name: String,
    /// Service-side hash of the key
    pub hash: String,
}

/// What a successful check leaves behind for display
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    /// Name of the checked file as reported by the service
    pub filename: String,
    /// Number of matching keys, zero when the service omitted it
    pub matched_count: u64,
    /// Matching keys, empty when the service omitted them
    pub entries: Vec<MatchedKey>,
}

impl From<&CheckResponse> for CheckSummary {
    fn from(response: &CheckResponse) -> Self {
        Self {
            filename: response.filename.clone(),
            matched_count: response.matched_count.unwrap_or(0),
            entries: response.entries.clone().unwrap_or_default(),
        }
    }
}
