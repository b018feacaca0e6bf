//! Result artifacts handed to the user

use std::path::PathBuf;

use serde::Serialize;

/// Artifact name for the dataset returned by an upload
pub const UPLOADED_ARTIFACT: &str = "uploaded_data.csv";

/// Artifact name for the dataset returned by a check
pub const MATCHED_ARTIFACT: &str = "matched_data.csv";

/// MIME type of every artifact the service produces
pub const TEXT_CSV: &str = "text/csv";

/// A named blob of content waiting to be delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name the user receives
    pub name: String,
    /// MIME type of `content`
    pub mime_type: String,
    /// Raw bytes
    pub content: Vec<u8>,
}

impl Artifact {
    /// A CSV artifact
    #[must_use]
    pub fn csv(name: impl Into<String>, content: &str) -> Self {
        Self {
            name: name.into(),
            mime_type: TEXT_CSV.to_string(),
            content: content.as_bytes().to_vec(),
        }
    }
}

/// A transient resource backing a staged artifact
///
/// Sinks allocate one per artifact and must get it back through
/// `ArtifactSink::release`.
#[derive(Debug, PartialEq, Eq)]
pub struct ArtifactHandle {
    /// Sink-assigned identifier
    pub id: u64,
    /// Artifact name the handle was staged for
    pub name: String,
    /// Size of the staged content in bytes
    pub size: usize,
    /// Backing location, for sinks that use one
    pub location: Option<PathBuf>,
}

/// Where a delivered artifact ended up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveredArtifact {
    /// Artifact name
    pub name: String,
    /// Final location, for sinks that write to disk
    pub location: Option<PathBuf>,
    /// Number of bytes delivered
    pub size: usize,
}
