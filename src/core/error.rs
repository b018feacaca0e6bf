//! Error types for the workflows and their collaborators

use std::path::PathBuf;

use thiserror::Error;

/// Which of the two workflows an error concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowKind {
    /// Tagged upload
    Upload,
    /// Key check
    Check,
}

impl std::fmt::Display for WorkflowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upload => write!(f, "upload"),
            Self::Check => write!(f, "check"),
        }
    }
}

/// Errors that end a dispatch attempt
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The application name is empty or whitespace-only
    #[error("Application Name is required")]
    MissingAppName,

    /// The workflow already has a request in flight
    #[error("{0} already in progress")]
    Busy(WorkflowKind),

    /// The service call failed
    #[error(transparent)]
    Transport(#[from] ServiceError),
}

/// Failures of the remote key service
///
/// The display string is what the user sees.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The selected file could not be read
    #[error("could not read {path}: {source}")]
    ReadFile {
        /// File that was selected
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The request never got a response
    #[error("request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status
    #[error("server returned {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// The response body was not the expected JSON
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Failures while handing an artifact to the user
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Writing or moving the artifact failed
    #[error("could not save {name}: {source}")]
    Io {
        /// Artifact name
        name: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The sink does not know the handle it was given
    #[error("unknown artifact handle {0}")]
    UnknownHandle(u64),
}
