//! Artifact sink port
//!
//! Defines how result files reach the user.

use super::super::error::ArtifactError;
use super::super::models::{Artifact, ArtifactHandle, DeliveredArtifact};

/// Environment-specific artifact delivery
///
/// Delivery happens in three steps: `stage` allocates a transient handle
/// backing the content, `deliver` hands it to the user and `release` frees the
/// handle. Callers release every staged handle, including after a failed
/// delivery.
pub trait ArtifactSink: Send + Sync {
    /// Allocate a handle holding the artifact's content
    fn stage(&self, artifact: &Artifact) -> Result<ArtifactHandle, ArtifactError>;

    /// Make the staged artifact retrievable by the user
    fn deliver(&self, handle: &ArtifactHandle) -> Result<DeliveredArtifact, ArtifactError>;

    /// Free whatever backs the handle
    fn release(&self, handle: ArtifactHandle);
}
